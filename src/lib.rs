pub mod bong;
pub mod log;
pub mod messages;
pub mod selection;
