use color_eyre::eyre::Report;
use tracing_error::ErrorLayer;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Installs the tracing subscriber and color-eyre panic/error hooks.
/// `RUST_LOG` controls the filter, defaulting to `info`.
pub fn init() -> Result<(), Report> {
    let filter_layer = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt::layer())
        .with(ErrorLayer::default())
        .init();

    color_eyre::install()?;

    Ok(())
}
