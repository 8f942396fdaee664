use rand::rngs::OsRng;
use rand::Rng;

/// Uppercase letters and digits with the easily misread 0/O, 1/I/L removed.
pub const SESSION_CODE_ALPHABET: &[u8] = b"ABCDEFGHJKMNPQRSTUVWXYZ23456789";

pub const SESSION_CODE_LEN: usize = 6;

/// Generates a 6-character session code from the restricted alphabet.
///
/// Draws come from the OS random source; `gen_range` samples the index
/// without modulo bias. Retrying on collision with existing codes is the
/// session store's job.
pub fn generate_session_code() -> String {
    let mut rng = OsRng;
    (0..SESSION_CODE_LEN)
        .map(|_| SESSION_CODE_ALPHABET[rng.gen_range(0, SESSION_CODE_ALPHABET.len())] as char)
        .collect()
}
