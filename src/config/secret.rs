//! Secret key generation.

use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use rand::Rng;

use super::constants::SECRET_KEY_BYTES;

/// Fresh URL-safe secret from the thread-local CSPRNG.
#[must_use]
pub fn generate_secret_key() -> String {
    let random_bytes: [u8; SECRET_KEY_BYTES] = rand::rng().random();
    URL_SAFE_NO_PAD.encode(random_bytes)
}
