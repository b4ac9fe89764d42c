use argon2::password_hash::rand_core::{OsRng, RngCore};

const SECRET_BYTES: usize = 32;

/// URL-safe random secret, unique for all practical purposes.
pub(crate) fn generate_secret() -> String {
    let mut bytes = [0u8; SECRET_BYTES];
    OsRng.fill_bytes(&mut bytes);
    hex::encode(bytes)
}
