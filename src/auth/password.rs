//! Credential hashing behind a narrow interface so the primitive can be
//! swapped without touching call sites.

use crate::config;

#[derive(Debug, thiserror::Error)]
pub enum PasswordError {
    #[error("password hashing failed: {0}")]
    Hash(#[from] bcrypt::BcryptError),
}

/// One-way transform of a plaintext password. Salted, so output differs
/// between calls; pair with [`verify_password`] rather than comparing hashes.
pub fn hash_password(password: &str) -> Result<String, PasswordError> {
    let cost = config::config().security.bcrypt_cost;
    Ok(bcrypt::hash(password, cost)?)
}

/// Check a plaintext password against a stored hash. Malformed stored hashes
/// read as a failed verification, not an error.
pub fn verify_password(password: &str, stored_hash: &str) -> bool {
    bcrypt::verify(password, stored_hash).unwrap_or(false)
}
