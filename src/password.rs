use sha2::{Digest, Sha512};

/// Digest a plaintext password to its lowercase hex SHA-512 form.
///
/// Deterministic and unsalted: identical passwords produce identical digests
/// across users. This matches the stored contract; see DESIGN.md before
/// changing it.
pub fn digest(password: &str) -> String {
    let mut hasher = Sha512::new();
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}

/// Compare a plaintext password against a stored digest.
pub fn verify(password: &str, stored_digest: &str) -> bool {
    digest(password) == stored_digest
}
