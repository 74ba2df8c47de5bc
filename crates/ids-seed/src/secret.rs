//! Client secret hashing.
//!
//! Client secrets are stored as base64-encoded SHA-256 digests. The token
//! endpoint compares incoming secrets against this representation, so the
//! format is part of the store contract and fixed.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use sha2::{Digest, Sha256};

/// Hashes a plaintext client secret for storage.
#[must_use]
pub fn hash_secret(plain: &str) -> String {
    let digest = Sha256::digest(plain.as_bytes());
    STANDARD.encode(digest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_digest() {
        // base64(sha256("secret"))
        assert_eq!(
            hash_secret("secret"),
            "K7gNU3sdo+OL0wNhqoVWhr3g6s1xYv72ol/pe/Unols="
        );
    }

    #[test]
    fn different_secrets_differ() {
        assert_ne!(hash_secret("secret"), hash_secret("secret1"));
    }
}
