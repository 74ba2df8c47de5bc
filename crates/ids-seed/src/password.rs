//! Credential hashing for seed users.
//!
//! Seed passwords are defined in code as plaintext and must never reach the
//! store that way. Hashing uses Argon2id with a random salt and the OWASP
//! recommended parameters, producing a PHC-format string.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, Version,
};
use thiserror::Error;

/// A credential hashing failure.
#[derive(Debug, Error)]
#[error("credential hashing failed: {0}")]
pub struct HashError(String);

/// Argon2id parameters used for seed credentials.
#[derive(Debug, Clone, Copy)]
pub struct PasswordPolicy {
    /// Memory cost in KiB.
    pub memory_cost: u32,
    /// Time cost (iterations).
    pub time_cost: u32,
    /// Parallelism factor.
    pub parallelism: u32,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        // OWASP recommended settings for Argon2id
        Self {
            memory_cost: 19 * 1024,
            time_cost: 2,
            parallelism: 1,
        }
    }
}

/// Password hasher using Argon2id.
pub struct PasswordHasherService {
    policy: PasswordPolicy,
}

impl PasswordHasherService {
    /// Creates a hasher with the given policy.
    #[must_use]
    pub const fn new(policy: PasswordPolicy) -> Self {
        Self { policy }
    }

    /// Creates a hasher with the default policy.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(PasswordPolicy::default())
    }

    /// Hashes a password, returning the PHC-formatted string.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameters are rejected or hashing fails.
    pub fn hash(&self, password: &str) -> Result<String, HashError> {
        let salt = SaltString::generate(&mut OsRng);

        let params = Params::new(
            self.policy.memory_cost,
            self.policy.time_cost,
            self.policy.parallelism,
            None,
        )
        .map_err(|e| HashError(e.to_string()))?;

        let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);

        let hash = argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| HashError(e.to_string()))?;

        Ok(hash.to_string())
    }

    /// Verifies a password against a PHC-format hash.
    ///
    /// # Errors
    ///
    /// Returns an error if the hash cannot be parsed or does not match.
    pub fn verify(&self, password: &str, hash: &str) -> Result<(), HashError> {
        let parsed = PasswordHash::new(hash).map_err(|e| HashError(e.to_string()))?;

        Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .map_err(|e| HashError(e.to_string()))
    }
}

impl Default for PasswordHasherService {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_and_verify() {
        let hasher = PasswordHasherService::with_defaults();

        let hash = hasher.hash("Pass123$").unwrap();

        assert!(hash.starts_with("$argon2id$"));
        assert!(hasher.verify("Pass123$", &hash).is_ok());
        assert!(hasher.verify("wrong", &hash).is_err());
    }

    #[test]
    fn salts_differ_between_hashes() {
        let hasher = PasswordHasherService::with_defaults();

        let a = hasher.hash("Pass123$").unwrap();
        let b = hasher.hash("Pass123$").unwrap();

        assert_ne!(a, b);
    }
}
