//! Password hashing with Argon2id and bcrypt
//!
//! New hashes use the configured algorithm. Verification detects the stored
//! format by prefix, so accounts hashed with bcrypt keep working after the
//! default moves to Argon2id.

use crate::constants::{ARGON2_HASH_PREFIX, BCRYPT_DEFAULT_COST, BCRYPT_HASH_PREFIX};
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use blog_domain::error::{Error, Result};
use blog_domain::ports::providers::PasswordEncoder;
use serde::{Deserialize, Serialize};

/// Algorithm used for new password hashes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PasswordAlgorithm {
    /// Argon2id (recommended)
    #[default]
    Argon2,
    /// bcrypt
    Bcrypt,
}

/// [`PasswordEncoder`] backed by Argon2id and bcrypt
#[derive(Clone)]
pub struct HashingPasswordEncoder {
    algorithm: PasswordAlgorithm,
    argon2: Argon2<'static>,
    bcrypt_cost: u32,
}

impl HashingPasswordEncoder {
    /// Create an encoder that hashes new passwords with Argon2id
    pub fn new() -> Self {
        Self::with_algorithm(PasswordAlgorithm::Argon2)
    }

    pub fn with_algorithm(algorithm: PasswordAlgorithm) -> Self {
        Self {
            algorithm,
            argon2: Argon2::default(),
            bcrypt_cost: BCRYPT_DEFAULT_COST,
        }
    }

    /// Override the bcrypt work factor
    pub fn with_bcrypt_cost(mut self, cost: u32) -> Self {
        self.bcrypt_cost = cost;
        self
    }

    pub fn algorithm(&self) -> PasswordAlgorithm {
        self.algorithm
    }

    fn hash_argon2(&self, raw_password: &str) -> Result<String> {
        let salt = SaltString::generate(&mut OsRng);
        self.argon2
            .hash_password(raw_password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| Error::authentication(format!("Password hashing failed: {e}")))
    }

    fn verify_argon2(&self, raw_password: &str, password_hash: &str) -> Result<bool> {
        let parsed = PasswordHash::new(password_hash)
            .map_err(|e| Error::authentication(format!("Invalid password hash format: {e}")))?;
        Ok(self
            .argon2
            .verify_password(raw_password.as_bytes(), &parsed)
            .is_ok())
    }

    /// Whether a stored hash was produced by an algorithm other than the configured one
    pub fn needs_rehash(&self, password_hash: &str) -> bool {
        match self.algorithm {
            PasswordAlgorithm::Argon2 => !password_hash.starts_with(ARGON2_HASH_PREFIX),
            PasswordAlgorithm::Bcrypt => !password_hash.starts_with(BCRYPT_HASH_PREFIX),
        }
    }
}

impl Default for HashingPasswordEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordEncoder for HashingPasswordEncoder {
    fn encode(&self, raw_password: &str) -> Result<String> {
        match self.algorithm {
            PasswordAlgorithm::Argon2 => self.hash_argon2(raw_password),
            PasswordAlgorithm::Bcrypt => bcrypt::hash(raw_password, self.bcrypt_cost)
                .map_err(|e| Error::authentication_with_source("Password hashing failed", e)),
        }
    }

    fn matches(&self, raw_password: &str, password_hash: &str) -> Result<bool> {
        if password_hash.is_empty() {
            return Ok(false);
        }

        if password_hash.starts_with(ARGON2_HASH_PREFIX) {
            self.verify_argon2(raw_password, password_hash)
        } else if password_hash.starts_with(BCRYPT_HASH_PREFIX) {
            bcrypt::verify(raw_password, password_hash)
                .map_err(|e| Error::authentication_with_source("Password verification failed", e))
        } else {
            Err(Error::authentication("Unknown password hash format"))
        }
    }

    fn provider_name(&self) -> &str {
        match self.algorithm {
            PasswordAlgorithm::Argon2 => "argon2",
            PasswordAlgorithm::Bcrypt => "bcrypt",
        }
    }
}

impl std::fmt::Debug for HashingPasswordEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HashingPasswordEncoder")
            .field("algorithm", &self.algorithm)
            .field("bcrypt_cost", &self.bcrypt_cost)
            .finish()
    }
}
