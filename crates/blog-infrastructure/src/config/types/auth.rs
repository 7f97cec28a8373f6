//! Authentication configuration types

use blog_domain::constants::{
    ACCESS_TOKEN_DEFAULT_TTL_SECS, EMAIL_VERIFICATION_TTL_SECS, PASSWORD_RESET_TTL_SECS,
    REFRESH_TOKEN_DEFAULT_TTL_SECS,
};
use blog_providers::constants::BCRYPT_DEFAULT_COST;
use blog_providers::crypto::PasswordAlgorithm;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where the ES256 signing keypair comes from
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum KeySource {
    /// Generate a fresh keypair at startup
    #[default]
    Ephemeral,
    /// Load PKCS#8 / SPKI PEM files
    PemFiles {
        private_key_path: PathBuf,
        public_key_path: PathBuf,
    },
}

/// JWT configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JwtConfig {
    /// Access token lifetime in seconds
    pub access_expiration_secs: u64,

    /// Refresh token lifetime in seconds
    pub refresh_expiration_secs: u64,

    pub key_source: KeySource,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            access_expiration_secs: ACCESS_TOKEN_DEFAULT_TTL_SECS,
            refresh_expiration_secs: REFRESH_TOKEN_DEFAULT_TTL_SECS,
            key_source: KeySource::Ephemeral,
        }
    }
}

/// Password hashing configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PasswordConfig {
    /// Algorithm for new hashes; existing hashes of either kind still verify
    pub algorithm: PasswordAlgorithm,

    pub bcrypt_cost: u32,
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self {
            algorithm: PasswordAlgorithm::Argon2,
            bcrypt_cost: BCRYPT_DEFAULT_COST,
        }
    }
}

/// Authentication configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    pub jwt: JwtConfig,

    pub password: PasswordConfig,

    /// Email verification token lifetime in seconds
    pub email_verification_ttl_secs: u64,

    /// Password reset token lifetime in seconds
    pub password_reset_ttl_secs: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt: JwtConfig::default(),
            password: PasswordConfig::default(),
            email_verification_ttl_secs: EMAIL_VERIFICATION_TTL_SECS,
            password_reset_ttl_secs: PASSWORD_RESET_TTL_SECS,
        }
    }
}
