//! Credential Provider Ports
//!
//! Contracts for the token signer and the password hasher. Implementations
//! live in `blog-providers`; services depend only on these traits.

use crate::error::Result;
use crate::value_objects::{Role, TokenClaims, TokenVersion};
use std::time::Duration;

/// Credential signer port
///
/// Issues and verifies signed, self-contained tokens. The signing keypair is
/// owned by the implementation and fixed for its lifetime.
///
/// # Example
///
/// ```ignore
/// let token = signer.issue_access(42, Role::User, &TokenVersion::new("v7"))?;
/// assert!(signer.verify(&token));
/// let claims = signer.claims(&token)?;
/// assert_eq!(claims.version.as_deref(), Some("v7"));
/// ```
pub trait CredentialSigner: Send + Sync {
    /// Issue an access token carrying role and token version
    fn issue_access(&self, user_id: i64, role: Role, version: &TokenVersion) -> Result<String>;

    /// Issue a refresh token carrying only the subject
    fn issue_refresh(&self, user_id: i64) -> Result<String>;

    /// Check structure, signature and expiry
    ///
    /// Never fails: every problem is reported as `false`.
    fn verify(&self, token: &str) -> bool;

    /// Decode the claims of a verified token
    ///
    /// Fails with `TokenMalformed` when the token does not verify.
    fn claims(&self, token: &str) -> Result<TokenClaims>;

    /// Lifetime of issued refresh tokens
    fn refresh_lifetime(&self) -> Duration;

    /// Get the name/identifier of this provider implementation
    fn provider_name(&self) -> &str;
}

/// Password hashing port
pub trait PasswordEncoder: Send + Sync {
    /// Hash a raw password for storage
    fn encode(&self, raw_password: &str) -> Result<String>;

    /// Check a raw password against a stored hash
    fn matches(&self, raw_password: &str, password_hash: &str) -> Result<bool>;

    /// Get the name/identifier of this provider implementation
    fn provider_name(&self) -> &str;
}
