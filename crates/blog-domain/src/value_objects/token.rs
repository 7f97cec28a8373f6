//! Token claims and revocation versions

use crate::constants::{INITIAL_TOKEN_VERSION, TOKEN_VERSION_PREFIX};
use crate::error::{Error, Result};
use crate::value_objects::Role;
use chrono::Duration;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Value of the `type` claim
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    /// Short-lived request credential
    Access,
    /// Long-lived credential that only mints access tokens
    Refresh,
}

impl TokenType {
    /// Wire name of the token type
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Access => "access",
            Self::Refresh => "refresh",
        }
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Claims payload shared by access and refresh tokens
///
/// Refresh tokens carry neither `role` nor `version`. The serialized key
/// names (`sub`, `role`, `version`, `type`, `iat`, `exp`) are the wire format
/// and must stay identical between issuer and verifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Account id, as a decimal string
    pub sub: String,
    /// Role name (access tokens only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Token version the access token was issued under
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Access or refresh
    #[serde(rename = "type")]
    pub token_type: TokenType,
    /// Issued-at, seconds since the Unix epoch
    pub iat: i64,
    /// Expiry, seconds since the Unix epoch
    pub exp: i64,
}

impl TokenClaims {
    /// Account id parsed from `sub`
    pub fn user_id(&self) -> Result<i64> {
        self.sub
            .parse()
            .map_err(|_| Error::token_malformed(format!("subject is not an account id: {}", self.sub)))
    }

    /// Role resolved through the role directory
    pub fn role(&self) -> Result<Role> {
        Role::from_name(self.role.as_deref())
    }

    pub fn is_access(&self) -> bool {
        self.token_type == TokenType::Access
    }

    pub fn is_refresh(&self) -> bool {
        self.token_type == TokenType::Refresh
    }
}

/// Per-account revocation counter of the form `v<n>`
///
/// Compared only by exact equality; ordering is never inspected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenVersion(String);

impl TokenVersion {
    /// Version given to new accounts
    pub fn initial() -> Self {
        Self(INITIAL_TOKEN_VERSION.to_string())
    }

    /// Wrap a stored version string without validating it
    pub fn new<S: Into<String>>(value: S) -> Self {
        Self(value.into())
    }

    /// Next version after `current`
    ///
    /// `v<n>` becomes `v<n+1>`; anything unparseable (absent, wrong prefix,
    /// non-numeric or overflowing suffix) resets to `v1`.
    pub fn increment(current: Option<&str>) -> Self {
        current
            .and_then(|v| v.strip_prefix(TOKEN_VERSION_PREFIX))
            .and_then(|n| n.parse::<u64>().ok())
            .and_then(|n| n.checked_add(1))
            .map_or_else(Self::initial, |n| Self(format!("{TOKEN_VERSION_PREFIX}{n}")))
    }

    /// The version that follows this one
    pub fn next(&self) -> Self {
        Self::increment(Some(&self.0))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for TokenVersion {
    fn default() -> Self {
        Self::initial()
    }
}

impl fmt::Display for TokenVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TokenVersion {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Convert a configured lifetime in seconds, saturating at the largest representable span
pub fn lifetime_from_secs(secs: u64) -> Duration {
    i64::try_from(secs)
        .ok()
        .and_then(Duration::try_seconds)
        .unwrap_or(Duration::MAX)
}
