//! One-time tokens for email verification and password reset

use crate::constants::{EMAIL_VERIFICATION_TTL_SECS, PASSWORD_RESET_TTL_SECS};
use crate::value_objects::token::lifetime_from_secs;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Purpose of a one-time token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VerificationTokenKind {
    EmailVerification,
    PasswordReset,
}

impl VerificationTokenKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EmailVerification => "EMAIL_VERIFICATION",
            Self::PasswordReset => "PASSWORD_RESET",
        }
    }

    /// Default lifetime for this kind of token
    pub fn default_ttl(&self) -> Duration {
        lifetime_from_secs(match self {
            Self::EmailVerification => EMAIL_VERIFICATION_TTL_SECS,
            Self::PasswordReset => PASSWORD_RESET_TTL_SECS,
        })
    }
}

impl fmt::Display for VerificationTokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One-time token record, deleted when consumed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationToken {
    /// Store-assigned id (`0` until saved)
    pub id: i64,
    pub user_id: i64,
    /// Random UUID handed to the account holder
    pub token: String,
    pub kind: VerificationTokenKind,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl VerificationToken {
    /// New random token for `user_id` that expires after `ttl`
    pub fn issue(user_id: i64, kind: VerificationTokenKind, ttl: Duration) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            user_id,
            token: Uuid::new_v4().to_string(),
            kind,
            expires_at: now + ttl,
            created_at: now,
        }
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }
}
