//! Account identity record

use crate::value_objects::{Role, TokenVersion, UserStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Durable account record owned by the identity store
///
/// Mutated only by the session orchestrator. `id == 0` marks a record that
/// has not been persisted yet; the store assigns the id on first save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub nickname: String,
    pub password_hash: String,
    /// Free-form profile text
    pub bio: Option<String>,
    pub role: Role,
    pub status: UserStatus,
    pub email_verified: bool,
    /// Revocation counter; bumping it invalidates every outstanding access token
    pub token_version: TokenVersion,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Fresh, unpersisted account awaiting email verification
    pub fn register<E, N, H>(email: E, nickname: N, password_hash: H) -> Self
    where
        E: Into<String>,
        N: Into<String>,
        H: Into<String>,
    {
        let now = Utc::now();
        Self {
            id: 0,
            email: email.into(),
            nickname: nickname.into(),
            password_hash: password_hash.into(),
            bio: None,
            role: Role::User,
            status: UserStatus::PendingVerification,
            email_verified: false,
            token_version: TokenVersion::initial(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace the password hash and move to the next token version
    pub fn rotate_password<H: Into<String>>(&mut self, password_hash: H) {
        self.password_hash = password_hash.into();
        self.token_version = self.token_version.next();
        self.touch();
    }

    /// Mark the email address verified
    ///
    /// Activates a pending account; suspended and deleted accounts keep their status.
    pub fn mark_email_verified(&mut self) {
        if self.status == UserStatus::PendingVerification {
            self.status = UserStatus::Active;
        }
        self.email_verified = true;
        self.touch();
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
