//! Outbound account events
//!
//! Published on the `user.events` exchange and consumed outside this core
//! (the mailer). Each event carries the one-time token the consumer needs.

use crate::constants::{PASSWORD_RESET_ROUTING_KEY, USER_REGISTERED_ROUTING_KEY};
use serde::{Deserialize, Serialize};

/// Account lifecycle events
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum DomainEvent {
    /// A new account was created and awaits email verification
    UserRegistered {
        /// Id of the new account
        user_id: i64,
        /// Address the verification mail goes to
        email: String,
        /// Display name for the greeting
        nickname: String,
        /// Email verification token
        verification_token: String,
    },
    /// A password reset was requested for an existing account
    PasswordResetRequested {
        /// Id of the account
        user_id: i64,
        /// Address the reset mail goes to
        email: String,
        /// Password reset token
        reset_token: String,
    },
}

impl DomainEvent {
    /// Routing key on the user events exchange
    pub fn routing_key(&self) -> &'static str {
        match self {
            Self::UserRegistered { .. } => USER_REGISTERED_ROUTING_KEY,
            Self::PasswordResetRequested { .. } => PASSWORD_RESET_ROUTING_KEY,
        }
    }

    /// Account the event concerns
    pub fn user_id(&self) -> i64 {
        match self {
            Self::UserRegistered { user_id, .. } | Self::PasswordResetRequested { user_id, .. } => {
                *user_id
            }
        }
    }
}
