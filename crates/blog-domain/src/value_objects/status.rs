//! Account status

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle status of an account
///
/// `PendingVerification -> Active` on email verification; any status may move
/// to `Suspended` or `Deleted`; nothing leaves `Deleted`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserStatus {
    PendingVerification,
    Active,
    Suspended,
    Deleted,
}

impl UserStatus {
    /// Every defined status
    pub const ALL: [UserStatus; 4] = [
        UserStatus::PendingVerification,
        UserStatus::Active,
        UserStatus::Suspended,
        UserStatus::Deleted,
    ];

    /// Canonical upper-case name, as stored in the session cache
    pub fn name(&self) -> &'static str {
        match self {
            Self::PendingVerification => "PENDING_VERIFICATION",
            Self::Active => "ACTIVE",
            Self::Suspended => "SUSPENDED",
            Self::Deleted => "DELETED",
        }
    }

    /// Case-insensitive lookup by name
    pub fn from_name(name: Option<&str>) -> Result<Self> {
        let name = name.ok_or_else(|| Error::param_missing("status"))?;
        Self::ALL
            .into_iter()
            .find(|status| status.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| Error::invalid_status(name))
    }

    /// Whether a bearer of this account may be authenticated per request
    ///
    /// Unverified accounts are still usable here; see [`Self::ensure_can_login`]
    /// for the stricter login rule.
    pub fn is_available(&self) -> bool {
        matches!(self, Self::Active | Self::PendingVerification)
    }

    /// Login eligibility: only `Active` accounts may obtain new tokens
    pub fn ensure_can_login(&self) -> Result<()> {
        match self {
            Self::Active => Ok(()),
            Self::PendingVerification => Err(Error::EmailNotVerified),
            Self::Suspended | Self::Deleted => Err(Error::AccountSuspended),
        }
    }
}

impl FromStr for UserStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(Some(s))
    }
}

impl fmt::Display for UserStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
