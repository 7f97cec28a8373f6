//! Authentication Service Interfaces

use async_trait::async_trait;
use blog_domain::entities::User;
use blog_domain::error::Result;
use blog_domain::value_objects::{AuthenticatedIdentity, LoginResult, Permission, Role};

// ============================================================================
// Authentication Gate Interface
// ============================================================================

/// Terminal state of one gate evaluation
///
/// Every state except [`GateOutcome::Authenticated`] means the request
/// continues without an identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateOutcome {
    /// No bearer token on the request
    NoToken,
    /// Signature, expiry, structure, type or lookup failure
    TokenInvalid,
    /// Token issued under a since-revoked version
    VersionMismatch,
    /// Account is suspended or deleted
    StatusBlocked,
    Authenticated(AuthenticatedIdentity),
}

impl GateOutcome {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    pub fn into_identity(self) -> Option<AuthenticatedIdentity> {
        match self {
            Self::Authenticated(identity) => Some(identity),
            _ => None,
        }
    }

    /// Short name used in logs
    pub fn name(&self) -> &'static str {
        match self {
            Self::NoToken => "no_token",
            Self::TokenInvalid => "token_invalid",
            Self::VersionMismatch => "version_mismatch",
            Self::StatusBlocked => "status_blocked",
            Self::Authenticated(_) => "authenticated",
        }
    }
}

/// Per-request authentication evaluator
///
/// Never fails: every error collapses to an unauthenticated outcome, and the
/// authorization decision is left to the caller.
#[async_trait]
pub trait AuthenticationGateInterface: Send + Sync {
    /// Evaluate a raw `Authorization` header value
    async fn evaluate(&self, authorization: Option<&str>) -> GateOutcome;

    /// Identity for the header, if it authenticates
    async fn attempt_authenticate(
        &self,
        authorization: Option<&str>,
    ) -> Option<AuthenticatedIdentity> {
        self.evaluate(authorization).await.into_identity()
    }
}

// ============================================================================
// Session Service Interface
// ============================================================================

/// Credential Lifecycle Service Interface
///
/// Business failures come back as the typed variants of
/// [`blog_domain::Error`]; cache or store failures surface unchanged.
#[async_trait]
pub trait SessionServiceInterface: Send + Sync {
    /// Create a pending account and send its verification token
    ///
    /// # Returns
    /// The new account id
    async fn register(&self, email: &str, password: &str, nickname: &str) -> Result<i64>;

    /// Exchange an email or nickname plus password for a token pair
    async fn login(&self, identifier: &str, password: &str) -> Result<LoginResult>;

    /// Mint a new access token from the stored refresh token
    async fn refresh(&self, refresh_token: &str) -> Result<String>;

    /// Drop the account's refresh token
    async fn logout(&self, user_id: i64) -> Result<()>;

    /// Replace the password and revoke outstanding access tokens
    async fn change_password(
        &self,
        user_id: i64,
        old_password: &str,
        new_password: &str,
    ) -> Result<()>;

    /// Mark the account deleted and clear its session state
    async fn delete_account(&self, user_id: i64, password: &str) -> Result<()>;

    /// Consume an email verification token
    async fn verify_email(&self, token: &str) -> Result<()>;

    /// Send a password reset token if the email belongs to an account
    async fn forgot_password(&self, email: &str) -> Result<()>;

    /// Consume a password reset token and set a new password
    async fn reset_password(&self, token: &str, new_password: &str) -> Result<()>;

    /// Update nickname and bio; `bio = None` clears it
    async fn update_profile(&self, user_id: i64, nickname: &str, bio: Option<&str>)
    -> Result<User>;

    /// Endpoint-level permission check
    fn has_permission(&self, role: Role, permission: Option<Permission>) -> Result<bool> {
        role.has_permission(permission)
    }
}
