//! Domain layer constants
//!
//! Cache key layout, token claim values and default credential lifetimes.
//! Infrastructure-specific constants remain in `blog_infrastructure::constants`.

// ============================================================================
// SESSION CACHE LAYOUT
// ============================================================================

/// Key prefix of the per-account auth hash (`user:auth:{id}`)
pub const USER_AUTH_KEY_PREFIX: &str = "user:auth:";

/// Key prefix of the per-account refresh token slot (`refresh:token:{id}`)
pub const REFRESH_TOKEN_KEY_PREFIX: &str = "refresh:token:";

/// Auth hash field holding the current token version
pub const FIELD_VERSION: &str = "version";

/// Auth hash field holding the account status name
pub const FIELD_STATUS: &str = "status";

/// Auth hash field holding the account role name
pub const FIELD_ROLE: &str = "role";

/// Session cache key of the auth hash for an account
pub fn user_auth_key(user_id: i64) -> String {
    format!("{USER_AUTH_KEY_PREFIX}{user_id}")
}

/// Session cache key of the refresh token slot for an account
pub fn refresh_token_key(user_id: i64) -> String {
    format!("{REFRESH_TOKEN_KEY_PREFIX}{user_id}")
}

// ============================================================================
// TOKEN CONSTANTS
// ============================================================================

/// Prefix of every token version string
pub const TOKEN_VERSION_PREFIX: &str = "v";

/// Version assigned on registration and whenever a stored version is unreadable
pub const INITIAL_TOKEN_VERSION: &str = "v1";

/// Default access token lifetime in seconds (1 hour)
pub const ACCESS_TOKEN_DEFAULT_TTL_SECS: u64 = 3600;

/// Default refresh token lifetime in seconds (7 days)
pub const REFRESH_TOKEN_DEFAULT_TTL_SECS: u64 = 604_800;

/// Email verification token lifetime in seconds (24 hours)
pub const EMAIL_VERIFICATION_TTL_SECS: u64 = 86_400;

/// Password reset token lifetime in seconds (15 minutes)
pub const PASSWORD_RESET_TTL_SECS: u64 = 900;

/// Scheme prefix of a bearer `Authorization` header value
pub const BEARER_PREFIX: &str = "Bearer ";

// ============================================================================
// EVENT ROUTING
// ============================================================================

/// Routing key of the account-registered event
pub const USER_REGISTERED_ROUTING_KEY: &str = "user.registered";

/// Routing key of the password-reset-requested event
pub const PASSWORD_RESET_ROUTING_KEY: &str = "user.password_reset_requested";
