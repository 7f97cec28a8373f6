//! Unit tests for the session cache key layout

use blog_domain::constants::{
    PASSWORD_RESET_TTL_SECS, EMAIL_VERIFICATION_TTL_SECS, refresh_token_key, user_auth_key,
};

#[test]
fn test_cache_keys() {
    assert_eq!(user_auth_key(42), "user:auth:42");
    assert_eq!(refresh_token_key(42), "refresh:token:42");
}

#[test]
fn test_one_time_token_lifetimes() {
    assert_eq!(EMAIL_VERIFICATION_TTL_SECS, 24 * 60 * 60);
    assert_eq!(PASSWORD_RESET_TTL_SECS, 15 * 60);
}
