//! Revocation behavior across password changes, logout and account deletion
//!
//! Access tokens are revoked through the token version and refresh tokens
//! through the refresh slot; each operation touches only one of them.

use crate::fixtures::{Harness, PASSWORD, bearer};
use blog_application::{AuthenticationGateInterface, GateOutcome, SessionServiceInterface};
use blog_domain::constants::{FIELD_STATUS, FIELD_VERSION, refresh_token_key, user_auth_key};
use blog_domain::error::Error;
use blog_domain::ports::providers::SessionCacheProvider;
use blog_domain::value_objects::UserStatus;

#[tokio::test]
async fn test_change_password_revokes_access_but_not_refresh() {
    let h = Harness::new();
    let user = h.active_user("reader").await;
    let tokens = h.service.login("reader", PASSWORD).await.unwrap();

    h.service
        .change_password(user.id, PASSWORD, "NewPassword456")
        .await
        .unwrap();

    assert_eq!(h.stored(user.id).await.token_version.as_str(), "v2");
    assert_eq!(
        h.cache
            .hash_get(&user_auth_key(user.id), FIELD_VERSION)
            .await
            .unwrap()
            .as_deref(),
        Some("v2")
    );

    assert_eq!(
        h.gate.evaluate(Some(&bearer(&tokens.access_token))).await,
        GateOutcome::VersionMismatch
    );

    // The stored refresh token survives and mints tokens under the new version
    let access = h.service.refresh(&tokens.refresh_token).await.unwrap();
    assert!(h.gate.evaluate(Some(&bearer(&access))).await.is_authenticated());

    assert!(matches!(
        h.service.login("reader", PASSWORD).await.unwrap_err(),
        Error::PasswordError
    ));
    assert!(h.service.login("reader", "NewPassword456").await.is_ok());
}

#[tokio::test]
async fn test_change_password_failures() {
    let h = Harness::new();
    let user = h.active_user("reader").await;

    assert!(matches!(
        h.service
            .change_password(user.id, "wrong", "x")
            .await
            .unwrap_err(),
        Error::PasswordError
    ));
    assert_eq!(h.stored(user.id).await.token_version.as_str(), "v1");

    assert!(matches!(
        h.service.change_password(404, PASSWORD, "x").await.unwrap_err(),
        Error::UserNotFound { user_id: 404 }
    ));
}

#[tokio::test]
async fn test_logout_revokes_refresh_but_not_access() {
    let h = Harness::new();
    let user = h.active_user("reader").await;
    let tokens = h.service.login("reader", PASSWORD).await.unwrap();

    h.service.logout(user.id).await.unwrap();

    assert_eq!(h.cache.get(&refresh_token_key(user.id)).await.unwrap(), None);
    assert!(matches!(
        h.service.refresh(&tokens.refresh_token).await.unwrap_err(),
        Error::TokenInvalid
    ));
    assert!(h
        .gate
        .evaluate(Some(&bearer(&tokens.access_token)))
        .await
        .is_authenticated());

    // Logging out twice is harmless
    h.service.logout(user.id).await.unwrap();
}

#[tokio::test]
async fn test_delete_account_blocks_every_token() {
    let h = Harness::new();
    let user = h.active_user("reader").await;
    let tokens = h.service.login("reader", PASSWORD).await.unwrap();

    h.service.delete_account(user.id, PASSWORD).await.unwrap();

    assert_eq!(h.stored(user.id).await.status, UserStatus::Deleted);
    assert_eq!(h.cache.get(&refresh_token_key(user.id)).await.unwrap(), None);

    assert_eq!(
        h.gate.evaluate(Some(&bearer(&tokens.access_token))).await,
        GateOutcome::StatusBlocked
    );
    // The gate backfilled the deleted status from the store
    assert_eq!(
        h.cache
            .hash_get(&user_auth_key(user.id), FIELD_STATUS)
            .await
            .unwrap()
            .as_deref(),
        Some("DELETED")
    );

    assert!(matches!(
        h.service.refresh(&tokens.refresh_token).await.unwrap_err(),
        Error::TokenInvalid
    ));
    assert!(matches!(
        h.service.login("reader", PASSWORD).await.unwrap_err(),
        Error::AccountSuspended
    ));
}

#[tokio::test]
async fn test_delete_account_requires_password() {
    let h = Harness::new();
    let user = h.active_user("reader").await;
    h.service.login("reader", PASSWORD).await.unwrap();

    assert!(matches!(
        h.service.delete_account(user.id, "wrong").await.unwrap_err(),
        Error::PasswordError
    ));
    assert_eq!(h.stored(user.id).await.status, UserStatus::Active);
    assert!(h.cache.get(&refresh_token_key(user.id)).await.unwrap().is_some());
}
