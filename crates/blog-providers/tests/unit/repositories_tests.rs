//! Tests for the in-memory identity stores

use blog_domain::entities::{User, VerificationToken, VerificationTokenKind};
use blog_domain::error::Error;
use blog_domain::repositories::{UserRepository, VerificationTokenRepository};
use blog_providers::repositories::{
    InMemoryUserRepository, InMemoryVerificationTokenRepository,
};
use chrono::Duration;

#[tokio::test]
async fn test_save_assigns_ids() {
    let repo = InMemoryUserRepository::new();
    let first = repo.save(User::register("a@example.com", "a", "h")).await.unwrap();
    let second = repo.save(User::register("b@example.com", "b", "h")).await.unwrap();

    assert_eq!(first.id, 1);
    assert_eq!(second.id, 2);
    assert_eq!(repo.len(), 2);
}

#[tokio::test]
async fn test_lookups() {
    let repo = InMemoryUserRepository::new();
    let saved = repo
        .save(User::register("reader@example.com", "reader", "h"))
        .await
        .unwrap();

    assert_eq!(repo.find_by_id(saved.id).await.unwrap(), Some(saved.clone()));
    assert_eq!(
        repo.find_by_email("reader@example.com").await.unwrap(),
        Some(saved.clone())
    );
    assert_eq!(repo.find_by_email("Reader@example.com").await.unwrap(), None);
    assert_eq!(repo.find_by_nickname("reader").await.unwrap(), Some(saved));
    assert!(repo.exists_by_email("reader@example.com").await.unwrap());
    assert!(repo.exists_by_nickname("reader").await.unwrap());
    assert!(!repo.exists_by_nickname("writer").await.unwrap());
    assert_eq!(repo.find_by_id(99).await.unwrap(), None);
}

#[tokio::test]
async fn test_update_existing_record() {
    let repo = InMemoryUserRepository::new();
    let mut user = repo.save(User::register("a@example.com", "a", "h")).await.unwrap();
    user.mark_email_verified();
    repo.save(user.clone()).await.unwrap();

    let stored = repo.find_by_id(user.id).await.unwrap().unwrap();
    assert!(stored.email_verified);
    assert_eq!(repo.len(), 1);
}

#[tokio::test]
async fn test_unique_email_and_nickname() {
    let repo = InMemoryUserRepository::new();
    repo.save(User::register("a@example.com", "a", "h")).await.unwrap();

    let err = repo
        .save(User::register("a@example.com", "other", "h"))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::EmailDuplicated { .. }));

    let err = repo
        .save(User::register("b@example.com", "a", "h"))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::NicknameDuplicated { .. }));
}

#[tokio::test]
async fn test_saving_unknown_id_fails() {
    let repo = InMemoryUserRepository::new();
    let mut user = User::register("a@example.com", "a", "h");
    user.id = 77;

    let err = repo.save(user).await.unwrap_err();
    assert!(matches!(err, Error::UserNotFound { user_id: 77 }));
}

#[tokio::test]
async fn test_token_lookup_is_kind_scoped() {
    let repo = InMemoryVerificationTokenRepository::new();
    let saved = repo
        .save(VerificationToken::issue(
            1,
            VerificationTokenKind::PasswordReset,
            Duration::minutes(15),
        ))
        .await
        .unwrap();
    assert!(saved.id > 0);

    let found = repo
        .find_by_token_and_kind(&saved.token, VerificationTokenKind::PasswordReset)
        .await
        .unwrap();
    assert_eq!(found, Some(saved.clone()));

    let wrong_kind = repo
        .find_by_token_and_kind(&saved.token, VerificationTokenKind::EmailVerification)
        .await
        .unwrap();
    assert_eq!(wrong_kind, None);
}

#[tokio::test]
async fn test_token_deletes() {
    let repo = InMemoryVerificationTokenRepository::new();
    let kind = VerificationTokenKind::EmailVerification;
    let first = repo
        .save(VerificationToken::issue(1, kind, Duration::hours(1)))
        .await
        .unwrap();
    repo.save(VerificationToken::issue(1, kind, Duration::hours(1)))
        .await
        .unwrap();
    repo.save(VerificationToken::issue(2, kind, Duration::hours(1)))
        .await
        .unwrap();

    assert!(repo.delete(first.id).await.unwrap());
    assert!(!repo.delete(first.id).await.unwrap());
    assert_eq!(repo.tokens_for_user(1).len(), 1);
    assert_eq!(repo.delete_by_user_id(1).await.unwrap(), 1);
    assert_eq!(repo.delete_by_user_id(1).await.unwrap(), 0);
    assert_eq!(repo.len(), 1);
}
