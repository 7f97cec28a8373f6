//! Tests for the ES256 credential signer

use blog_domain::error::Error;
use blog_domain::ports::providers::CredentialSigner;
use blog_domain::value_objects::{Role, TokenType, TokenVersion};
use blog_providers::crypto::{EphemeralKeyProvider, JwtCredentialSigner, SigningKeyPair};
use chrono::Duration;

fn signer() -> JwtCredentialSigner {
    JwtCredentialSigner::from_provider(&EphemeralKeyProvider, Duration::hours(1), Duration::days(7))
        .expect("signer")
}

#[test]
fn test_access_token_round_trip() {
    let signer = signer();
    let token = signer
        .issue_access(42, Role::User, &TokenVersion::new("v7"))
        .unwrap();

    assert_eq!(token.split('.').count(), 3);
    assert!(signer.verify(&token));

    let claims = signer.claims(&token).unwrap();
    assert_eq!(claims.sub, "42");
    assert_eq!(claims.role.as_deref(), Some("USER"));
    assert_eq!(claims.version.as_deref(), Some("v7"));
    assert_eq!(claims.token_type, TokenType::Access);
    assert_eq!(claims.exp - claims.iat, 3600);
}

#[test]
fn test_refresh_token_has_no_role_or_version() {
    let signer = signer();
    let token = signer.issue_refresh(7).unwrap();

    let claims = signer.claims(&token).unwrap();
    assert_eq!(claims.sub, "7");
    assert_eq!(claims.token_type, TokenType::Refresh);
    assert!(claims.role.is_none());
    assert!(claims.version.is_none());
    assert_eq!(claims.exp - claims.iat, 7 * 24 * 3600);
}

#[test]
fn test_refresh_lifetime() {
    assert_eq!(
        signer().refresh_lifetime(),
        std::time::Duration::from_secs(604_800)
    );
}

#[test]
fn test_tampering_any_character_fails_verification() {
    let signer = signer();
    let token = signer
        .issue_access(42, Role::Admin, &TokenVersion::initial())
        .unwrap();

    for (index, ch) in token.char_indices() {
        if ch == '.' {
            continue;
        }
        let replacement = if ch == 'A' { 'B' } else { 'A' };
        let mut tampered = token.clone();
        tampered.replace_range(index..index + 1, &replacement.to_string());
        assert!(!signer.verify(&tampered), "tampered position {index} verified");
    }
}

#[test]
fn test_expired_token_fails() {
    let signer = JwtCredentialSigner::from_provider(
        &EphemeralKeyProvider,
        Duration::seconds(-60),
        Duration::seconds(-60),
    )
    .unwrap();

    let access = signer
        .issue_access(1, Role::User, &TokenVersion::initial())
        .unwrap();
    let refresh = signer.issue_refresh(1).unwrap();

    assert!(!signer.verify(&access));
    assert!(!signer.verify(&refresh));
    assert!(matches!(
        signer.claims(&access),
        Err(Error::TokenMalformed { .. })
    ));
    assert_eq!(signer.refresh_lifetime(), std::time::Duration::ZERO);
}

#[test]
fn test_garbage_is_malformed() {
    let signer = signer();
    for token in ["", "abc", "a.b.c", "not-a-token"] {
        assert!(!signer.verify(token));
        let err = signer.claims(token).unwrap_err();
        assert!(matches!(err, Error::TokenMalformed { .. }));
        assert_eq!(err.code(), "A0104");
    }
}

#[test]
fn test_other_keypair_rejects_token() {
    let issuer = signer();
    let other = JwtCredentialSigner::new(
        SigningKeyPair::generate().unwrap(),
        Duration::hours(1),
        Duration::days(7),
    );

    let token = issuer.issue_refresh(3).unwrap();
    assert!(issuer.verify(&token));
    assert!(!other.verify(&token));
}

#[test]
fn test_debug_hides_key_material() {
    let rendered = format!("{:?}", signer());
    assert!(rendered.contains("ES256"));
    assert!(!rendered.contains("PRIVATE"));
}
