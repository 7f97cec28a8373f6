//! Unit tests for token claims and versions

use blog_domain::{Error, Role, TokenClaims, TokenType, TokenVersion};

#[test]
fn test_increment_version() {
    assert_eq!(TokenVersion::increment(Some("v9")).as_str(), "v10");
    assert_eq!(TokenVersion::increment(Some("v1")).as_str(), "v2");
    assert_eq!(TokenVersion::increment(None).as_str(), "v1");
    assert_eq!(TokenVersion::increment(Some("vX")).as_str(), "v1");
    assert_eq!(TokenVersion::increment(Some("abc")).as_str(), "v1");
    assert_eq!(TokenVersion::increment(Some("invalid")).as_str(), "v1");
    assert_eq!(TokenVersion::increment(Some("v")).as_str(), "v1");
}

#[test]
fn test_increment_version_overflow_resets() {
    let max = format!("v{}", u64::MAX);
    assert_eq!(TokenVersion::increment(Some(&max)).as_str(), "v1");
}

#[test]
fn test_version_next() {
    let version = TokenVersion::new("v41");
    assert_eq!(version.next(), TokenVersion::new("v42"));
    assert_eq!(TokenVersion::default(), TokenVersion::initial());
}

#[test]
fn test_claims_wire_keys() {
    let claims = TokenClaims {
        sub: "42".to_string(),
        role: Some("USER".to_string()),
        version: Some("v7".to_string()),
        token_type: TokenType::Access,
        iat: 1_700_000_000,
        exp: 1_700_003_600,
    };
    let value = serde_json::to_value(&claims).unwrap();
    assert_eq!(value["sub"], "42");
    assert_eq!(value["role"], "USER");
    assert_eq!(value["version"], "v7");
    assert_eq!(value["type"], "access");
}

#[test]
fn test_refresh_claims_omit_role_and_version() {
    let claims = TokenClaims {
        sub: "42".to_string(),
        role: None,
        version: None,
        token_type: TokenType::Refresh,
        iat: 1_700_000_000,
        exp: 1_700_604_800,
    };
    let value = serde_json::to_value(&claims).unwrap();
    assert!(value.get("role").is_none());
    assert!(value.get("version").is_none());
    assert_eq!(value["type"], "refresh");
    assert!(claims.is_refresh());
    assert!(matches!(claims.role(), Err(Error::ParamMissing { .. })));
}

#[test]
fn test_claims_role_and_subject() {
    let claims: TokenClaims = serde_json::from_str(
        r#"{"sub":"7","role":"AUTHOR","version":"v2","type":"access","iat":1,"exp":2}"#,
    )
    .unwrap();
    assert_eq!(claims.user_id().unwrap(), 7);
    assert_eq!(claims.role().unwrap(), Role::Author);

    let bad: TokenClaims = serde_json::from_str(
        r#"{"sub":"alice","role":"GUEST","type":"access","iat":1,"exp":2}"#,
    )
    .unwrap();
    assert!(matches!(bad.user_id(), Err(Error::TokenMalformed { .. })));
    assert!(matches!(bad.role(), Err(Error::InvalidRole { .. })));
}
