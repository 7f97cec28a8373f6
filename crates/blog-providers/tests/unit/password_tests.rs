//! Tests for the password encoder

use blog_domain::ports::providers::PasswordEncoder;
use blog_providers::crypto::{HashingPasswordEncoder, PasswordAlgorithm};

fn bcrypt_encoder() -> HashingPasswordEncoder {
    HashingPasswordEncoder::with_algorithm(PasswordAlgorithm::Bcrypt).with_bcrypt_cost(4)
}

#[test]
fn test_argon2_encode_and_match() {
    let encoder = HashingPasswordEncoder::new();
    let hash = encoder.encode("Password123").unwrap();

    assert!(hash.starts_with("$argon2"));
    assert_ne!(hash, "Password123");
    assert!(encoder.matches("Password123", &hash).unwrap());
    assert!(!encoder.matches("Password124", &hash).unwrap());
    assert_eq!(encoder.provider_name(), "argon2");
}

#[test]
fn test_bcrypt_encode_and_match() {
    let encoder = bcrypt_encoder();
    let hash = encoder.encode("Password123").unwrap();

    assert!(hash.starts_with("$2"));
    assert!(encoder.matches("Password123", &hash).unwrap());
    assert!(!encoder.matches("wrong", &hash).unwrap());
    assert_eq!(encoder.provider_name(), "bcrypt");
}

#[test]
fn test_hashes_are_salted() {
    let encoder = HashingPasswordEncoder::new();
    let first = encoder.encode("same").unwrap();
    let second = encoder.encode("same").unwrap();
    assert_ne!(first, second);
}

#[test]
fn test_verifies_hashes_from_either_algorithm() {
    let bcrypt_hash = bcrypt_encoder().encode("legacy").unwrap();
    let argon2 = HashingPasswordEncoder::new();

    assert!(argon2.matches("legacy", &bcrypt_hash).unwrap());
    assert!(argon2.needs_rehash(&bcrypt_hash));
    assert!(!bcrypt_encoder().needs_rehash(&bcrypt_hash));
}

#[test]
fn test_empty_and_unknown_hashes() {
    let encoder = HashingPasswordEncoder::default();
    assert!(!encoder.matches("anything", "").unwrap());
    assert!(encoder.matches("anything", "plaintext").is_err());
    assert_eq!(encoder.algorithm(), PasswordAlgorithm::Argon2);
}

#[test]
fn test_algorithm_serde_names() {
    let parsed: PasswordAlgorithm = serde_json::from_str("\"bcrypt\"").unwrap();
    assert_eq!(parsed, PasswordAlgorithm::Bcrypt);
    assert_eq!(
        serde_json::to_string(&PasswordAlgorithm::Argon2).unwrap(),
        "\"argon2\""
    );
}
