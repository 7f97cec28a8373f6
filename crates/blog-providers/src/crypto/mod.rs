//! Token signing and password hashing

/// ES256 JWT signer
pub mod jwt;
/// Signing keypair and provisioning strategies
pub mod keys;
/// Argon2id / bcrypt password encoder
pub mod password;

pub use jwt::JwtCredentialSigner;
pub use keys::{
    EphemeralKeyProvider, PemFileKeyProvider, SigningKeyPair, SigningKeyProvider,
    write_pem_keypair,
};
pub use password::{HashingPasswordEncoder, PasswordAlgorithm};
