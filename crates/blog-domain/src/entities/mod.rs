//! Domain Entities

/// Account identity record
pub mod user;
/// One-time verification and reset tokens
pub mod verification_token;

pub use user::User;
pub use verification_token::{VerificationToken, VerificationTokenKind};
