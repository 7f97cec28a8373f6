//! Repository Interfaces
//!
//! Persistence contracts for domain entities, independent of the storage
//! technology behind them.
//!
//! ## Repositories
//!
//! | Repository | Description |
//! |------------|-------------|
//! | [`UserRepository`] | Account records (the persistent identity store) |
//! | [`VerificationTokenRepository`] | One-time verification and reset tokens |

/// Account repository interface
pub mod user_repository;
/// One-time token repository interface
pub mod verification_token_repository;

pub use user_repository::UserRepository;
pub use verification_token_repository::VerificationTokenRepository;
