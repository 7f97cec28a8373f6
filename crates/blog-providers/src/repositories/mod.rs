//! Identity Store Implementations
//!
//! In-process stores for accounts and one-time tokens. They back tests and
//! single-node deployments; a database-backed store implements the same
//! repository traits.

pub mod memory_user;
pub mod memory_verification_token;

pub use memory_user::InMemoryUserRepository;
pub use memory_verification_token::InMemoryVerificationTokenRepository;
