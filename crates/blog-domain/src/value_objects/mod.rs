//! Value Objects
//!
//! Immutable types with no identity of their own.

/// Authenticated identity and login result
pub mod identity;
/// Roles, permissions and the role-permission table
pub mod role;
/// Account lifecycle status
pub mod status;
/// Token claims, token types and revocation versions
pub mod token;

pub use identity::{AuthenticatedIdentity, LoginResult};
pub use role::{Permission, Role};
pub use status::UserStatus;
pub use token::{TokenClaims, TokenType, TokenVersion, lifetime_from_secs};
