//! External Provider Ports
//!
//! | Port | Description |
//! |------|-------------|
//! | SessionCacheProvider | Per-account auth hash and refresh token slot |
//! | CredentialSigner | Signed access/refresh token issuance and verification |
//! | PasswordEncoder | Password hashing |

/// Session cache provider port
pub mod cache;
/// Signer and password hasher ports
pub mod crypto;

pub use cache::SessionCacheProvider;
pub use crypto::{CredentialSigner, PasswordEncoder};
