//! # Blog Credential Core - Provider Implementations
//!
//! Concrete implementations of the ports defined in `blog-domain`.
//!
//! ## Provider Categories
//!
//! | Category | Port | Implementations |
//! |----------|------|-----------------|
//! | Signer | `CredentialSigner` | JWT (ES256) |
//! | Password | `PasswordEncoder` | Argon2id / bcrypt |
//! | Session Cache | `SessionCacheProvider` | Memory, Redis |
//! | Identity Store | `UserRepository`, `VerificationTokenRepository` | Memory |
//! | Events | `EventPublisher` | Tokio, Null |
//!
//! ## Feature Flags
//!
//! ```toml
//! [dependencies]
//! blog-providers = { version = "0.1", features = ["cache-redis"] }
//! ```

// Re-export blog-domain types commonly used with providers
pub use blog_domain::error::{Error, Result};
pub use blog_domain::ports::{
    CredentialSigner, EventPublisher, PasswordEncoder, SessionCacheProvider,
};

/// Provider-specific constants
pub mod constants;

/// Token signing and password hashing
pub mod crypto;

/// Session cache implementations
pub mod cache;

/// Identity store implementations
pub mod repositories;

/// Event publisher implementations
pub mod events;
