//! Domain Port Interfaces
//!
//! Boundary contracts between the domain and the outside world. The domain
//! defines the traits; `blog-providers` implements them.
//!
//! ## Organization
//!
//! - **infrastructure/** - Infrastructure services (event publishing)
//! - **providers/** - External providers (session cache, signer, password hasher)

/// Infrastructure service ports
pub mod infrastructure;
/// External service provider ports
pub mod providers;

pub use infrastructure::{EventPublisher, SharedEventPublisher};
pub use providers::{CredentialSigner, PasswordEncoder, SessionCacheProvider};
