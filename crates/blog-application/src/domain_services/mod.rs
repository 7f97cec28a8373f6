//! Domain Services
//!
//! Interfaces of the application services, so request adapters can depend on
//! a trait object instead of a concrete use case.
//!
//! | Service | Description |
//! |---------|-------------|
//! | [`AuthenticationGateInterface`] | Bearer token → identity evaluation |
//! | [`SessionServiceInterface`] | Credential lifecycle operations |

/// Authentication and session service interfaces
pub mod auth;

pub use auth::{AuthenticationGateInterface, GateOutcome, SessionServiceInterface};
