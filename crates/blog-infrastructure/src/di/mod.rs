//! Composition root
//!
//! Builds providers from [`AppConfig`](crate::config::AppConfig) and wires
//! them into the authentication gate and the session service.

pub mod bootstrap;

pub use bootstrap::{AuthContext, init_auth};
