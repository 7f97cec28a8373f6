//! # Blog Credential Domain
//!
//! Core types and contracts for credential issuance, verification and
//! revocation. This crate has no I/O of its own: every external concern
//! (token signing, session cache, identity store, event channel) is a port
//! trait implemented in `blog-providers`.
//!
//! ## Module Categories
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`entities`] | Identity record and one-time tokens |
//! | [`value_objects`] | Roles, permissions, statuses, token claims and versions |
//! | [`events`] | Outbound account notifications |
//! | [`ports`] | Signer, password hasher, session cache and event publisher contracts |
//! | [`repositories`] | Persistent identity store contracts |
//! | [`constants`] | Cache key layout, token types and default lifetimes |

pub mod constants;
pub mod entities;
pub mod error;
pub mod events;
pub mod ports;
pub mod repositories;
pub mod value_objects;

pub use entities::{User, VerificationToken};
pub use error::{Error, Result};
pub use events::DomainEvent;
pub use value_objects::{
    AuthenticatedIdentity, LoginResult, Permission, Role, TokenClaims, TokenType, TokenVersion,
    UserStatus,
};
