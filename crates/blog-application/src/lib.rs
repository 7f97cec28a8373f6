//! Application Layer - Blog Credential Core
//!
//! Use cases that compose the domain ports into the two moving parts of the
//! credential subsystem.
//!
//! ## Use Cases
//!
//! - [`AuthenticationGate`]: per-request evaluation of a bearer token into an
//!   attached identity, or none. Reads the session cache and identity store,
//!   never writes durable state.
//! - [`SessionService`]: login, refresh, logout, password and account
//!   lifecycle, one-time-token flows. The only writer of durable state and
//!   of the session cache.
//!
//! ## Dependencies
//!
//! This crate depends only on:
//! - `blog-domain`: For entities, value objects, port traits and errors
//! - Pure Rust libraries for async and logging

pub mod domain_services;
pub mod use_cases;

pub use domain_services::*;
pub use use_cases::*;
