//! Infrastructure Layer - Blog Credential Core
//!
//! Cross-cutting technical concerns and the composition root.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment-based configuration (defaults, TOML file, `BLOG_` env vars) |
//! | [`logging`] | `tracing` subscriber setup with optional rolling file output |
//! | [`error_ext`] | Context helpers that map foreign errors into domain errors |
//! | [`di`] | Bootstrap that builds providers, gate and session service from config |
//! | [`constants`] | Infrastructure defaults |

pub mod config;
pub mod constants;
pub mod di;
pub mod error_ext;
pub mod logging;

pub use config::{AppConfig, ConfigLoader};
pub use di::{AuthContext, init_auth};
