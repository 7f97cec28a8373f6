//! Configuration management
//!
//! Layered loading with figment: built-in defaults, then a TOML file, then
//! `BLOG_` environment variables (`BLOG_AUTH__JWT__ACCESS_EXPIRATION_SECS=600`).

pub mod loader;
pub mod types;

pub use loader::{ConfigBuilder, ConfigLoader};
pub use types::*;
