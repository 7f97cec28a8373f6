//! Configuration types module

pub mod app;
pub mod auth;
pub mod cache;
pub mod event_bus;
pub mod logging;

// Re-export main types
pub use app::AppConfig;
pub use auth::{AuthConfig, JwtConfig, KeySource, PasswordConfig};
pub use cache::{SessionCacheBackend, SessionCacheConfig};
pub use event_bus::{EventBusConfig, EventBusProvider};
pub use logging::LoggingConfig;
