//! Root application configuration

use super::{AuthConfig, EventBusConfig, LoggingConfig, SessionCacheConfig};
use serde::{Deserialize, Serialize};

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Token lifetimes, key source, password hashing
    pub auth: AuthConfig,

    /// Session cache backend
    pub cache: SessionCacheConfig,

    pub logging: LoggingConfig,

    /// Outbound account event channel
    pub event_bus: EventBusConfig,
}
