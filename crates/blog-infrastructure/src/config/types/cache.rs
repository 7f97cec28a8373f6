//! Session cache configuration types

use serde::{Deserialize, Serialize};

/// Session cache backends
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SessionCacheBackend {
    /// In-process map - single instance only
    #[default]
    Memory,
    /// Shared Redis - required when several instances serve the same accounts
    Redis,
}

/// Session cache configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionCacheConfig {
    pub provider: SessionCacheBackend,

    /// Redis connection URL (for the Redis backend)
    /// Example: "redis://localhost:6379"
    pub redis_url: Option<String>,
}

impl SessionCacheConfig {
    /// Create config for the in-process cache (default)
    pub fn memory() -> Self {
        Self::default()
    }

    /// Create config for Redis
    pub fn redis(url: impl Into<String>) -> Self {
        Self {
            provider: SessionCacheBackend::Redis,
            redis_url: Some(url.into()),
        }
    }
}
