//! EventBus configuration types

use blog_providers::constants::EVENT_BUS_DEFAULT_CAPACITY;
use serde::{Deserialize, Serialize};

/// EventBus provider types
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum EventBusProvider {
    /// In-process broadcast channel (Tokio) - default
    #[default]
    Tokio,
    /// No-op event bus for testing
    Null,
}

/// EventBus configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventBusConfig {
    /// EventBus provider to use
    pub provider: EventBusProvider,

    /// Buffer capacity for in-process event bus (Tokio)
    /// Number of events that can be buffered before oldest events are dropped
    pub capacity: usize,
}

impl Default for EventBusConfig {
    fn default() -> Self {
        Self {
            provider: EventBusProvider::Tokio,
            capacity: EVENT_BUS_DEFAULT_CAPACITY,
        }
    }
}

impl EventBusConfig {
    /// Create config for Tokio broadcast with custom capacity
    pub fn tokio_with_capacity(capacity: usize) -> Self {
        Self {
            provider: EventBusProvider::Tokio,
            capacity,
        }
    }

    /// Create config for Null (testing)
    pub fn null() -> Self {
        Self {
            provider: EventBusProvider::Null,
            ..Default::default()
        }
    }
}
