//! Null Event Publisher
//!
//! Testing stub implementation that discards all events.
//!
//! ## Usage
//!
//! ```rust
//! use blog_providers::events::NullEventPublisher;
//!
//! let publisher = NullEventPublisher::new();
//! // All events are silently discarded
//! ```

use async_trait::async_trait;
use blog_domain::error::Result;
use blog_domain::events::DomainEvent;
use blog_domain::ports::infrastructure::EventPublisher;
use std::sync::Arc;
use tracing::trace;

/// Null event publisher for testing
///
/// Discards all published events without any side effects.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullEventPublisher;

impl NullEventPublisher {
    /// Create a new null event publisher
    pub fn new() -> Self {
        Self
    }

    /// Create as Arc for sharing
    pub fn new_shared() -> Arc<Self> {
        Arc::new(Self::new())
    }
}

#[async_trait]
impl EventPublisher for NullEventPublisher {
    async fn publish(&self, event: DomainEvent) -> Result<()> {
        trace!(routing_key = event.routing_key(), "Discarding event");
        Ok(())
    }

    fn has_subscribers(&self) -> bool {
        false
    }
}
