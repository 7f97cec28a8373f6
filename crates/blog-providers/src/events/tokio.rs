//! Tokio Broadcast Event Publisher
//!
//! In-process event distribution over a tokio broadcast channel. Events are
//! ephemeral: a publish with no live subscriber is dropped.
//!
//! ## Example
//!
//! ```ignore
//! use blog_providers::events::TokioEventPublisher;
//!
//! let publisher = TokioEventPublisher::new();
//! let mut stream = publisher.subscribe();
//!
//! publisher.publish(event).await?;
//! let received = stream.next().await;
//! ```

use crate::constants::EVENT_BUS_DEFAULT_CAPACITY;
use async_trait::async_trait;
use blog_domain::error::Result;
use blog_domain::events::DomainEvent;
use blog_domain::ports::infrastructure::EventPublisher;
use futures::Stream;
use futures::stream;
use std::pin::Pin;
use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::{debug, warn};

/// Boxed stream of published events
pub type DomainEventStream = Pin<Box<dyn Stream<Item = DomainEvent> + Send>>;

/// Event publisher using tokio broadcast channels
///
/// ## Capacity
///
/// When the channel is full, the oldest events are dropped. Slow subscribers
/// skip what they missed and keep receiving.
#[derive(Clone)]
pub struct TokioEventPublisher {
    sender: Arc<broadcast::Sender<DomainEvent>>,
    capacity: usize,
}

impl TokioEventPublisher {
    /// Create a publisher with the default capacity (1024)
    pub fn new() -> Self {
        Self::with_capacity(EVENT_BUS_DEFAULT_CAPACITY)
    }

    /// Create with custom capacity
    ///
    /// # Arguments
    ///
    /// * `capacity` - Maximum number of buffered events, at least 1
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        let (sender, _) = broadcast::channel(capacity);
        Self {
            sender: Arc::new(sender),
            capacity,
        }
    }

    /// Create as Arc for sharing
    pub fn new_shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// Get the current number of subscribers
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }

    /// Subscribe to events published after this call
    pub fn subscribe(&self) -> DomainEventStream {
        let receiver = self.sender.subscribe();

        let stream = stream::unfold(receiver, |mut rx| async move {
            loop {
                match rx.recv().await {
                    Ok(event) => return Some((event, rx)),
                    Err(broadcast::error::RecvError::Lagged(n)) => {
                        warn!("Event stream lagged by {} events", n);
                        continue;
                    }
                    Err(broadcast::error::RecvError::Closed) => return None,
                }
            }
        });

        Box::pin(stream)
    }
}

impl Default for TokioEventPublisher {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TokioEventPublisher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokioEventPublisher")
            .field("capacity", &self.capacity)
            .field("subscribers", &self.sender.receiver_count())
            .finish()
    }
}

#[async_trait]
impl EventPublisher for TokioEventPublisher {
    async fn publish(&self, event: DomainEvent) -> Result<()> {
        let routing_key = event.routing_key();
        match self.sender.send(event) {
            Ok(count) => debug!(routing_key, "Published event to {} subscribers", count),
            Err(_) => debug!(routing_key, "Published event but no subscribers"),
        }
        Ok(())
    }

    fn has_subscribers(&self) -> bool {
        self.sender.receiver_count() > 0
    }
}
