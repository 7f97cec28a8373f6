//! Event Publisher Domain Port
//!
//! Defines the business contract for publishing account events. Services
//! publish without knowing whether a broadcast channel or a message broker
//! sits behind the trait.

use crate::error::Result;
use crate::events::DomainEvent;
use async_trait::async_trait;
use std::sync::Arc;

/// Domain Port for Publishing Account Events
///
/// # Example
///
/// ```ignore
/// use blog_domain::events::DomainEvent;
///
/// publisher
///     .publish(DomainEvent::PasswordResetRequested {
///         user_id: 42,
///         email: "reader@example.com".into(),
///         reset_token: token,
///     })
///     .await?;
/// ```
#[async_trait]
pub trait EventPublisher: Send + Sync {
    /// Publish an event to all subscribers
    ///
    /// "Published" means handed to the channel, not necessarily received.
    async fn publish(&self, event: DomainEvent) -> Result<()>;

    /// Check if there are any active subscribers
    fn has_subscribers(&self) -> bool;
}

/// Shared event publisher for dependency injection
pub type SharedEventPublisher = Arc<dyn EventPublisher>;
