//! Event Publisher Implementations
//!
//! ## Available Providers
//!
//! | Provider | Type | Description |
//! |----------|------|-------------|
//! | NullEventPublisher | Testing | Discards all events |
//! | TokioEventPublisher | In-Process | Tokio broadcast channels |
//!
//! A broker-backed publisher (the `user.events` exchange) plugs in behind the
//! same [`EventPublisher`] trait.

pub mod null;
pub mod tokio;

pub use null::NullEventPublisher;
pub use tokio::{DomainEventStream, TokioEventPublisher};

pub use blog_domain::events::DomainEvent;
pub use blog_domain::ports::infrastructure::EventPublisher;
