//! Domain Events

/// Account lifecycle events
pub mod domain_events;

pub use domain_events::DomainEvent;
