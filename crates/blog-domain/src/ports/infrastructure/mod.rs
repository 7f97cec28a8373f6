//! Infrastructure Service Ports

/// Event publisher port
pub mod events;

pub use events::{EventPublisher, SharedEventPublisher};
