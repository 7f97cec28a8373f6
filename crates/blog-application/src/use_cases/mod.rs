//! Use Case Implementations

/// Bearer token evaluation
pub mod authentication_gate;
/// Credential lifecycle orchestration
pub mod session_service;

pub use authentication_gate::{AuthenticationGate, SessionState, bearer_token};
pub use session_service::{SessionService, SessionSettings};
