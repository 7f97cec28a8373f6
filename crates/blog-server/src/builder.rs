//! Rocket wiring
//!
//! Guards look the gate up in managed state, so every Rocket instance that
//! mounts guarded routes must be built through one of these functions.

use blog_application::AuthenticationGateInterface;
use blog_infrastructure::AuthContext;
use rocket::{Build, Rocket};
use std::sync::Arc;

/// Managed state read by the request guards
pub type SharedGate = Arc<dyn AuthenticationGateInterface>;

/// Manage `gate` so the request guards can reach it
pub fn attach_authentication(rocket: Rocket<Build>, gate: SharedGate) -> Rocket<Build> {
    rocket.manage(gate)
}

/// Manage the gate of a bootstrapped credential core
pub fn attach_context(rocket: Rocket<Build>, context: &AuthContext) -> Rocket<Build> {
    let gate: SharedGate = context.gate();
    attach_authentication(rocket, gate)
}
