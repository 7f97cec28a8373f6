//! Bearer token request guards
//!
//! The gate runs at most once per request; its outcome is cached in the
//! request-local cache and shared by every guard on the route.
//!
//! | Gate outcome | [`Authenticated`] | [`MaybeAuthenticated`] |
//! |--------------|-------------------|------------------------|
//! | authenticated | success | `Some(identity)` |
//! | anything else | 401 | `None` |
//! | no gate managed | 503 | `None` |

use crate::builder::SharedGate;
use crate::constants::AUTHORIZATION_HEADER;
use blog_application::GateOutcome;
use blog_domain::value_objects::{AuthenticatedIdentity, Permission};
use rocket::http::Status;
use rocket::outcome::Outcome;
use rocket::request::{self, FromRequest, Request};
use std::convert::Infallible;
use std::ops::Deref;
use tracing::{debug, error, info};

/// Outcome of the gate for the current request; `None` when no gate is managed
struct GateEvaluation(Option<GateOutcome>);

async fn evaluate<'r>(request: &'r Request<'_>) -> Option<&'r GateOutcome> {
    let evaluation = request
        .local_cache_async(async {
            let Some(gate) = request.rocket().state::<SharedGate>() else {
                return GateEvaluation(None);
            };
            let authorization = request.headers().get_one(AUTHORIZATION_HEADER);
            let outcome = gate.evaluate(authorization).await;
            debug!(outcome = outcome.name(), uri = %request.uri(), "Gate evaluated");
            GateEvaluation(Some(outcome))
        })
        .await;
    evaluation.0.as_ref()
}

/// Why the [`Authenticated`] guard failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    /// No gate in managed state
    NotConfigured,
    /// No `Bearer` token in the `Authorization` header
    MissingToken,
    /// Token failed signature, expiry, type or account checks
    InvalidToken,
    /// Token version was revoked by a password change or reset
    Revoked,
    /// Account is suspended or deleted
    Blocked,
}

impl AuthError {
    /// Error for an outcome other than `Authenticated`
    pub fn from_outcome(outcome: &GateOutcome) -> Self {
        match outcome {
            GateOutcome::NoToken => Self::MissingToken,
            GateOutcome::VersionMismatch => Self::Revoked,
            GateOutcome::StatusBlocked => Self::Blocked,
            GateOutcome::TokenInvalid | GateOutcome::Authenticated(_) => Self::InvalidToken,
        }
    }

    pub fn status(self) -> Status {
        match self {
            Self::NotConfigured => Status::ServiceUnavailable,
            _ => Status::Unauthorized,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Self::NotConfigured => "Authentication is not configured",
            Self::MissingToken => "Bearer token required",
            Self::InvalidToken => "Token is invalid or expired",
            Self::Revoked => "Token has been revoked",
            Self::Blocked => "Account is suspended",
        }
    }
}

/// Request guard for routes that require a signed-in account
///
/// ```rust,ignore
/// #[rocket::get("/me")]
/// fn me(user: Authenticated) -> String {
///     user.principal.clone()
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Authenticated(pub AuthenticatedIdentity);

impl Authenticated {
    pub fn identity(&self) -> &AuthenticatedIdentity {
        &self.0
    }

    pub fn into_identity(self) -> AuthenticatedIdentity {
        self.0
    }

    /// Endpoint-level permission check
    ///
    /// # Errors
    /// `Status::Forbidden` when the role lacks `permission`
    pub fn require(&self, permission: Permission) -> Result<(), Status> {
        if self.0.has_permission(permission) {
            Ok(())
        } else {
            info!(
                user_id = self.0.user_id,
                permission = permission.name(),
                "Permission denied"
            );
            Err(Status::Forbidden)
        }
    }
}

impl Deref for Authenticated {
    type Target = AuthenticatedIdentity;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Authenticated {
    type Error = AuthError;

    async fn from_request(request: &'r Request<'_>) -> request::Outcome<Self, Self::Error> {
        match evaluate(request).await {
            Some(GateOutcome::Authenticated(identity)) => {
                Outcome::Success(Authenticated(identity.clone()))
            }
            Some(outcome) => {
                let err = AuthError::from_outcome(outcome);
                Outcome::Error((err.status(), err))
            }
            None => {
                error!("No authentication gate managed by this Rocket instance");
                let err = AuthError::NotConfigured;
                Outcome::Error((err.status(), err))
            }
        }
    }
}

/// Request guard for routes that serve anonymous and signed-in callers alike
///
/// Never fails: an absent, invalid or revoked token yields `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaybeAuthenticated(pub Option<AuthenticatedIdentity>);

impl MaybeAuthenticated {
    pub fn identity(&self) -> Option<&AuthenticatedIdentity> {
        self.0.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.0.is_some()
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for MaybeAuthenticated {
    type Error = Infallible;

    async fn from_request(request: &'r Request<'_>) -> request::Outcome<Self, Self::Error> {
        let identity = match evaluate(request).await {
            Some(GateOutcome::Authenticated(identity)) => Some(identity.clone()),
            _ => None,
        };
        Outcome::Success(MaybeAuthenticated(identity))
    }
}
