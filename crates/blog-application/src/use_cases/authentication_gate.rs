//! Authentication Gate Use Case
//!
//! Turns a bearer token into an attached identity by reconciling three
//! sources: the signed token itself, the session cache and the identity
//! store. Evaluation order:
//!
//! 1. no bearer token ⇒ `NoToken`
//! 2. signature/expiry check fails ⇒ `TokenInvalid`
//! 3. claims give subject, role and version
//! 4. session state from the cache, loaded from the store and backfilled on a miss
//! 5. version differs from the session state ⇒ `VersionMismatch`
//! 6. status outside ACTIVE / PENDING_VERIFICATION ⇒ `StatusBlocked`
//! 7. otherwise `Authenticated` with the role's authority set
//!
//! Errors in any step are logged and reported as `TokenInvalid`.

use crate::domain_services::auth::{AuthenticationGateInterface, GateOutcome};
use async_trait::async_trait;
use blog_domain::constants::{BEARER_PREFIX, FIELD_STATUS, FIELD_VERSION, user_auth_key};
use blog_domain::error::Result;
use blog_domain::ports::providers::{CredentialSigner, SessionCacheProvider};
use blog_domain::repositories::UserRepository;
use blog_domain::value_objects::{AuthenticatedIdentity, TokenVersion, UserStatus};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Token carried by a `Bearer` authorization header value
pub fn bearer_token(authorization: Option<&str>) -> Option<&str> {
    authorization?
        .strip_prefix(BEARER_PREFIX)
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// Revocation-relevant account state as seen by the gate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    pub version: TokenVersion,
    pub status: UserStatus,
}

/// Per-request evaluator over signer, session cache and identity store
pub struct AuthenticationGate {
    signer: Arc<dyn CredentialSigner>,
    cache: Arc<dyn SessionCacheProvider>,
    users: Arc<dyn UserRepository>,
}

impl AuthenticationGate {
    pub fn new(
        signer: Arc<dyn CredentialSigner>,
        cache: Arc<dyn SessionCacheProvider>,
        users: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            signer,
            cache,
            users,
        }
    }

    /// Session state for an account, loading it from the store on a cache miss
    ///
    /// A miss on either field reloads both from the store and writes them back
    /// without a TTL. Concurrent misses write the same values, so no locking
    /// is needed.
    ///
    /// # Returns
    /// `None` when the account does not exist
    pub async fn get_or_load(&self, user_id: i64) -> Result<Option<SessionState>> {
        let key = user_auth_key(user_id);
        let version = self.cache.hash_get(&key, FIELD_VERSION).await?;
        let status = self.cache.hash_get(&key, FIELD_STATUS).await?;

        if let (Some(version), Some(status)) = (version, status) {
            return Ok(Some(SessionState {
                version: TokenVersion::new(version),
                status: UserStatus::from_name(Some(&status))?,
            }));
        }

        let Some(user) = self.users.find_by_id(user_id).await? else {
            return Ok(None);
        };

        self.cache
            .hash_put(&key, FIELD_VERSION, user.token_version.as_str())
            .await?;
        self.cache
            .hash_put(&key, FIELD_STATUS, user.status.name())
            .await?;
        debug!(user_id, "Backfilled session state from identity store");

        Ok(Some(SessionState {
            version: user.token_version,
            status: user.status,
        }))
    }

    /// Steps 3-7 for a token whose signature and expiry already checked out
    async fn authenticate_verified(&self, token: &str) -> Result<GateOutcome> {
        let claims = self.signer.claims(token)?;
        if !claims.is_access() {
            debug!(token_type = %claims.token_type, "Non-access token presented as bearer");
            return Ok(GateOutcome::TokenInvalid);
        }

        let user_id = claims.user_id()?;
        let role = claims.role()?;

        let Some(state) = self.get_or_load(user_id).await? else {
            info!(user_id, "Token subject has no account");
            return Ok(GateOutcome::TokenInvalid);
        };

        if claims.version.as_deref() != Some(state.version.as_str()) {
            info!(user_id, "Token version revoked");
            return Ok(GateOutcome::VersionMismatch);
        }

        if !state.status.is_available() {
            info!(user_id, status = %state.status, "Account blocked");
            return Ok(GateOutcome::StatusBlocked);
        }

        Ok(GateOutcome::Authenticated(AuthenticatedIdentity::new(
            user_id, role,
        )))
    }
}

#[async_trait]
impl AuthenticationGateInterface for AuthenticationGate {
    async fn evaluate(&self, authorization: Option<&str>) -> GateOutcome {
        let Some(token) = bearer_token(authorization) else {
            return GateOutcome::NoToken;
        };

        if !self.signer.verify(token) {
            return GateOutcome::TokenInvalid;
        }

        match self.authenticate_verified(token).await {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!(error = %e, "Authentication failed, continuing unauthenticated");
                GateOutcome::TokenInvalid
            }
        }
    }
}

impl std::fmt::Debug for AuthenticationGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthenticationGate")
            .field("signer", &self.signer.provider_name())
            .field("cache", &self.cache.provider_name())
            .finish_non_exhaustive()
    }
}
