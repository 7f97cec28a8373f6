//! Auth Bootstrap - Providers + Use Cases
//!
//! ```text
//! AppConfig → key provider → JwtCredentialSigner ─┐
//!           → session cache (memory | redis) ─────┼→ AuthenticationGate
//!           → in-memory stores ───────────────────┤
//!           → password encoder (argon2 | bcrypt) ─┼→ SessionService
//!           → event publisher (tokio | null) ─────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! let config = ConfigLoader::new().load()?;
//! let context = init_auth(config)?;
//!
//! let identity = context.gate().attempt_authenticate(header).await;
//! let tokens = context.sessions().login("reader@example.com", "secret").await?;
//! ```

use crate::config::loader::validate_app_config;
use crate::config::{AppConfig, EventBusProvider, KeySource, SessionCacheBackend};
use blog_application::use_cases::{AuthenticationGate, SessionService, SessionSettings};
use blog_domain::error::Result;
use blog_domain::ports::infrastructure::SharedEventPublisher;
use blog_domain::ports::providers::{CredentialSigner, PasswordEncoder, SessionCacheProvider};
use blog_domain::repositories::{UserRepository, VerificationTokenRepository};
use blog_domain::value_objects::lifetime_from_secs;
use blog_providers::cache::{MemorySessionCache, RedisSessionCache};
use blog_providers::constants::REDIS_DEFAULT_URL;
use blog_providers::crypto::{
    EphemeralKeyProvider, HashingPasswordEncoder, JwtCredentialSigner, PemFileKeyProvider,
    SigningKeyProvider,
};
use blog_providers::events::{DomainEventStream, NullEventPublisher, TokioEventPublisher};
use blog_providers::repositories::{
    InMemoryUserRepository, InMemoryVerificationTokenRepository,
};
use std::sync::Arc;
use tracing::info;

/// Wired credential core
///
/// Holds every provider behind its port so callers and tests can reach the
/// same instances the gate and session service use.
pub struct AuthContext {
    /// Application configuration
    pub config: Arc<AppConfig>,

    signer: Arc<dyn CredentialSigner>,
    cache: Arc<dyn SessionCacheProvider>,
    users: Arc<dyn UserRepository>,
    tokens: Arc<dyn VerificationTokenRepository>,
    events: SharedEventPublisher,
    broadcast: Option<Arc<TokioEventPublisher>>,
    gate: Arc<AuthenticationGate>,
    sessions: Arc<SessionService>,
}

impl AuthContext {
    pub fn signer(&self) -> Arc<dyn CredentialSigner> {
        Arc::clone(&self.signer)
    }

    pub fn cache(&self) -> Arc<dyn SessionCacheProvider> {
        Arc::clone(&self.cache)
    }

    pub fn users(&self) -> Arc<dyn UserRepository> {
        Arc::clone(&self.users)
    }

    pub fn verification_tokens(&self) -> Arc<dyn VerificationTokenRepository> {
        Arc::clone(&self.tokens)
    }

    pub fn event_publisher(&self) -> SharedEventPublisher {
        Arc::clone(&self.events)
    }

    /// Stream of published account events
    ///
    /// `None` when the null event bus is configured.
    pub fn subscribe_events(&self) -> Option<DomainEventStream> {
        self.broadcast.as_ref().map(|publisher| publisher.subscribe())
    }

    /// Per-request authentication gate
    pub fn gate(&self) -> Arc<AuthenticationGate> {
        Arc::clone(&self.gate)
    }

    /// Credential lifecycle orchestrator
    pub fn sessions(&self) -> Arc<SessionService> {
        Arc::clone(&self.sessions)
    }
}

impl std::fmt::Debug for AuthContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthContext")
            .field("signer", &self.signer.provider_name())
            .field("cache", &self.cache.provider_name())
            .field("event_bus", &self.config.event_bus.provider)
            .finish_non_exhaustive()
    }
}

/// Build the credential core from configuration
///
/// The configuration is validated first. Failing to establish the signing
/// keypair is fatal and returned as an error.
pub fn init_auth(config: AppConfig) -> Result<AuthContext> {
    validate_app_config(&config)?;

    let signer: Arc<dyn CredentialSigner> = Arc::new(create_signer(&config)?);
    let cache = create_cache(&config)?;

    let users: Arc<dyn UserRepository> = Arc::new(InMemoryUserRepository::new());
    let tokens: Arc<dyn VerificationTokenRepository> =
        Arc::new(InMemoryVerificationTokenRepository::new());

    let encoder: Arc<dyn PasswordEncoder> = Arc::new(
        HashingPasswordEncoder::with_algorithm(config.auth.password.algorithm)
            .with_bcrypt_cost(config.auth.password.bcrypt_cost),
    );

    let (events, broadcast) = match config.event_bus.provider {
        EventBusProvider::Tokio => {
            let publisher = Arc::new(TokioEventPublisher::with_capacity(
                config.event_bus.capacity,
            ));
            let shared: SharedEventPublisher = publisher.clone();
            (shared, Some(publisher))
        }
        EventBusProvider::Null => {
            let shared: SharedEventPublisher = NullEventPublisher::new_shared();
            (shared, None)
        }
    };

    let settings = SessionSettings {
        email_verification_ttl: lifetime_from_secs(config.auth.email_verification_ttl_secs),
        password_reset_ttl: lifetime_from_secs(config.auth.password_reset_ttl_secs),
    };

    let gate = Arc::new(AuthenticationGate::new(
        Arc::clone(&signer),
        Arc::clone(&cache),
        Arc::clone(&users),
    ));
    let sessions = Arc::new(SessionService::new(
        Arc::clone(&signer),
        Arc::clone(&cache),
        Arc::clone(&users),
        Arc::clone(&tokens),
        encoder,
        Arc::clone(&events),
        settings,
    ));

    info!(
        signer = signer.provider_name(),
        cache = cache.provider_name(),
        event_bus = ?config.event_bus.provider,
        "Credential core initialized"
    );

    Ok(AuthContext {
        config: Arc::new(config),
        signer,
        cache,
        users,
        tokens,
        events,
        broadcast,
        gate,
        sessions,
    })
}

fn create_signer(config: &AppConfig) -> Result<JwtCredentialSigner> {
    let jwt = &config.auth.jwt;
    let provider: Box<dyn SigningKeyProvider> = match &jwt.key_source {
        KeySource::Ephemeral => Box::new(EphemeralKeyProvider),
        KeySource::PemFiles {
            private_key_path,
            public_key_path,
        } => Box::new(PemFileKeyProvider::new(private_key_path, public_key_path)),
    };
    info!(key_source = provider.provider_name(), "Establishing signing keypair");

    JwtCredentialSigner::from_provider(
        provider.as_ref(),
        lifetime_from_secs(jwt.access_expiration_secs),
        lifetime_from_secs(jwt.refresh_expiration_secs),
    )
}

fn create_cache(config: &AppConfig) -> Result<Arc<dyn SessionCacheProvider>> {
    match config.cache.provider {
        SessionCacheBackend::Memory => Ok(Arc::new(MemorySessionCache::new())),
        SessionCacheBackend::Redis => {
            let url = config
                .cache
                .redis_url
                .as_deref()
                .unwrap_or(REDIS_DEFAULT_URL);
            let cache = RedisSessionCache::new(url)?;
            info!(server = %cache.server_address(), "Using Redis session cache");
            Ok(Arc::new(cache))
        }
    }
}
