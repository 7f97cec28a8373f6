//! Shared wiring for use case tests: real in-memory providers, fast hashing

use blog_application::{AuthenticationGate, SessionService, SessionSettings};
use blog_domain::entities::User;
use blog_domain::events::DomainEvent;
use blog_domain::ports::providers::PasswordEncoder;
use blog_domain::repositories::UserRepository;
use blog_domain::value_objects::{Role, UserStatus};
use blog_providers::cache::MemorySessionCache;
use blog_providers::crypto::{
    EphemeralKeyProvider, HashingPasswordEncoder, JwtCredentialSigner, PasswordAlgorithm,
};
use blog_providers::events::{DomainEventStream, TokioEventPublisher};
use blog_providers::repositories::{InMemoryUserRepository, InMemoryVerificationTokenRepository};
use chrono::Duration;
use futures::StreamExt;
use std::sync::Arc;

pub const PASSWORD: &str = "Password123";

pub struct Harness {
    pub signer: Arc<JwtCredentialSigner>,
    pub cache: Arc<MemorySessionCache>,
    pub users: Arc<InMemoryUserRepository>,
    pub tokens: Arc<InMemoryVerificationTokenRepository>,
    pub encoder: Arc<HashingPasswordEncoder>,
    pub events: Arc<TokioEventPublisher>,
    pub service: SessionService,
    pub gate: AuthenticationGate,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_settings(SessionSettings::default())
    }

    pub fn with_settings(settings: SessionSettings) -> Self {
        let signer = Arc::new(
            JwtCredentialSigner::from_provider(
                &EphemeralKeyProvider,
                Duration::hours(1),
                Duration::days(7),
            )
            .expect("signer"),
        );
        let cache = Arc::new(MemorySessionCache::new());
        let users = Arc::new(InMemoryUserRepository::new());
        let tokens = Arc::new(InMemoryVerificationTokenRepository::new());
        let encoder = Arc::new(
            HashingPasswordEncoder::with_algorithm(PasswordAlgorithm::Bcrypt).with_bcrypt_cost(4),
        );
        let events = Arc::new(TokioEventPublisher::new());

        let service = SessionService::new(
            signer.clone(),
            cache.clone(),
            users.clone(),
            tokens.clone(),
            encoder.clone(),
            events.clone(),
            settings,
        );
        let gate = AuthenticationGate::new(signer.clone(), cache.clone(), users.clone());

        Self {
            signer,
            cache,
            users,
            tokens,
            encoder,
            events,
            service,
            gate,
        }
    }

    /// Store an account directly, bypassing registration
    pub async fn seed_user(&self, nickname: &str, status: UserStatus, role: Role) -> User {
        let hash = self.encoder.encode(PASSWORD).expect("hash");
        let mut user = User::register(format!("{nickname}@example.com"), nickname, hash);
        user.status = status;
        user.role = role;
        user.email_verified = status != UserStatus::PendingVerification;
        self.users.save(user).await.expect("save")
    }

    pub async fn active_user(&self, nickname: &str) -> User {
        self.seed_user(nickname, UserStatus::Active, Role::User).await
    }

    pub async fn stored(&self, user_id: i64) -> User {
        self.users
            .find_by_id(user_id)
            .await
            .expect("lookup")
            .expect("user exists")
    }

    pub fn subscribe(&self) -> DomainEventStream {
        self.events.subscribe()
    }
}

pub async fn next_event(stream: &mut DomainEventStream) -> DomainEvent {
    tokio::time::timeout(std::time::Duration::from_secs(1), stream.next())
        .await
        .expect("event published")
        .expect("stream open")
}

pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}
