//! Session Service Use Case
//!
//! Orchestrates login, refresh, logout, password changes, account deletion
//! and the one-time-token flows. This is the only component that writes the
//! identity store and the session cache.
//!
//! ## Revocation
//!
//! Two independent mechanisms, each covering one token type:
//!
//! - bumping the account's token version revokes every access token issued
//!   under the old version (password change and reset)
//! - deleting the refresh slot revokes the refresh token (logout)
//!
//! Neither operation touches the other mechanism, so a password change leaves
//! the stored refresh token usable and logout leaves issued access tokens
//! valid until they expire.

use crate::domain_services::auth::SessionServiceInterface;
use async_trait::async_trait;
use blog_domain::constants::{
    EMAIL_VERIFICATION_TTL_SECS, FIELD_ROLE, FIELD_STATUS, FIELD_VERSION,
    PASSWORD_RESET_TTL_SECS, refresh_token_key, user_auth_key,
};
use blog_domain::entities::{User, VerificationToken, VerificationTokenKind};
use blog_domain::error::{Error, Result};
use blog_domain::events::DomainEvent;
use blog_domain::ports::infrastructure::SharedEventPublisher;
use blog_domain::ports::providers::{CredentialSigner, PasswordEncoder, SessionCacheProvider};
use blog_domain::repositories::{UserRepository, VerificationTokenRepository};
use blog_domain::value_objects::{LoginResult, Role, TokenVersion, UserStatus, lifetime_from_secs};
use chrono::Duration;
use std::sync::Arc;
use tracing::{debug, info};

/// Lifetimes of the one-time tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSettings {
    pub email_verification_ttl: Duration,
    pub password_reset_ttl: Duration,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            email_verification_ttl: lifetime_from_secs(EMAIL_VERIFICATION_TTL_SECS),
            password_reset_ttl: lifetime_from_secs(PASSWORD_RESET_TTL_SECS),
        }
    }
}

/// Credential lifecycle orchestrator
pub struct SessionService {
    signer: Arc<dyn CredentialSigner>,
    cache: Arc<dyn SessionCacheProvider>,
    users: Arc<dyn UserRepository>,
    tokens: Arc<dyn VerificationTokenRepository>,
    encoder: Arc<dyn PasswordEncoder>,
    events: SharedEventPublisher,
    settings: SessionSettings,
}

impl SessionService {
    /// Create new session service with injected dependencies
    pub fn new(
        signer: Arc<dyn CredentialSigner>,
        cache: Arc<dyn SessionCacheProvider>,
        users: Arc<dyn UserRepository>,
        tokens: Arc<dyn VerificationTokenRepository>,
        encoder: Arc<dyn PasswordEncoder>,
        events: SharedEventPublisher,
        settings: SessionSettings,
    ) -> Self {
        Self {
            signer,
            cache,
            users,
            tokens,
            encoder,
            events,
            settings,
        }
    }

    pub fn settings(&self) -> &SessionSettings {
        &self.settings
    }

    async fn require_user(&self, user_id: i64) -> Result<User> {
        self.users
            .find_by_id(user_id)
            .await?
            .ok_or(Error::UserNotFound { user_id })
    }

    /// Account for an email, falling back to a nickname
    async fn resolve_identifier(&self, identifier: &str) -> Result<Option<User>> {
        match self.users.find_by_email(identifier).await? {
            Some(user) => Ok(Some(user)),
            None => self.users.find_by_nickname(identifier).await,
        }
    }

    fn check_password(&self, raw_password: &str, user: &User) -> Result<()> {
        if self.encoder.matches(raw_password, &user.password_hash)? {
            Ok(())
        } else {
            Err(Error::PasswordError)
        }
    }

    /// Unexpired one-time token of `kind`; missing and expired look the same
    async fn redeemable_token(
        &self,
        token: &str,
        kind: VerificationTokenKind,
    ) -> Result<VerificationToken> {
        match self.tokens.find_by_token_and_kind(token, kind).await? {
            Some(record) if !record.is_expired() => Ok(record),
            Some(_) => {
                debug!(kind = %kind, "One-time token expired");
                Err(Error::TokenInvalid)
            }
            None => Err(Error::TokenInvalid),
        }
    }

    /// Redeem a one-time token; only the caller whose delete removed the record proceeds
    async fn consume_token(
        &self,
        token: &str,
        kind: VerificationTokenKind,
    ) -> Result<VerificationToken> {
        let record = self.redeemable_token(token, kind).await?;
        if !self.tokens.delete(record.id).await? {
            debug!(kind = %kind, "One-time token already consumed");
            return Err(Error::TokenInvalid);
        }
        Ok(record)
    }

    /// Persist a new password hash under the next token version
    async fn rotate_password(&self, mut user: User, new_password: &str) -> Result<User> {
        user.rotate_password(self.encoder.encode(new_password)?);
        let user = self.users.save(user).await?;
        self.cache
            .hash_put(
                &user_auth_key(user.id),
                FIELD_VERSION,
                user.token_version.as_str(),
            )
            .await?;
        Ok(user)
    }
}

fn require_param(name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::param_missing(name));
    }
    Ok(())
}

#[async_trait]
impl SessionServiceInterface for SessionService {
    async fn register(&self, email: &str, password: &str, nickname: &str) -> Result<i64> {
        require_param("email", email)?;
        require_param("password", password)?;
        require_param("nickname", nickname)?;

        if self.users.exists_by_email(email).await? {
            return Err(Error::EmailDuplicated {
                email: email.to_string(),
            });
        }
        if self.users.exists_by_nickname(nickname).await? {
            return Err(Error::NicknameDuplicated {
                nickname: nickname.to_string(),
            });
        }

        let password_hash = self.encoder.encode(password)?;
        let user = self
            .users
            .save(User::register(email, nickname, password_hash))
            .await?;

        let verification = self
            .tokens
            .save(VerificationToken::issue(
                user.id,
                VerificationTokenKind::EmailVerification,
                self.settings.email_verification_ttl,
            ))
            .await?;

        self.events
            .publish(DomainEvent::UserRegistered {
                user_id: user.id,
                email: user.email.clone(),
                nickname: user.nickname.clone(),
                verification_token: verification.token,
            })
            .await?;

        info!(user_id = user.id, "Account registered");
        Ok(user.id)
    }

    async fn login(&self, identifier: &str, password: &str) -> Result<LoginResult> {
        let Some(user) = self.resolve_identifier(identifier).await? else {
            debug!("Login for unknown identifier");
            return Err(Error::PasswordError);
        };
        self.check_password(password, &user)?;
        user.status.ensure_can_login()?;

        let access_token = self
            .signer
            .issue_access(user.id, user.role, &user.token_version)?;
        let refresh_token = self.signer.issue_refresh(user.id)?;

        let key = user_auth_key(user.id);
        self.cache
            .hash_put(&key, FIELD_VERSION, user.token_version.as_str())
            .await?;
        self.cache
            .hash_put(&key, FIELD_STATUS, user.status.name())
            .await?;
        self.cache
            .hash_put(&key, FIELD_ROLE, user.role.name())
            .await?;

        // Overwriting the slot retires any earlier refresh token of this account
        self.cache
            .set_with_ttl(
                &refresh_token_key(user.id),
                &refresh_token,
                self.signer.refresh_lifetime(),
            )
            .await?;

        info!(user_id = user.id, "Login succeeded");
        Ok(LoginResult {
            access_token,
            refresh_token,
        })
    }

    async fn refresh(&self, refresh_token: &str) -> Result<String> {
        if !self.signer.verify(refresh_token) {
            return Err(Error::TokenInvalid);
        }
        let claims = self.signer.claims(refresh_token)?;
        if !claims.is_refresh() {
            return Err(Error::TokenInvalid);
        }
        let user_id = claims.user_id()?;

        let stored = self.cache.get(&refresh_token_key(user_id)).await?;
        if stored.as_deref() != Some(refresh_token) {
            info!(user_id, "Refresh token is not the current one");
            return Err(Error::TokenInvalid);
        }

        let key = user_auth_key(user_id);
        let status = self.cache.hash_get(&key, FIELD_STATUS).await?;
        match status.as_deref() {
            Some(name) if UserStatus::from_name(Some(name))? == UserStatus::Active => {}
            Some(_) => return Err(Error::AccountSuspended),
            None => return Err(Error::TokenInvalid),
        }

        let role = match self.cache.hash_get(&key, FIELD_ROLE).await? {
            Some(name) => Role::from_name(Some(&name))?,
            None => Role::default(),
        };
        let version = self
            .cache
            .hash_get(&key, FIELD_VERSION)
            .await?
            .map_or_else(TokenVersion::initial, TokenVersion::new);

        debug!(user_id, "Issuing access token from refresh token");
        self.signer.issue_access(user_id, role, &version)
    }

    async fn logout(&self, user_id: i64) -> Result<()> {
        self.cache.delete(&refresh_token_key(user_id)).await?;
        info!(user_id, "Logged out");
        Ok(())
    }

    async fn change_password(
        &self,
        user_id: i64,
        old_password: &str,
        new_password: &str,
    ) -> Result<()> {
        let user = self.require_user(user_id).await?;
        self.check_password(old_password, &user)?;

        let user = self.rotate_password(user, new_password).await?;
        info!(user_id, version = %user.token_version, "Password changed, access tokens revoked");
        Ok(())
    }

    async fn delete_account(&self, user_id: i64, password: &str) -> Result<()> {
        let mut user = self.require_user(user_id).await?;
        self.check_password(password, &user)?;

        user.status = UserStatus::Deleted;
        user.touch();
        self.users.save(user).await?;

        self.cache.delete(&user_auth_key(user_id)).await?;
        self.cache.delete(&refresh_token_key(user_id)).await?;
        let purged = self.tokens.delete_by_user_id(user_id).await?;

        info!(user_id, purged_tokens = purged, "Account deleted");
        Ok(())
    }

    async fn verify_email(&self, token: &str) -> Result<()> {
        let record = self
            .consume_token(token, VerificationTokenKind::EmailVerification)
            .await?;

        let mut user = self.require_user(record.user_id).await?;
        user.mark_email_verified();
        self.users.save(user).await?;

        info!(user_id = record.user_id, "Email verified");
        Ok(())
    }

    async fn forgot_password(&self, email: &str) -> Result<()> {
        let Some(user) = self.users.find_by_email(email).await? else {
            debug!("Password reset requested for unknown email");
            return Ok(());
        };

        let reset = self
            .tokens
            .save(VerificationToken::issue(
                user.id,
                VerificationTokenKind::PasswordReset,
                self.settings.password_reset_ttl,
            ))
            .await?;

        self.events
            .publish(DomainEvent::PasswordResetRequested {
                user_id: user.id,
                email: user.email,
                reset_token: reset.token,
            })
            .await?;

        info!(user_id = user.id, "Password reset requested");
        Ok(())
    }

    async fn reset_password(&self, token: &str, new_password: &str) -> Result<()> {
        let record = self
            .consume_token(token, VerificationTokenKind::PasswordReset)
            .await?;

        let user = self.require_user(record.user_id).await?;
        let user = self.rotate_password(user, new_password).await?;

        info!(user_id = user.id, version = %user.token_version, "Password reset, access tokens revoked");
        Ok(())
    }

    async fn update_profile(
        &self,
        user_id: i64,
        nickname: &str,
        bio: Option<&str>,
    ) -> Result<User> {
        let mut user = self.require_user(user_id).await?;

        if user.nickname != nickname && self.users.exists_by_nickname(nickname).await? {
            return Err(Error::NicknameDuplicated {
                nickname: nickname.to_string(),
            });
        }

        user.nickname = nickname.to_string();
        user.bio = bio.map(str::to_string);
        user.touch();
        self.users.save(user).await
    }
}

impl std::fmt::Debug for SessionService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionService")
            .field("signer", &self.signer.provider_name())
            .field("cache", &self.cache.provider_name())
            .field("encoder", &self.encoder.provider_name())
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}
