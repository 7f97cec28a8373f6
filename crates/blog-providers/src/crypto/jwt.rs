//! JWT credential signer (ES256)
//!
//! Issues compact JWS tokens (`header.payload.signature`) signed with the
//! private half of a P-256 keypair and verifies them with the public half.
//!
//! ## Example
//!
//! ```ignore
//! use blog_providers::crypto::{EphemeralKeyProvider, JwtCredentialSigner};
//! use chrono::Duration;
//!
//! let signer = JwtCredentialSigner::from_provider(
//!     &EphemeralKeyProvider,
//!     Duration::hours(1),
//!     Duration::days(7),
//! )?;
//! let token = signer.issue_refresh(42)?;
//! assert!(signer.verify(&token));
//! ```

use crate::constants::JWT_LEEWAY_SECS;
use crate::crypto::keys::{SigningKeyPair, SigningKeyProvider};
use blog_domain::error::{Error, Result};
use blog_domain::ports::providers::CredentialSigner;
use blog_domain::value_objects::{Role, TokenClaims, TokenType, TokenVersion};
use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, Header, Validation, decode, encode};
use std::fmt;
use tracing::debug;

/// ES256 implementation of [`CredentialSigner`]
pub struct JwtCredentialSigner {
    keys: SigningKeyPair,
    header: Header,
    validation: Validation,
    access_lifetime: Duration,
    refresh_lifetime: Duration,
}

impl JwtCredentialSigner {
    /// Create a signer that owns `keys`
    ///
    /// Lifetimes may be negative, which yields already-expired tokens.
    pub fn new(keys: SigningKeyPair, access_lifetime: Duration, refresh_lifetime: Duration) -> Self {
        let mut validation = Validation::new(Algorithm::ES256);
        validation.leeway = JWT_LEEWAY_SECS;
        Self {
            keys,
            header: Header::new(Algorithm::ES256),
            validation,
            access_lifetime,
            refresh_lifetime,
        }
    }

    /// Establish the keypair through `provider`, then build the signer
    pub fn from_provider(
        provider: &dyn SigningKeyProvider,
        access_lifetime: Duration,
        refresh_lifetime: Duration,
    ) -> Result<Self> {
        let keys = provider.load()?;
        Ok(Self::new(keys, access_lifetime, refresh_lifetime))
    }

    pub fn access_lifetime(&self) -> Duration {
        self.access_lifetime
    }

    fn sign(&self, claims: &TokenClaims) -> Result<String> {
        encode(&self.header, claims, self.keys.encoding_key())
            .map_err(|e| Error::authentication_with_source("Failed to sign token", e))
    }

    fn decode(&self, token: &str) -> jsonwebtoken::errors::Result<TokenClaims> {
        decode::<TokenClaims>(token, self.keys.decoding_key(), &self.validation)
            .map(|data| data.claims)
    }

    fn claims_for(
        &self,
        user_id: i64,
        token_type: TokenType,
        role: Option<Role>,
        version: Option<&TokenVersion>,
    ) -> TokenClaims {
        let now = Utc::now();
        let lifetime = match token_type {
            TokenType::Access => self.access_lifetime,
            TokenType::Refresh => self.refresh_lifetime,
        };
        TokenClaims {
            sub: user_id.to_string(),
            role: role.map(|r| r.name().to_string()),
            version: version.map(|v| v.as_str().to_string()),
            token_type,
            iat: now.timestamp(),
            exp: (now + lifetime).timestamp(),
        }
    }
}

impl CredentialSigner for JwtCredentialSigner {
    fn issue_access(&self, user_id: i64, role: Role, version: &TokenVersion) -> Result<String> {
        let claims = self.claims_for(user_id, TokenType::Access, Some(role), Some(version));
        self.sign(&claims)
    }

    fn issue_refresh(&self, user_id: i64) -> Result<String> {
        let claims = self.claims_for(user_id, TokenType::Refresh, None, None);
        self.sign(&claims)
    }

    fn verify(&self, token: &str) -> bool {
        match self.decode(token) {
            Ok(_) => true,
            Err(e) => {
                debug!(error = %e, "Token verification failed");
                false
            }
        }
    }

    fn claims(&self, token: &str) -> Result<TokenClaims> {
        self.decode(token)
            .map_err(|e| Error::token_malformed(e.to_string()))
    }

    fn refresh_lifetime(&self) -> std::time::Duration {
        self.refresh_lifetime.to_std().unwrap_or_default()
    }

    fn provider_name(&self) -> &str {
        "jwt-es256"
    }
}

impl fmt::Debug for JwtCredentialSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtCredentialSigner")
            .field("algorithm", &"ES256")
            .field("access_lifetime_secs", &self.access_lifetime.num_seconds())
            .field("refresh_lifetime_secs", &self.refresh_lifetime.num_seconds())
            .finish_non_exhaustive()
    }
}
