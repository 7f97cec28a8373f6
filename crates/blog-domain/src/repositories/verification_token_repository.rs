//! Verification Token Repository Interface

use crate::entities::{VerificationToken, VerificationTokenKind};
use crate::error::Result;
use async_trait::async_trait;

/// Repository: One-Time Token Persistence
///
/// Tokens are looked up by their random string together with their kind, so
/// a reset token can never be redeemed as an email verification and vice versa.
#[async_trait]
pub trait VerificationTokenRepository: Send + Sync {
    /// Store a token, assigning an id when `token.id == 0`
    async fn save(&self, token: VerificationToken) -> Result<VerificationToken>;

    async fn find_by_token_and_kind(
        &self,
        token: &str,
        kind: VerificationTokenKind,
    ) -> Result<Option<VerificationToken>>;

    /// Delete one token record
    ///
    /// # Returns
    /// True if the record existed
    async fn delete(&self, id: i64) -> Result<bool>;

    /// Delete every token belonging to an account
    ///
    /// # Returns
    /// Number of records removed
    async fn delete_by_user_id(&self, user_id: i64) -> Result<usize>;
}
