//! In-memory one-time token store

use async_trait::async_trait;
use blog_domain::entities::{VerificationToken, VerificationTokenKind};
use blog_domain::error::Result;
use blog_domain::repositories::VerificationTokenRepository;
use dashmap::DashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

/// [`VerificationTokenRepository`] over a concurrent map keyed by record id
#[derive(Debug, Clone)]
pub struct InMemoryVerificationTokenRepository {
    tokens: Arc<DashMap<i64, VerificationToken>>,
    next_id: Arc<AtomicI64>,
}

impl InMemoryVerificationTokenRepository {
    pub fn new() -> Self {
        Self {
            tokens: Arc::new(DashMap::new()),
            next_id: Arc::new(AtomicI64::new(1)),
        }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Tokens currently held for an account, oldest first
    pub fn tokens_for_user(&self, user_id: i64) -> Vec<VerificationToken> {
        let mut tokens: Vec<_> = self
            .tokens
            .iter()
            .filter(|entry| entry.user_id == user_id)
            .map(|entry| entry.value().clone())
            .collect();
        tokens.sort_by_key(|t| t.id);
        tokens
    }
}

impl Default for InMemoryVerificationTokenRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VerificationTokenRepository for InMemoryVerificationTokenRepository {
    async fn save(&self, mut token: VerificationToken) -> Result<VerificationToken> {
        if token.id == 0 {
            token.id = self.next_id.fetch_add(1, Ordering::SeqCst);
        }
        self.tokens.insert(token.id, token.clone());
        Ok(token)
    }

    async fn find_by_token_and_kind(
        &self,
        token: &str,
        kind: VerificationTokenKind,
    ) -> Result<Option<VerificationToken>> {
        Ok(self
            .tokens
            .iter()
            .find(|entry| entry.token == token && entry.kind == kind)
            .map(|entry| entry.value().clone()))
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        Ok(self.tokens.remove(&id).is_some())
    }

    async fn delete_by_user_id(&self, user_id: i64) -> Result<usize> {
        let before = self.tokens.len();
        self.tokens.retain(|_, token| token.user_id != user_id);
        Ok(before.saturating_sub(self.tokens.len()))
    }
}
