//! In-memory account store

use async_trait::async_trait;
use blog_domain::entities::User;
use blog_domain::error::{Error, Result};
use blog_domain::repositories::UserRepository;
use dashmap::DashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};
use tracing::debug;

/// [`UserRepository`] over a concurrent map keyed by account id
///
/// Email and nickname uniqueness is enforced on save, like the unique
/// indexes of a relational store. Clones share state.
#[derive(Debug, Clone)]
pub struct InMemoryUserRepository {
    users: Arc<DashMap<i64, User>>,
    next_id: Arc<AtomicI64>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            users: Arc::new(DashMap::new()),
            next_id: Arc::new(AtomicI64::new(1)),
        }
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    fn find_by<P>(&self, predicate: P) -> Option<User>
    where
        P: Fn(&User) -> bool,
    {
        self.users
            .iter()
            .find(|entry| predicate(entry.value()))
            .map(|entry| entry.value().clone())
    }

    fn check_unique(&self, user: &User) -> Result<()> {
        if self
            .find_by(|u| u.id != user.id && u.email == user.email)
            .is_some()
        {
            return Err(Error::EmailDuplicated {
                email: user.email.clone(),
            });
        }
        if self
            .find_by(|u| u.id != user.id && u.nickname == user.nickname)
            .is_some()
        {
            return Err(Error::NicknameDuplicated {
                nickname: user.nickname.clone(),
            });
        }
        Ok(())
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<User>> {
        Ok(self.users.get(&id).map(|entry| entry.value().clone()))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        Ok(self.find_by(|u| u.email == email))
    }

    async fn find_by_nickname(&self, nickname: &str) -> Result<Option<User>> {
        Ok(self.find_by(|u| u.nickname == nickname))
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool> {
        Ok(self.find_by(|u| u.email == email).is_some())
    }

    async fn exists_by_nickname(&self, nickname: &str) -> Result<bool> {
        Ok(self.find_by(|u| u.nickname == nickname).is_some())
    }

    async fn save(&self, mut user: User) -> Result<User> {
        if user.id == 0 {
            user.id = self.next_id.fetch_add(1, Ordering::SeqCst);
        } else if !self.users.contains_key(&user.id) {
            return Err(Error::UserNotFound { user_id: user.id });
        }
        self.check_unique(&user)?;

        debug!(user_id = user.id, "Saving account");
        self.users.insert(user.id, user.clone());
        Ok(user)
    }
}
