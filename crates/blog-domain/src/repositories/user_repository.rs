//! User Repository Interface
//!
//! Contract of the persistent identity store, the durable source of truth
//! for account fields.

use crate::entities::User;
use crate::error::Result;
use async_trait::async_trait;

/// Repository: Account Persistence
///
/// # Example
///
/// ```ignore
/// use blog_domain::repositories::UserRepository;
///
/// if repo.exists_by_email("reader@example.com").await? {
///     return Err(Error::EmailDuplicated { email: "reader@example.com".into() });
/// }
/// let user = repo.save(User::register("reader@example.com", "reader", hash)).await?;
/// assert!(user.id > 0);
/// ```
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> Result<Option<User>>;

    /// Exact, case-sensitive email lookup
    async fn find_by_email(&self, email: &str) -> Result<Option<User>>;

    async fn find_by_nickname(&self, nickname: &str) -> Result<Option<User>>;

    async fn exists_by_email(&self, email: &str) -> Result<bool>;

    async fn exists_by_nickname(&self, nickname: &str) -> Result<bool>;

    /// Insert or update an account
    ///
    /// # Returns
    /// The stored record; a record saved with `id == 0` comes back with its
    /// assigned id
    async fn save(&self, user: User) -> Result<User>;
}
