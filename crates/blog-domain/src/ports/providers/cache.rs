//! Session Cache Provider Port
//!
//! Port for the fast, mutable key-value store that holds per-account session
//! state. Two shapes are stored under separate keys:
//!
//! - a hash at `user:auth:{id}` with the fields `version`, `status` and `role`
//!   (no TTL; lives until overwritten or deleted)
//! - a string at `refresh:token:{id}` holding the single valid refresh token
//!   (TTL = refresh token lifetime)
//!
//! Implementations must provide atomic single-key and single-field
//! operations. Nothing here is transactional across keys.

use crate::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Session Cache Provider Port
///
/// # Implementations
///
/// - **Memory**: in-process map, for single-instance deployments and tests
/// - **Redis**: shared cache for multi-instance deployments
///
/// # Example
///
/// ```ignore
/// use blog_domain::constants::{user_auth_key, FIELD_VERSION};
///
/// cache.hash_put(&user_auth_key(42), FIELD_VERSION, "v3").await?;
/// let version = cache.hash_get(&user_auth_key(42), FIELD_VERSION).await?;
/// ```
#[async_trait]
pub trait SessionCacheProvider: Send + Sync + std::fmt::Debug {
    /// Read one field of a hash
    ///
    /// # Returns
    /// `None` when the key or the field is absent
    async fn hash_get(&self, key: &str, field: &str) -> Result<Option<String>>;

    /// Write one field of a hash, creating the hash if needed
    async fn hash_put(&self, key: &str, field: &str, value: &str) -> Result<()>;

    /// Read a string value
    ///
    /// # Returns
    /// `None` when the key is absent or expired
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write a string value that expires after `ttl`, replacing any previous value
    async fn set_with_ttl(&self, key: &str, value: &str, ttl: Duration) -> Result<()>;

    /// Delete a whole key (hash or string)
    ///
    /// # Returns
    /// True if the key existed
    async fn delete(&self, key: &str) -> Result<bool>;

    /// Get the name/identifier of this provider implementation
    fn provider_name(&self) -> &str;
}
