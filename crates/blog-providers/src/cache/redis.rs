//! Redis session cache provider
//!
//! Shared session cache for multi-instance deployments. Auth state lives in
//! Redis hashes (`HGET`/`HSET`), refresh tokens in plain strings with
//! `SET ... EX`.
//!
//! ## Example
//!
//! ```ignore
//! use blog_providers::cache::RedisSessionCache;
//!
//! let cache = RedisSessionCache::new("redis://localhost:6379")?;
//! ```

use async_trait::async_trait;
use blog_domain::error::{Error, Result};
use blog_domain::ports::providers::SessionCacheProvider;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::OnceCell;

/// Redis-backed [`SessionCacheProvider`]
///
/// The first command opens a [`ConnectionManager`]; every later command and
/// every clone of the cache shares it. The manager reconnects on its own
/// after a dropped connection.
#[derive(Clone)]
pub struct RedisSessionCache {
    client: Client,
    connection: Arc<OnceCell<ConnectionManager>>,
}

impl RedisSessionCache {
    /// Create a new Redis session cache with a connection string
    ///
    /// # Arguments
    ///
    /// * `connection_string` - Redis connection URL (e.g., "redis://localhost:6379")
    pub fn new(connection_string: &str) -> Result<Self> {
        let client = Client::open(connection_string).map_err(|e| Error::Infrastructure {
            message: format!("Failed to create Redis client: {e}"),
            source: Some(Box::new(e)),
        })?;

        Ok(Self {
            client,
            connection: Arc::new(OnceCell::new()),
        })
    }

    /// Handle to the shared connection, established on first use
    async fn get_connection(&self) -> Result<ConnectionManager> {
        self.connection
            .get_or_try_init(|| ConnectionManager::new(self.client.clone()))
            .await
            .cloned()
            .map_err(|e| Error::Infrastructure {
                message: format!("Failed to get Redis connection: {e}"),
                source: Some(Box::new(e)),
            })
    }

    /// Whether the shared connection has been established
    pub fn is_connected(&self) -> bool {
        self.connection.initialized()
    }

    fn command_failed(command: &str, e: redis::RedisError) -> Error {
        Error::Infrastructure {
            message: format!("Redis {command} failed: {e}"),
            source: Some(Box::new(e)),
        }
    }

    /// Get the Redis server address description
    pub fn server_address(&self) -> String {
        self.client.get_connection_info().addr().to_string()
    }
}

#[async_trait]
impl SessionCacheProvider for RedisSessionCache {
    async fn hash_get(&self, key: &str, field: &str) -> Result<Option<String>> {
        let mut conn = self.get_connection().await?;
        conn.hget::<_, _, Option<String>>(key, field)
            .await
            .map_err(|e| Self::command_failed("HGET", e))
    }

    async fn hash_put(&self, key: &str, field: &str, value: &str) -> Result<()> {
        let mut conn = self.get_connection().await?;
        conn.hset::<_, _, _, ()>(key, field, value)
            .await
            .map_err(|e| Self::command_failed("HSET", e))
    }

    async fn get(&self, key: &str) -> Result<Option<String>> {
        let mut conn = self.get_connection().await?;
        conn.get::<_, Option<String>>(key)
            .await
            .map_err(|e| Self::command_failed("GET", e))
    }

    async fn set_with_ttl(&self, key: &str, value: &str, ttl: Duration) -> Result<()> {
        let mut conn = self.get_connection().await?;

        // SET EX rejects a zero expiry; store a 1s entry so the slot is still overwritten
        let ttl_seconds = ttl.as_secs().max(1);
        conn.set_ex::<_, _, ()>(key, value, ttl_seconds)
            .await
            .map_err(|e| Self::command_failed("SET", e))
    }

    async fn delete(&self, key: &str) -> Result<bool> {
        let mut conn = self.get_connection().await?;
        let deleted: i64 = conn
            .del(key)
            .await
            .map_err(|e| Self::command_failed("DEL", e))?;
        Ok(deleted > 0)
    }

    fn provider_name(&self) -> &str {
        "redis"
    }
}

impl std::fmt::Debug for RedisSessionCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisSessionCache")
            .field("server", &self.server_address())
            .field("connected", &self.is_connected())
            .finish()
    }
}
