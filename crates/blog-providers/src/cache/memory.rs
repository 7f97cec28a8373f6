//! In-memory session cache provider
//!
//! Concurrent map keyed by cache key. Hash fields and TTL strings share one
//! keyspace, as they do in Redis. Expired strings are dropped lazily when read.
//!
//! ## Example
//!
//! ```ignore
//! use blog_providers::cache::MemorySessionCache;
//!
//! let cache = MemorySessionCache::new();
//! ```

use async_trait::async_trait;
use blog_domain::error::{Error, Result};
use blog_domain::ports::providers::SessionCacheProvider;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
enum CacheValue {
    Hash(HashMap<String, String>),
    Text { value: String, expires_at: Instant },
}

impl CacheValue {
    fn is_expired(&self, now: Instant) -> bool {
        matches!(self, Self::Text { expires_at, .. } if *expires_at <= now)
    }
}

/// In-process [`SessionCacheProvider`]
///
/// Clones share the same underlying map.
#[derive(Debug, Clone, Default)]
pub struct MemorySessionCache {
    entries: Arc<DashMap<String, CacheValue>>,
}

impl MemorySessionCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live keys
    pub fn len(&self) -> usize {
        let now = Instant::now();
        self.entries.iter().filter(|e| !e.is_expired(now)).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn wrong_type(key: &str, expected: &str) -> Error {
        Error::cache(format!(
            "WRONGTYPE operation against key {key}: expected {expected}"
        ))
    }
}

#[async_trait]
impl SessionCacheProvider for MemorySessionCache {
    async fn hash_get(&self, key: &str, field: &str) -> Result<Option<String>> {
        let now = Instant::now();
        match self.entries.get(key).as_deref() {
            None => Ok(None),
            Some(value) if value.is_expired(now) => Ok(None),
            Some(CacheValue::Hash(fields)) => Ok(fields.get(field).cloned()),
            Some(CacheValue::Text { .. }) => Err(Self::wrong_type(key, "hash")),
        }
    }

    async fn hash_put(&self, key: &str, field: &str, value: &str) -> Result<()> {
        let now = Instant::now();
        match self.entries.entry(key.to_string()) {
            Entry::Occupied(mut occupied) => {
                if occupied.get().is_expired(now) {
                    occupied.insert(CacheValue::Hash(HashMap::new()));
                }
                match occupied.get_mut() {
                    CacheValue::Hash(fields) => {
                        fields.insert(field.to_string(), value.to_string());
                        Ok(())
                    }
                    CacheValue::Text { .. } => Err(Self::wrong_type(key, "hash")),
                }
            }
            Entry::Vacant(vacant) => {
                let mut fields = HashMap::new();
                fields.insert(field.to_string(), value.to_string());
                vacant.insert(CacheValue::Hash(fields));
                Ok(())
            }
        }
    }

    async fn get(&self, key: &str) -> Result<Option<String>> {
        let now = Instant::now();
        let value = match self.entries.get(key).as_deref() {
            None => return Ok(None),
            Some(CacheValue::Hash(_)) => return Err(Self::wrong_type(key, "string")),
            Some(CacheValue::Text { value, expires_at }) => {
                (*expires_at > now).then(|| value.clone())
            }
        };
        if value.is_none() {
            self.entries.remove_if(key, |_, v| v.is_expired(now));
        }
        Ok(value)
    }

    async fn set_with_ttl(&self, key: &str, value: &str, ttl: Duration) -> Result<()> {
        let expires_at = Instant::now()
            .checked_add(ttl)
            .ok_or_else(|| Error::cache(format!("TTL out of range for key {key}")))?;
        self.entries.insert(
            key.to_string(),
            CacheValue::Text {
                value: value.to_string(),
                expires_at,
            },
        );
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<bool> {
        let now = Instant::now();
        Ok(self
            .entries
            .remove(key)
            .is_some_and(|(_, v)| !v.is_expired(now)))
    }

    fn provider_name(&self) -> &str {
        "memory"
    }
}
