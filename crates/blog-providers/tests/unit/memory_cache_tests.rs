//! Tests for the in-memory session cache

use blog_domain::ports::providers::SessionCacheProvider;
use blog_providers::cache::MemorySessionCache;
use std::time::Duration;

#[tokio::test]
async fn test_hash_put_and_get() {
    let cache = MemorySessionCache::new();
    cache.hash_put("user:auth:1", "version", "v1").await.unwrap();
    cache.hash_put("user:auth:1", "status", "ACTIVE").await.unwrap();
    cache.hash_put("user:auth:1", "version", "v2").await.unwrap();

    assert_eq!(
        cache.hash_get("user:auth:1", "version").await.unwrap().as_deref(),
        Some("v2")
    );
    assert_eq!(
        cache.hash_get("user:auth:1", "status").await.unwrap().as_deref(),
        Some("ACTIVE")
    );
    assert_eq!(cache.hash_get("user:auth:1", "role").await.unwrap(), None);
    assert_eq!(cache.hash_get("user:auth:2", "version").await.unwrap(), None);
    assert_eq!(cache.len(), 1);
}

#[tokio::test]
async fn test_set_with_ttl_and_get() {
    let cache = MemorySessionCache::new();
    cache
        .set_with_ttl("refresh:token:1", "token-a", Duration::from_secs(60))
        .await
        .unwrap();
    cache
        .set_with_ttl("refresh:token:1", "token-b", Duration::from_secs(60))
        .await
        .unwrap();

    assert_eq!(
        cache.get("refresh:token:1").await.unwrap().as_deref(),
        Some("token-b")
    );
}

#[tokio::test]
async fn test_expired_value_disappears() {
    let cache = MemorySessionCache::new();
    cache
        .set_with_ttl("refresh:token:1", "token", Duration::from_millis(20))
        .await
        .unwrap();
    tokio::time::sleep(Duration::from_millis(50)).await;

    assert_eq!(cache.get("refresh:token:1").await.unwrap(), None);
    assert!(!cache.delete("refresh:token:1").await.unwrap());
    assert!(cache.is_empty());
}

#[tokio::test]
async fn test_delete() {
    let cache = MemorySessionCache::new();
    cache
        .set_with_ttl("refresh:token:1", "token", Duration::from_secs(60))
        .await
        .unwrap();

    assert!(cache.delete("refresh:token:1").await.unwrap());
    assert!(!cache.delete("refresh:token:1").await.unwrap());
    assert_eq!(cache.get("refresh:token:1").await.unwrap(), None);
}

#[tokio::test]
async fn test_wrong_type_is_an_error() {
    let cache = MemorySessionCache::new();
    cache.hash_put("k", "f", "v").await.unwrap();
    cache
        .set_with_ttl("s", "v", Duration::from_secs(60))
        .await
        .unwrap();

    assert!(cache.get("k").await.is_err());
    assert!(cache.hash_get("s", "f").await.is_err());
    assert!(cache.hash_put("s", "f", "v").await.is_err());
}

#[tokio::test]
async fn test_clones_share_state() {
    let cache = MemorySessionCache::new();
    let other = cache.clone();
    cache.hash_put("user:auth:9", "status", "ACTIVE").await.unwrap();

    assert_eq!(
        other.hash_get("user:auth:9", "status").await.unwrap().as_deref(),
        Some("ACTIVE")
    );
    assert_eq!(other.provider_name(), "memory");
}
