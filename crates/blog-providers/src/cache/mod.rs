//! Session Cache Provider Implementations
//!
//! Backends for the auth-state hashes and refresh-token slots.
//!
//! ## Available Providers
//!
//! | Provider | Type | Description |
//! |----------|------|-------------|
//! | [`MemorySessionCache`] | Local | In-process map with lazy TTL expiry |
//! | [`RedisSessionCache`] | Distributed | Redis-backed for multi-instance |
//!
//! ## Provider Selection Guide
//!
//! - **Development/Testing, Single Instance**: Use `MemorySessionCache`
//! - **Multi Instance**: Use `RedisSessionCache` so every node sees the same sessions

#[cfg(feature = "cache-memory")]
pub mod memory;
#[cfg(feature = "cache-redis")]
pub mod redis;

#[cfg(feature = "cache-memory")]
pub use memory::MemorySessionCache;
#[cfg(feature = "cache-redis")]
pub use redis::RedisSessionCache;

pub use blog_domain::ports::providers::SessionCacheProvider;
