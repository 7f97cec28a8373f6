//! Provider-specific constants

// ============================================================================
// SIGNER CONSTANTS
// ============================================================================

/// Clock skew tolerated when checking token expiry, in seconds
pub const JWT_LEEWAY_SECS: u64 = 0;

// ============================================================================
// PASSWORD CONSTANTS
// ============================================================================

/// Default bcrypt cost for password hashing
pub const BCRYPT_DEFAULT_COST: u32 = 12;

/// Prefix of Argon2 PHC strings
pub const ARGON2_HASH_PREFIX: &str = "$argon2";

/// Prefix shared by bcrypt hashes (`$2a$`, `$2b$`, `$2y$`)
pub const BCRYPT_HASH_PREFIX: &str = "$2";

// ============================================================================
// CACHE CONSTANTS
// ============================================================================

/// Default Redis connection URL
pub const REDIS_DEFAULT_URL: &str = "redis://localhost:6379";

// ============================================================================
// EVENT CONSTANTS
// ============================================================================

/// Default broadcast channel capacity
pub const EVENT_BUS_DEFAULT_CAPACITY: usize = 1024;
