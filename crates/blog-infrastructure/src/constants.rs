//! Infrastructure layer constants
//!
//! Contains constants that are part of the infrastructure implementation.
//! Domain-specific constants are defined in `blog_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "blog.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "blog";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "BLOG";

/// Separator between nested keys in environment variable names
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// AUTHENTICATION CONSTANTS
// ============================================================================

/// Upper bound accepted for any configured credential lifetime (10 years)
pub const MAX_CREDENTIAL_LIFETIME_SECS: u64 = 10 * 365 * 24 * 60 * 60;

/// Lowest bcrypt cost the hasher accepts
pub const BCRYPT_MIN_COST: u32 = 4;

/// Highest bcrypt cost the hasher accepts
pub const BCRYPT_MAX_COST: u32 = 31;

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable holding a full `EnvFilter` directive
pub const LOG_ENV_FILTER: &str = "BLOG_LOG";

/// Maximum number of rotated log files to keep
pub const LOG_MAX_FILES: usize = 5;

/// File name prefix used when the configured log path has no stem
pub const DEFAULT_LOG_FILE_PREFIX: &str = "blog";
