//! Configuration loader
//!
//! Handles loading configuration from various sources including
//! TOML files, environment variables, and default values.

use crate::config::{AppConfig, AuthConfig, KeySource, LoggingConfig, SessionCacheBackend};
use crate::constants::{
    BCRYPT_MAX_COST, BCRYPT_MIN_COST, CONFIG_ENV_PREFIX, CONFIG_ENV_SEPARATOR,
    DEFAULT_CONFIG_DIR, DEFAULT_CONFIG_FILENAME, MAX_CREDENTIAL_LIFETIME_SECS,
};
use crate::error_ext::ErrorContext;
use crate::logging::{log_config_loaded, parse_log_level};
use blog_domain::error::{Error, Result};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use std::env;
use std::path::{Path, PathBuf};

/// Configuration loader service
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,

    /// Environment prefix
    env_prefix: String,
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
        }
    }

    /// Set the configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the environment variable prefix
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Load configuration from all sources
    ///
    /// Configuration sources are merged in this order (later sources override earlier):
    /// 1. Default values from `AppConfig::default()`
    /// 2. TOML configuration file (if exists)
    /// 3. Environment variables with prefix (e.g., `BLOG_CACHE__PROVIDER=redis`)
    pub fn load(&self) -> Result<AppConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        if let Some(config_path) = &self.config_path {
            if config_path.exists() {
                figment = figment.merge(Toml::file(config_path));
                log_config_loaded(config_path, true);
            } else {
                log_config_loaded(config_path, false);
            }
        } else if let Some(default_path) = Self::find_default_config_path() {
            figment = figment.merge(Toml::file(&default_path));
            log_config_loaded(&default_path, true);
        }

        // Double underscore separates nested keys so field names keep their underscores
        figment = figment.merge(
            Env::prefixed(&format!("{}_", self.env_prefix)).split(CONFIG_ENV_SEPARATOR),
        );

        let app_config: AppConfig = figment
            .extract()
            .config_context("Failed to extract configuration")?;

        validate_app_config(&app_config)?;

        Ok(app_config)
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, config: &AppConfig, path: P) -> Result<()> {
        let toml_string =
            toml::to_string_pretty(config).context("Failed to serialize config to TOML")?;

        std::fs::write(path.as_ref(), toml_string).io_context("Failed to write config file")?;

        Ok(())
    }

    /// Get the current configuration file path
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Find default configuration file paths to try
    fn find_default_config_path() -> Option<PathBuf> {
        let current_dir = env::current_dir().ok()?;

        let candidates = [
            Some(current_dir.join(DEFAULT_CONFIG_FILENAME)),
            Some(
                current_dir
                    .join(DEFAULT_CONFIG_DIR)
                    .join(DEFAULT_CONFIG_FILENAME),
            ),
            dirs::config_dir().map(|d| d.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILENAME)),
            dirs::home_dir().map(|d| {
                d.join(format!(".{DEFAULT_CONFIG_DIR}"))
                    .join(DEFAULT_CONFIG_FILENAME)
            }),
        ];

        candidates.into_iter().flatten().find(|path| path.exists())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate application configuration
///
/// Performs validation of all configuration sections.
pub fn validate_app_config(config: &AppConfig) -> Result<()> {
    validate_auth_config(&config.auth)?;
    validate_cache_config(config)?;
    validate_logging_config(&config.logging)?;
    validate_event_bus_config(config)?;
    Ok(())
}

fn invalid(message: impl Into<String>) -> Error {
    Error::Configuration {
        message: message.into(),
        source: None,
    }
}

fn validate_lifetime(name: &str, secs: u64) -> Result<()> {
    if secs == 0 {
        return Err(invalid(format!("{name} cannot be 0")));
    }
    if secs > MAX_CREDENTIAL_LIFETIME_SECS {
        return Err(invalid(format!(
            "{name} cannot exceed {MAX_CREDENTIAL_LIFETIME_SECS} seconds"
        )));
    }
    Ok(())
}

fn validate_auth_config(auth: &AuthConfig) -> Result<()> {
    validate_lifetime("Access token lifetime", auth.jwt.access_expiration_secs)?;
    validate_lifetime("Refresh token lifetime", auth.jwt.refresh_expiration_secs)?;
    validate_lifetime(
        "Email verification token lifetime",
        auth.email_verification_ttl_secs,
    )?;
    validate_lifetime("Password reset token lifetime", auth.password_reset_ttl_secs)?;

    if auth.jwt.refresh_expiration_secs <= auth.jwt.access_expiration_secs {
        return Err(invalid(
            "Refresh token lifetime must be longer than the access token lifetime",
        ));
    }

    if let KeySource::PemFiles {
        private_key_path,
        public_key_path,
    } = &auth.jwt.key_source
    {
        if private_key_path.as_os_str().is_empty() || public_key_path.as_os_str().is_empty() {
            return Err(invalid(
                "Private and public key paths are required for the pem_files key source",
            ));
        }
    }

    if !(BCRYPT_MIN_COST..=BCRYPT_MAX_COST).contains(&auth.password.bcrypt_cost) {
        return Err(invalid(format!(
            "bcrypt cost must be between {BCRYPT_MIN_COST} and {BCRYPT_MAX_COST}"
        )));
    }
    Ok(())
}

fn validate_cache_config(config: &AppConfig) -> Result<()> {
    if config.cache.provider == SessionCacheBackend::Redis
        && config
            .cache
            .redis_url
            .as_deref()
            .is_none_or(|url| url.trim().is_empty())
    {
        return Err(invalid("Redis URL is required for the redis session cache"));
    }
    Ok(())
}

fn validate_logging_config(logging: &LoggingConfig) -> Result<()> {
    parse_log_level(&logging.level)?;
    if logging.file_output.is_some() && logging.max_files == 0 {
        return Err(invalid("Maximum log files cannot be 0 when file output is enabled"));
    }
    Ok(())
}

fn validate_event_bus_config(config: &AppConfig) -> Result<()> {
    if config.event_bus.capacity == 0 {
        return Err(invalid("Event bus capacity cannot be 0"));
    }
    Ok(())
}

/// Configuration builder for programmatic configuration
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: AppConfig,
}

impl ConfigBuilder {
    /// Create a new configuration builder with defaults
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_auth(mut self, auth: AuthConfig) -> Self {
        self.config.auth = auth;
        self
    }

    pub fn with_cache(mut self, cache: crate::config::SessionCacheConfig) -> Self {
        self.config.cache = cache;
        self
    }

    pub fn with_logging(mut self, logging: LoggingConfig) -> Self {
        self.config.logging = logging;
        self
    }

    pub fn with_event_bus(mut self, event_bus: crate::config::EventBusConfig) -> Self {
        self.config.event_bus = event_bus;
        self
    }

    /// Build the configuration
    pub fn build(self) -> AppConfig {
        self.config
    }
}
