//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the blog credential core
///
/// Business variants are recoverable, caller-visible outcomes of an explicit
/// user action and carry a stable error code (see [`Error::code`]). The
/// remaining variants are infrastructure faults.
#[derive(Error, Debug)]
pub enum Error {
    // ------------------------------------------------------------------
    // Business errors
    // ------------------------------------------------------------------
    /// A required parameter was absent
    #[error("Required parameter missing: {param}")]
    ParamMissing {
        /// Name of the missing parameter
        param: String,
    },

    /// A string did not map to any known role
    #[error("Invalid role: {value}")]
    InvalidRole {
        /// The unrecognised value
        value: String,
    },

    /// A string did not map to any known account status
    #[error("Invalid user status: {value}")]
    InvalidStatus {
        /// The unrecognised value
        value: String,
    },

    /// Wrong password or unknown account identifier
    #[error("Account or password is incorrect")]
    PasswordError,

    /// Account is suspended or deleted
    #[error("Account is suspended")]
    AccountSuspended,

    /// Account exists but the email address has not been verified yet
    #[error("Email address has not been verified")]
    EmailNotVerified,

    /// Token failed signature, expiry, type or freshness checks
    #[error("Token is invalid or expired")]
    TokenInvalid,

    /// Claims were requested from a token that does not verify
    #[error("Token is malformed: {message}")]
    TokenMalformed {
        /// Description of the decoding failure
        message: String,
    },

    /// Registration or profile update with an email already in use
    #[error("Email already registered: {email}")]
    EmailDuplicated {
        /// The conflicting email address
        email: String,
    },

    /// Registration or profile update with a nickname already in use
    #[error("Nickname already taken: {nickname}")]
    NicknameDuplicated {
        /// The conflicting nickname
        nickname: String,
    },

    /// No account exists for the given id
    #[error("User not found: {user_id}")]
    UserNotFound {
        /// The id that was looked up
        user_id: i64,
    },

    // ------------------------------------------------------------------
    // Infrastructure errors
    // ------------------------------------------------------------------
    /// I/O operation error (simple form)
    #[error("I/O error: {source}")]
    IoSimple {
        /// The underlying I/O error
        #[from]
        source: std::io::Error,
    },

    /// I/O operation error (with context)
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// JSON parsing or serialization error
    #[error("JSON parsing error: {source}")]
    Json {
        /// The underlying JSON error
        #[from]
        source: serde_json::Error,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Cryptographic or credential-handling failure
    #[error("Authentication error: {message}")]
    Authentication {
        /// Description of the authentication error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Identity store failure
    #[error("Database error: {message}")]
    Database {
        /// Description of the database error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Session cache failure
    #[error("Cache error: {message}")]
    Cache {
        /// Description of the cache error
        message: String,
    },

    /// Infrastructure operation error
    #[error("Infrastructure error: {message}")]
    Infrastructure {
        /// Description of the infrastructure error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Internal system error
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error
        message: String,
    },
}

// Business error creation methods
impl Error {
    /// Create a missing parameter error
    pub fn param_missing<S: Into<String>>(param: S) -> Self {
        Self::ParamMissing {
            param: param.into(),
        }
    }

    /// Create an invalid role error
    pub fn invalid_role<S: Into<String>>(value: S) -> Self {
        Self::InvalidRole {
            value: value.into(),
        }
    }

    /// Create an invalid status error
    pub fn invalid_status<S: Into<String>>(value: S) -> Self {
        Self::InvalidStatus {
            value: value.into(),
        }
    }

    /// Create a malformed token error
    pub fn token_malformed<S: Into<String>>(message: S) -> Self {
        Self::TokenMalformed {
            message: message.into(),
        }
    }
}

// Infrastructure error creation methods
impl Error {
    /// Create an I/O error
    pub fn io<S: Into<String>>(message: S) -> Self {
        Self::Io {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create an authentication error
    pub fn authentication<S: Into<String>>(message: S) -> Self {
        Self::Authentication {
            message: message.into(),
            source: None,
        }
    }

    /// Create an authentication error with source
    pub fn authentication_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Authentication {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a database error
    pub fn database<S: Into<String>>(message: S) -> Self {
        Self::Database {
            message: message.into(),
            source: None,
        }
    }

    /// Create a cache error
    pub fn cache<S: Into<String>>(message: S) -> Self {
        Self::Cache {
            message: message.into(),
        }
    }

    /// Create an infrastructure error
    pub fn infrastructure<S: Into<String>>(message: S) -> Self {
        Self::Infrastructure {
            message: message.into(),
            source: None,
        }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

// Classification
impl Error {
    /// Stable error code reported to API consumers
    ///
    /// `A` codes are caller faults, `B` codes are system faults.
    pub fn code(&self) -> &'static str {
        match self {
            Self::ParamMissing { .. } | Self::InvalidRole { .. } | Self::InvalidStatus { .. } => {
                "A0001"
            }
            Self::UserNotFound { .. } => "A0101",
            Self::PasswordError => "A0102",
            Self::EmailDuplicated { .. } | Self::NicknameDuplicated { .. } => "A0103",
            Self::TokenInvalid | Self::TokenMalformed { .. } => "A0104",
            Self::AccountSuspended => "A0106",
            Self::EmailNotVerified => "A0107",
            Self::Database { .. } => "B0100",
            _ => "B0001",
        }
    }

    /// Whether this is a recoverable business error rather than a fault
    pub fn is_business(&self) -> bool {
        self.code().starts_with('A')
    }
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Self::internal(s)
    }
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Self::internal(s)
    }
}
