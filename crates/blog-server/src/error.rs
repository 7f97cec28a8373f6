//! Error responses
//!
//! Business errors keep their stable code and message; infrastructure
//! faults are logged and reported with a generic message.

use crate::auth::AuthError;
use crate::constants::INTERNAL_ERROR_MESSAGE;
use blog_domain::error::Error;
use rocket::http::Status;
use rocket::serde::json::Json;
use serde::Serialize;
use tracing::error;

/// JSON error body
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorResponse {
    /// Stable error code (`A0102`, `B0001`, ...)
    pub code: &'static str,
    pub message: String,
}

impl ApiErrorResponse {
    /// HTTP status for a domain error
    pub fn status_for(error: &Error) -> Status {
        match error {
            Error::ParamMissing { .. } | Error::InvalidRole { .. } | Error::InvalidStatus { .. } => {
                Status::BadRequest
            }
            Error::UserNotFound { .. } => Status::NotFound,
            Error::PasswordError | Error::TokenInvalid | Error::TokenMalformed { .. } => {
                Status::Unauthorized
            }
            Error::EmailDuplicated { .. } | Error::NicknameDuplicated { .. } => Status::Conflict,
            Error::AccountSuspended | Error::EmailNotVerified => Status::Forbidden,
            _ => Status::InternalServerError,
        }
    }

    /// Response for a domain error returned by the session service
    pub fn from_error(error: &Error) -> (Status, Json<Self>) {
        let message = if error.is_business() {
            error.to_string()
        } else {
            error!(error = %error, "Request failed");
            INTERNAL_ERROR_MESSAGE.to_string()
        };
        (
            Self::status_for(error),
            Json(Self {
                code: error.code(),
                message,
            }),
        )
    }

    /// Response for a failed [`Authenticated`](crate::Authenticated) guard
    pub fn from_auth_error(err: AuthError) -> (Status, Json<Self>) {
        let code = match err {
            AuthError::NotConfigured => "B0001",
            _ => Error::TokenInvalid.code(),
        };
        (
            err.status(),
            Json(Self {
                code,
                message: err.message().to_string(),
            }),
        )
    }
}
