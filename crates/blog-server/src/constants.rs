//! Server-specific constants

/// Request header carrying the bearer token
pub const AUTHORIZATION_HEADER: &str = "Authorization";

/// Message returned in place of infrastructure fault details
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";
