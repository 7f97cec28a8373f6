//! Authenticated identity and issued credentials

use crate::value_objects::{Permission, Role};
use serde::{Deserialize, Serialize};

/// Identity attached to a request after a bearer token passes the gate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticatedIdentity {
    /// Principal name (the token subject)
    pub principal: String,
    /// Account id
    pub user_id: i64,
    /// Role carried by the access token
    pub role: Role,
    /// Role label followed by every permission name of the role
    pub authorities: Vec<String>,
}

impl AuthenticatedIdentity {
    /// Build an identity with the full authority set of `role`
    pub fn new(user_id: i64, role: Role) -> Self {
        Self {
            principal: user_id.to_string(),
            user_id,
            role,
            authorities: role.authorities(),
        }
    }

    /// Whether the authority set contains `authority`
    pub fn has_authority(&self, authority: &str) -> bool {
        self.authorities.iter().any(|a| a == authority)
    }

    pub fn has_permission(&self, permission: Permission) -> bool {
        self.has_authority(permission.name())
    }
}

/// Token pair returned by a successful login
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResult {
    pub access_token: String,
    pub refresh_token: String,
}
