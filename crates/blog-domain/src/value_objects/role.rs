//! Role-permission directory
//!
//! Roles are fixed bundles of permissions. The table lives in
//! [`Role::permissions`] as a pure `match`; adding a role means adding an arm.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fine-grained capability checked by endpoint guards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Permission {
    ArticleCreate,
    ArticleEdit,
    ArticleDelete,
    ArticlePin,
    CommentWrite,
    CommentDelete,
    FileUpload,
    TagManage,
    UserManage,
    UserBan,
    SystemConfig,
    SystemAnnounce,
}

impl Permission {
    /// Every defined permission, in declaration order
    pub const ALL: [Permission; 12] = [
        Permission::ArticleCreate,
        Permission::ArticleEdit,
        Permission::ArticleDelete,
        Permission::ArticlePin,
        Permission::CommentWrite,
        Permission::CommentDelete,
        Permission::FileUpload,
        Permission::TagManage,
        Permission::UserManage,
        Permission::UserBan,
        Permission::SystemConfig,
        Permission::SystemAnnounce,
    ];

    /// Authority name exposed to authorization checks
    pub fn name(&self) -> &'static str {
        match self {
            Self::ArticleCreate => "ARTICLE_CREATE",
            Self::ArticleEdit => "ARTICLE_EDIT",
            Self::ArticleDelete => "ARTICLE_DELETE",
            Self::ArticlePin => "ARTICLE_PIN",
            Self::CommentWrite => "COMMENT_WRITE",
            Self::CommentDelete => "COMMENT_DELETE",
            Self::FileUpload => "FILE_UPLOAD",
            Self::TagManage => "TAG_MANAGE",
            Self::UserManage => "USER_MANAGE",
            Self::UserBan => "USER_BAN",
            Self::SystemConfig => "SYSTEM_CONFIG",
            Self::SystemAnnounce => "SYSTEM_ANNOUNCE",
        }
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

const USER_PERMISSIONS: &[Permission] = &[Permission::CommentWrite, Permission::CommentDelete];

const AUTHOR_PERMISSIONS: &[Permission] = &[
    Permission::CommentWrite,
    Permission::CommentDelete,
    Permission::ArticleCreate,
    Permission::ArticleEdit,
    Permission::ArticleDelete,
    Permission::ArticlePin,
    Permission::FileUpload,
];

/// Account role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    /// Regular reader; may comment
    #[default]
    User,
    /// May publish articles and upload files
    Author,
    /// Holds every permission
    Admin,
}

impl Role {
    /// Every defined role
    pub const ALL: [Role; 3] = [Role::User, Role::Author, Role::Admin];

    /// Role name as carried in the `role` token claim
    pub fn name(&self) -> &'static str {
        match self {
            Self::User => "USER",
            Self::Author => "AUTHOR",
            Self::Admin => "ADMIN",
        }
    }

    /// Authority label (`ROLE_<NAME>`)
    pub fn label(&self) -> &'static str {
        match self {
            Self::User => "ROLE_USER",
            Self::Author => "ROLE_AUTHOR",
            Self::Admin => "ROLE_ADMIN",
        }
    }

    /// Permissions bound to this role
    pub fn permissions(&self) -> &'static [Permission] {
        match self {
            Self::User => USER_PERMISSIONS,
            Self::Author => AUTHOR_PERMISSIONS,
            Self::Admin => &Permission::ALL,
        }
    }

    /// Membership test against the role table
    ///
    /// Fails with [`Error::ParamMissing`] when no permission is given.
    pub fn has_permission(&self, permission: Option<Permission>) -> Result<bool> {
        let permission = permission.ok_or_else(|| Error::param_missing("permission"))?;
        Ok(self.permissions().contains(&permission))
    }

    /// Authority set: the role label followed by every permission name
    pub fn authorities(&self) -> Vec<String> {
        std::iter::once(self.label().to_string())
            .chain(self.permissions().iter().map(|p| p.name().to_string()))
            .collect()
    }

    /// Resolve a role from its exact name (`"ADMIN"`)
    pub fn from_name(name: Option<&str>) -> Result<Self> {
        let name = name.ok_or_else(|| Error::param_missing("role"))?;
        Self::ALL
            .into_iter()
            .find(|role| role.name() == name)
            .ok_or_else(|| Error::invalid_role(name))
    }

    /// Resolve a role from its authority label (`"ROLE_ADMIN"`)
    pub fn from_label(label: Option<&str>) -> Result<Self> {
        let label = label.ok_or_else(|| Error::param_missing("role"))?;
        Self::ALL
            .into_iter()
            .find(|role| role.label() == label)
            .ok_or_else(|| Error::invalid_role(label))
    }
}

impl FromStr for Role {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(Some(s))
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
