//! Unit tests for the role-permission directory

use blog_domain::{Error, Permission, Role};

fn expected(role: Role) -> Vec<Permission> {
    use Permission::*;
    match role {
        Role::User => vec![CommentWrite, CommentDelete],
        Role::Author => vec![
            CommentWrite,
            CommentDelete,
            ArticleCreate,
            ArticleEdit,
            ArticleDelete,
            ArticlePin,
            FileUpload,
        ],
        Role::Admin => Permission::ALL.to_vec(),
    }
}

#[test]
fn test_has_permission_matches_table_exactly() {
    for role in Role::ALL {
        let granted = expected(role);
        for permission in Permission::ALL {
            let result = role.has_permission(Some(permission)).unwrap();
            assert_eq!(
                result,
                granted.contains(&permission),
                "{role} / {permission}"
            );
        }
    }
}

#[test]
fn test_has_permission_requires_permission() {
    for role in Role::ALL {
        match role.has_permission(None) {
            Err(Error::ParamMissing { .. }) => {}
            other => panic!("Expected ParamMissing, got {other:?}"),
        }
    }
}

#[test]
fn test_author_includes_user_permissions() {
    for permission in Role::User.permissions() {
        assert!(Role::Author.permissions().contains(permission));
    }
}

#[test]
fn test_role_from_name() {
    assert_eq!(Role::from_name(Some("USER")).unwrap(), Role::User);
    assert_eq!(Role::from_name(Some("AUTHOR")).unwrap(), Role::Author);
    assert_eq!(Role::from_name(Some("ADMIN")).unwrap(), Role::Admin);
    assert!(matches!(
        Role::from_name(Some("admin")),
        Err(Error::InvalidRole { .. })
    ));
    assert!(matches!(
        Role::from_name(Some("GUEST")),
        Err(Error::InvalidRole { .. })
    ));
    assert!(matches!(
        Role::from_name(None),
        Err(Error::ParamMissing { .. })
    ));
}

#[test]
fn test_role_from_label() {
    assert_eq!(Role::from_label(Some("ROLE_ADMIN")).unwrap(), Role::Admin);
    assert!(matches!(
        Role::from_label(Some("ADMIN")),
        Err(Error::InvalidRole { .. })
    ));
    assert!(matches!(
        Role::from_label(None),
        Err(Error::ParamMissing { .. })
    ));
}

#[test]
fn test_authorities_start_with_label() {
    let authorities = Role::Author.authorities();
    assert_eq!(authorities[0], "ROLE_AUTHOR");
    assert_eq!(authorities.len(), 1 + Role::Author.permissions().len());
    assert!(authorities.contains(&"FILE_UPLOAD".to_string()));
    assert!(!authorities.contains(&"USER_BAN".to_string()));
}

#[test]
fn test_role_serde_uses_names() {
    let json = serde_json::to_string(&Role::Admin).unwrap();
    assert_eq!(json, "\"ADMIN\"");
    let permission: Permission = serde_json::from_str("\"SYSTEM_ANNOUNCE\"").unwrap();
    assert_eq!(permission, Permission::SystemAnnounce);
}
