//! Unit tests for account status

use blog_domain::{Error, UserStatus};

#[test]
fn test_from_name_is_case_insensitive() {
    assert_eq!(
        UserStatus::from_name(Some("active")).unwrap(),
        UserStatus::Active
    );
    assert_eq!(
        UserStatus::from_name(Some("Pending_Verification")).unwrap(),
        UserStatus::PendingVerification
    );
    assert_eq!(
        "DELETED".parse::<UserStatus>().unwrap(),
        UserStatus::Deleted
    );
}

#[test]
fn test_from_name_errors() {
    assert!(matches!(
        UserStatus::from_name(Some("BANNED")),
        Err(Error::InvalidStatus { .. })
    ));
    assert!(matches!(
        UserStatus::from_name(None),
        Err(Error::ParamMissing { .. })
    ));
}

#[test]
fn test_is_available() {
    assert!(UserStatus::Active.is_available());
    assert!(UserStatus::PendingVerification.is_available());
    assert!(!UserStatus::Suspended.is_available());
    assert!(!UserStatus::Deleted.is_available());
}

#[test]
fn test_login_eligibility_is_stricter() {
    assert!(UserStatus::Active.ensure_can_login().is_ok());
    assert!(matches!(
        UserStatus::PendingVerification.ensure_can_login(),
        Err(Error::EmailNotVerified)
    ));
    assert!(matches!(
        UserStatus::Suspended.ensure_can_login(),
        Err(Error::AccountSuspended)
    ));
    assert!(matches!(
        UserStatus::Deleted.ensure_can_login(),
        Err(Error::AccountSuspended)
    ));
}

#[test]
fn test_name_round_trip() {
    for status in UserStatus::ALL {
        assert_eq!(UserStatus::from_name(Some(status.name())).unwrap(), status);
    }
}
