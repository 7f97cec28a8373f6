//! Error Extension Tests

use blog_domain::error::{Error, Result};
use blog_infrastructure::error_ext::{ErrorContext, to_domain_error};
use std::io;

fn not_found() -> io::Error {
    io::Error::new(io::ErrorKind::NotFound, "file not found")
}

#[test]
fn test_io_context() {
    let result: Result<()> = Err(not_found()).io_context("failed to read key file");

    match result {
        Err(Error::Io { message, source }) => {
            assert!(message.contains("failed to read key file"));
            assert!(message.contains("file not found"));
            assert!(source.is_some());
        }
        other => panic!("Expected Io error, got {other:?}"),
    }
}

#[test]
fn test_context_maps_to_infrastructure() {
    let result: Result<()> = Err(not_found()).context("redis unreachable");
    assert!(matches!(result, Err(Error::Infrastructure { .. })));

    let mut evaluated = false;
    let result: Result<()> = Err(not_found()).with_context(|| {
        evaluated = true;
        "lazy context"
    });
    assert!(evaluated);
    assert!(matches!(result, Err(Error::Infrastructure { message, .. }) if message.starts_with("lazy context")));
}

#[test]
fn test_with_context_is_lazy_on_success() {
    let mut evaluated = false;
    let value = Ok::<_, io::Error>(7)
        .with_context(|| {
            evaluated = true;
            "unused"
        })
        .unwrap();

    assert_eq!(value, 7);
    assert!(!evaluated);
}

#[test]
fn test_typed_contexts() {
    let config: Result<()> = Err(not_found()).config_context("bad config");
    assert!(matches!(config, Err(Error::Configuration { .. })));

    let io: Result<()> = Err(not_found()).io_context("reading key");
    let err = io.unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
    assert_eq!(err.code(), "B0001");
    assert!(!err.is_business());
}

#[test]
fn test_to_domain_error() {
    match to_domain_error(not_found(), "opening cache") {
        Error::Infrastructure { message, source } => {
            assert_eq!(message, "opening cache: file not found");
            assert!(source.is_some());
        }
        other => panic!("Expected Infrastructure error, got {other:?}"),
    }
}
