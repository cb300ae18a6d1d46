// tests/unit/error_handling.rs
//! Unit tests for the error taxonomy.

use pretty_assertions::assert_eq;
use reqwest::StatusCode;
use spacetraveling::{AppError, SourceErrorKind};

#[test]
fn http_statuses_map_to_the_typed_vocabulary() {
    assert_eq!(
        SourceErrorKind::from_http_status(401),
        SourceErrorKind::Unauthorized
    );
    assert_eq!(
        SourceErrorKind::from_http_status(403),
        SourceErrorKind::AccessForbidden
    );
    assert_eq!(
        SourceErrorKind::from_http_status(404),
        SourceErrorKind::NotFound
    );
    assert_eq!(
        SourceErrorKind::from_http_status(410),
        SourceErrorKind::ExpiredRef
    );
    assert_eq!(
        SourceErrorKind::from_http_status(429),
        SourceErrorKind::RateLimited
    );
    assert_eq!(
        SourceErrorKind::from_http_status(500),
        SourceErrorKind::ServerError
    );
    assert_eq!(
        SourceErrorKind::from_http_status(418),
        SourceErrorKind::HttpStatus(418)
    );
}

#[test]
fn only_rate_limits_and_server_errors_are_transient() {
    assert!(SourceErrorKind::RateLimited.is_transient());
    assert!(SourceErrorKind::ServerError.is_transient());
    assert!(!SourceErrorKind::Unauthorized.is_transient());
    assert!(!SourceErrorKind::NotFound.is_transient());
    assert!(!SourceErrorKind::HttpStatus(418).is_transient());
}

#[test]
fn missing_posts_are_distinct_from_source_failures() {
    let missing = AppError::PostNotFound {
        slug: "missing-slug".to_string(),
    };
    assert!(missing.is_not_found());
    assert!(!missing.is_source_unavailable());

    let unavailable = AppError::SourceService {
        kind: SourceErrorKind::ServerError,
        message: "upstream exploded".to_string(),
        status: StatusCode::INTERNAL_SERVER_ERROR,
    };
    assert!(!unavailable.is_not_found());
    assert!(unavailable.is_source_unavailable());

    // Malformed responses propagate like an unavailable source
    let malformed = AppError::MalformedResponse("missing 'results' field".to_string());
    assert!(!malformed.is_not_found());
    assert!(malformed.is_source_unavailable());
}

#[test]
fn error_messages_name_the_failure() {
    let err = AppError::PostNotFound {
        slug: "missing-slug".to_string(),
    };
    assert_eq!(err.to_string(), "No post found for slug 'missing-slug'");

    let err = AppError::MissingConfiguration(
        "PRISMIC_API_ENDPOINT environment variable not set".to_string(),
    );
    assert_eq!(
        err.to_string(),
        "Missing configuration: PRISMIC_API_ENDPOINT environment variable not set"
    );

    let err = AppError::SourceService {
        kind: SourceErrorKind::Unauthorized,
        message: "Invalid access token".to_string(),
        status: StatusCode::UNAUTHORIZED,
    };
    assert_eq!(
        err.to_string(),
        "Content source returned an error (unauthorized): Invalid access token"
    );

    let err = AppError::DeliveryFailed {
        failures: vec!["disk full".to_string(), "pipe closed".to_string()],
    };
    assert_eq!(
        err.to_string(),
        "Output delivery failed: disk full, pipe closed"
    );
}
