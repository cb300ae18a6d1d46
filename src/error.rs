// src/error.rs
//! Application error types with structured error handling.
//!
//! Error types form the vocabulary for failure modes in the system.
//! The taxonomy the rest of the crate relies on is small: a request to
//! the content source either failed in a way the caller can only report
//! (source unavailable), or it succeeded and the requested post simply
//! does not exist (not found). Everything else is configuration, IO, or
//! delivery trouble local to this process.

use std::fmt;
use thiserror::Error;

/// HTTP failure classes from the content source as a typed vocabulary.
///
/// Instead of matching against raw status codes at call sites, the
/// classification lives in one place. Each variant tells you exactly
/// what the source reported and enables pattern-based handling without
/// magic numbers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceErrorKind {
    /// The access token is missing, invalid, or expired
    Unauthorized,
    /// The token lacks permission for this repository
    AccessForbidden,
    /// The requested API path does not exist
    NotFound,
    /// The content revision (ref) in the request has expired
    ExpiredRef,
    /// Request rate limit exceeded
    RateLimited,
    /// The source reported an internal failure
    ServerError,
    /// Any other HTTP status
    HttpStatus(u16),
}

impl SourceErrorKind {
    /// Classify an HTTP status code into the typed vocabulary.
    pub fn from_http_status(status: u16) -> Self {
        match status {
            401 => Self::Unauthorized,
            403 => Self::AccessForbidden,
            404 => Self::NotFound,
            410 => Self::ExpiredRef,
            429 => Self::RateLimited,
            500..=599 => Self::ServerError,
            other => Self::HttpStatus(other),
        }
    }

    /// Whether this failure is transient from the source's side.
    ///
    /// The core performs no retries; callers deciding whether to
    /// re-invoke can consult this.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::RateLimited | Self::ServerError)
    }
}

impl fmt::Display for SourceErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unauthorized => write!(f, "unauthorized"),
            Self::AccessForbidden => write!(f, "access_forbidden"),
            Self::NotFound => write!(f, "not_found"),
            Self::ExpiredRef => write!(f, "expired_ref"),
            Self::RateLimited => write!(f, "rate_limited"),
            Self::ServerError => write!(f, "server_error"),
            Self::HttpStatus(code) => write!(f, "http_{}", code),
        }
    }
}

/// Main application error type.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Missing configuration: {0}")]
    MissingConfiguration(String),

    #[error("Network failure: {0}")]
    NetworkFailure(#[from] reqwest::Error),

    #[error("Content source returned an error ({kind}): {message}")]
    SourceService {
        kind: SourceErrorKind,
        message: String,
        status: reqwest::StatusCode,
    },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("No post found for slug '{slug}'")]
    PostNotFound { slug: String },

    #[error("Filesystem IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Output delivery failed: {}", failures.join(", "))]
    DeliveryFailed { failures: Vec<String> },

    #[error("Internal error: {message}")]
    InternalError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error(transparent)]
    Validation(#[from] crate::types::ValidationError),
}

impl AppError {
    /// Whether this error means the requested post simply doesn't exist.
    ///
    /// The rendering layer maps this to a distinct missing-post state
    /// instead of a failure report.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::PostNotFound { .. })
    }

    /// Whether this error means the content source could not be used.
    ///
    /// Malformed responses count: a source speaking an unexpected shape
    /// is as unusable as one that is down.
    pub fn is_source_unavailable(&self) -> bool {
        matches!(
            self,
            Self::NetworkFailure(_) | Self::SourceService { .. } | Self::MalformedResponse(_)
        )
    }
}

// Allow converting from anyhow::Error, preserving the message
impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::InternalError {
            message: err.to_string(),
            source: None,
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::MalformedResponse(err.to_string())
    }
}

impl From<std::fmt::Error> for AppError {
    fn from(err: std::fmt::Error) -> Self {
        AppError::InternalError {
            message: "Formatting error".to_string(),
            source: Some(Box::new(err)),
        }
    }
}

/// Result type alias for convenience
pub type Result<T, E = AppError> = std::result::Result<T, E>;
