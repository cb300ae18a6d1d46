// src/types/domain_types.rs
//! Domain-specific newtypes for type safety and validation.

use super::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use url::Url;

/// Access token for a permissioned content repository.
///
/// Public repositories need none; private ones pass this as a query
/// parameter on every request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Create a new access token with validation.
    pub fn new(token: impl Into<String>) -> Result<Self, ValidationError> {
        let token = token.into();

        if token.is_empty() {
            return Err(ValidationError::InvalidAccessToken {
                reason: "access token cannot be empty".to_string(),
            });
        }

        if token.chars().any(char::is_whitespace) {
            return Err(ValidationError::InvalidAccessToken {
                reason: "access token cannot contain whitespace".to_string(),
            });
        }

        if token.len() < 8 {
            return Err(ValidationError::InvalidAccessToken {
                reason: "access token is too short".to_string(),
            });
        }

        Ok(Self(token))
    }

    /// Get the access token as a string reference.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Redact the token in display
        let prefix: String = self.0.chars().take(4).collect();
        write!(f, "{}...", prefix)
    }
}

/// The validated base URL of the document API (e.g.
/// `https://my-repo.cdn.prismic.io/api/v2`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiEndpoint(Url);

impl ApiEndpoint {
    /// Parse and validate an endpoint URL.
    pub fn parse(url: &str) -> Result<Self, ValidationError> {
        let parsed = parse_http_url(url)?;
        Ok(Self(parsed))
    }

    /// Get the endpoint as a string.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Get the underlying URL.
    pub fn as_url(&self) -> &Url {
        &self.0
    }

    /// Builds a URL for a path under this endpoint.
    pub fn join(&self, segment: &str) -> Result<Url, ValidationError> {
        let base = self.0.as_str().trim_end_matches('/');
        let joined = format!("{}/{}", base, segment);
        Url::parse(&joined).map_err(|e| ValidationError::InvalidUrl {
            url: joined,
            reason: e.to_string(),
        })
    }
}

impl fmt::Display for ApiEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The opaque next-page cursor returned by the document API.
///
/// The source hands back an absolute URL pointing at the next page of
/// results. It is validated as a fetchable http(s) URL and otherwise
/// treated as a black box: never parsed apart, never reconstructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageCursor(Url);

impl PageCursor {
    /// Parse and validate a cursor URL.
    pub fn parse(url: &str) -> Result<Self, ValidationError> {
        let parsed = parse_http_url(url)?;
        Ok(Self(parsed))
    }

    /// Get the cursor as a string.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Get the underlying URL, for issuing the follow-up request.
    pub fn as_url(&self) -> &Url {
        &self.0
    }
}

impl fmt::Display for PageCursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for PageCursor {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.as_str().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for PageCursor {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PageCursor::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// A fully composed page of markdown output, ready for delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPage(String);

impl RenderedPage {
    pub fn new(content: impl Into<String>) -> Self {
        Self(content.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for RenderedPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Shared scheme validation for endpoint and cursor URLs.
fn parse_http_url(url: &str) -> Result<Url, ValidationError> {
    match Url::parse(url) {
        Ok(parsed) => {
            if parsed.scheme() != "http" && parsed.scheme() != "https" {
                return Err(ValidationError::InvalidUrl {
                    url: url.to_string(),
                    reason: "Only HTTP and HTTPS URLs are supported".to_string(),
                });
            }
            Ok(parsed)
        }
        Err(e) => Err(ValidationError::InvalidUrl {
            url: url.to_string(),
            reason: e.to_string(),
        }),
    }
}
