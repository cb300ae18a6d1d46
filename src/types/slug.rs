// src/types/slug.rs
//! The unique human-readable key for a post.

use super::ValidationError;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

lazy_static! {
    /// Lowercase alphanumeric segments joined by single hyphens.
    static ref SLUG_SHAPE: Regex =
        Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").expect("slug regex is valid");
}

/// Maximum accepted slug length. Document keys in the source are short;
/// anything longer is a sign of a corrupted or hostile value.
const SLUG_MAX_LENGTH: usize = 128;

/// A validated post slug, used in routing and by-identifier lookup.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Slug(String);

impl Slug {
    /// Parses and validates a raw slug string.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let input = input.trim();

        if input.is_empty() {
            return Err(ValidationError::InvalidSlug {
                slug: input.to_string(),
                reason: "slug cannot be empty".to_string(),
            });
        }

        if input.len() > SLUG_MAX_LENGTH {
            let shown: String = input.chars().take(SLUG_MAX_LENGTH).collect();
            return Err(ValidationError::InvalidSlug {
                slug: format!("{}...", shown),
                reason: format!("slug exceeds {} characters", SLUG_MAX_LENGTH),
            });
        }

        if !SLUG_SHAPE.is_match(input) {
            return Err(ValidationError::InvalidSlug {
                slug: input.to_string(),
                reason: "slug must be lowercase alphanumeric segments joined by hyphens"
                    .to_string(),
            });
        }

        Ok(Self(input.to_string()))
    }

    /// Returns the slug as a string reference.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Slug {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Slug {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Slug::parse(&value).map_err(serde::de::Error::custom)
    }
}
