use thiserror::Error;

mod domain_types;
mod slug;

pub use domain_types::*;
pub use slug::Slug;

#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid slug format: {slug} - {reason}")]
    InvalidSlug { slug: String, reason: String },

    #[error("Invalid URL format: {url} - {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Invalid access token: {reason}")]
    InvalidAccessToken { reason: String },

    #[error("Empty required field: {0}")]
    EmptyField(&'static str),

    #[error("Value out of bounds: {value}, expected {min}..={max}")]
    OutOfBounds { value: u32, min: u32, max: u32 },
}
