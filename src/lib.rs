// src/lib.rs
//! spacetraveling library — a blog front-end over a headless content
//! repository.
//!
//! # Public API
//!
//! The library exposes types organized by concern:
//! - **Error handling** — `AppError`, `SourceErrorKind`, `ValidationError`
//! - **Configuration** — `CommandLineInput`, `SiteConfig`
//! - **Domain model** — `Post`, `PostData`, `ContentGroup`, `PostPage`
//! - **Domain types** — `Slug`, `AccessToken`, `ApiEndpoint`, `PageCursor`
//! - **Content source** — `ContentRepository`, `PrismicHttpClient`, parsers
//! - **Pagination** — `PostFeed`, `FeedState`, `LoadOutcome`
//! - **Reading time** — `reading_time_minutes`, `measure_post`
//! - **Formatting** — `compose_listing_markdown`, `compose_post_markdown`

// Internal modules — must match what's in main.rs
mod analytics;
mod api;
mod config;
mod constants;
mod error;
mod formatting;
mod model;
mod output;
mod pipeline;
mod types;

// --- Error Handling ---
pub use crate::error::{AppError, SourceErrorKind};
pub use crate::types::ValidationError;

// --- Configuration ---
pub use crate::config::{CommandLineInput, SiteConfig};

// --- Domain Model ---
pub use crate::model::{Banner, BodyText, ContentGroup, Post, PostData, PostPage};

// --- Domain Types ---
pub use crate::types::{AccessToken, ApiEndpoint, PageCursor, RenderedPage, Slug};

// --- Content Source ---
pub use crate::api::{
    extract_response_text,
    parser::{parse_master_ref, parse_post_page},
    ApiResponse, ContentRepository, PrismicHttpClient,
};

// --- Pagination ---
pub use crate::api::{fetch_entire_feed, FeedState, LoadOutcome, PostFeed};

// --- Reading Time ---
pub use crate::analytics::{
    group_word_count, measure_post, post_word_count, reading_time_minutes, token_count,
    PostMeasurement,
};

// --- Formatting ---
pub use crate::formatting::{
    compose_listing_markdown, compose_missing_post, compose_post_markdown,
    date::format_publication_date,
};

// --- Output ---
pub use crate::output::{deliver, DeliveryTarget, OutputPlan, OutputReport};

// --- Pipeline Traits ---
pub use crate::pipeline::{
    ContentSource, ListingContent, PageComposer, PageContent, PageDelivery, PageRequest,
};
