// src/api/mod.rs
//! Content source interaction — the ability to retrieve posts from a
//! headless repository.
//!
//! This module keeps a clear separation between I/O operations
//! (`client`), wire-format parsing (`responses`, `parser`), and the
//! pagination state machine (`feed`).

pub mod client;
pub mod feed;
pub mod parser;
mod responses;

use crate::error::AppError;
use crate::model::{Post, PostPage};
use crate::types::{PageCursor, Slug};

/// The ability to retrieve posts from a content repository.
///
/// This is the fundamental algebra for source interaction. The feed and
/// the pipeline depend on this trait, never on HTTP details.
#[async_trait::async_trait]
pub trait ContentRepository: Send + Sync {
    /// Fetches the first page of posts, in the source's default order.
    ///
    /// Network, auth, and server failures propagate to the caller; no
    /// retries happen here.
    async fn list_posts(&self, page_size: u32) -> Result<PostPage, AppError>;

    /// Follows an opaque pagination cursor returned by the source.
    /// Same failure semantics as [`Self::list_posts`].
    async fn fetch_page(&self, cursor: &PageCursor) -> Result<PostPage, AppError>;

    /// Fetches one post by its unique slug. A slug the source does not
    /// know yields [`AppError::PostNotFound`], distinct from source
    /// failures.
    async fn get_post_by_slug(&self, slug: &Slug) -> Result<Post, AppError>;
}

// Re-export the public interface
pub use client::{extract_response_text, ApiResponse, PrismicHttpClient};
pub use feed::{fetch_entire_feed, FeedState, LoadOutcome, PostFeed};
