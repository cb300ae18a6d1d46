// src/pipeline.rs
//! Pipeline capability traits — abstract the three stages of the blog
//! front-end: fetch content, compose a page, deliver it.
//!
//! Each trait describes a single capability, enabling testing each
//! stage in isolation.

use crate::error::AppError;
use crate::model::Post;
use crate::output::OutputReport;
use crate::types::{RenderedPage, Slug};

/// What the front-end was asked to render.
#[derive(Debug, Clone, PartialEq)]
pub enum PageRequest {
    /// The paginated post listing.
    Listing,
    /// A single post page.
    Post(Slug),
}

/// Content fetched for a request, ready for composition.
#[derive(Debug, Clone, PartialEq)]
pub enum PageContent {
    Listing(ListingContent),
    Post(Box<Post>),
    /// The requested slug does not exist; composes the missing-post
    /// page instead of failing.
    Missing { slug: Slug },
}

/// The loaded listing with its pagination status.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingContent {
    /// Posts in fetch order across all loaded pages.
    pub posts: Vec<Post>,
    /// Whether the source still holds further pages.
    pub has_more: bool,
    /// Total matching posts reported by the source, if known.
    pub total_results: Option<usize>,
}

/// Retrieves content for a page request.
#[async_trait::async_trait]
pub trait ContentSource {
    async fn fetch(&self, request: &PageRequest) -> Result<PageContent, AppError>;
}

/// Transforms fetched content into a rendered page.
pub trait PageComposer {
    fn compose(&self, content: &PageContent) -> Result<RenderedPage, AppError>;
}

/// Delivers a rendered page to its destinations.
pub trait PageDelivery {
    fn deliver(&self, page: RenderedPage) -> Result<OutputReport, AppError>;
}
