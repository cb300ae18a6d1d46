// src/model/post.rs
//! The blog post domain model.
//!
//! These types are the boundary between the wire protocol and the rest
//! of the crate: the parser produces them, the feed accumulates them,
//! the estimator and the renderer consume them. Immutable once fetched.

use crate::types::{PageCursor, Slug};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single blog post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    /// Unique routing key for the post.
    pub slug: Slug,
    /// When the post was first published. Null for documents the source
    /// has never published (e.g. previews).
    pub first_publication_date: Option<DateTime<Utc>>,
    pub data: PostData,
}

impl Post {
    /// Returns a human-readable display title for this post.
    pub fn display_title(&self) -> &str {
        if self.data.title.is_empty() {
            "Untitled Post"
        } else {
            &self.data.title
        }
    }
}

/// The authored fields of a post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostData {
    pub title: String,
    pub subtitle: String,
    pub author: String,
    pub banner: Option<Banner>,
    /// Ordered content groups, each a heading with its paragraphs.
    #[serde(default)]
    pub content: Vec<ContentGroup>,
}

/// The post's header image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Banner {
    pub url: String,
    pub alt: Option<String>,
}

/// A heading followed by its body paragraphs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentGroup {
    pub heading: String,
    #[serde(default)]
    pub body: Vec<BodyText>,
}

/// One paragraph of body text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyText {
    pub text: String,
}

/// One page of listing results together with the cursor to the next.
///
/// Produced by the content source client; consumed and merged by the
/// pagination controller. A null `next_page` means the listing is
/// complete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostPage {
    /// Posts in the source's order for this page.
    pub results: Vec<Post>,
    /// Opaque cursor to the next page, if any.
    pub next_page: Option<PageCursor>,
    /// Total matching documents across all pages, when the source
    /// reports it.
    pub total_results_size: Option<usize>,
}

impl PostPage {
    /// Whether the source has more pages beyond this one.
    pub fn has_more(&self) -> bool {
        self.next_page.is_some()
    }
}
