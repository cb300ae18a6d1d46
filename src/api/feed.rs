// src/api/feed.rs
//! The post feed: incremental pagination over the listing.

use super::ContentRepository;
use crate::constants::FEED_MAX_PAGES;
use crate::error::AppError;
use crate::model::{Post, PostPage};
use crate::types::PageCursor;

/// Loading state of the feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedState {
    /// A next-page cursor is held; `load_more` will fetch it.
    Idle,
    /// The cursor is null; the listing is complete.
    Exhausted,
}

/// Outcome of a [`PostFeed::load_more`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// A page was fetched and merged.
    Loaded { appended: usize },
    /// The feed was already exhausted; no fetch was issued.
    AlreadyExhausted,
}

/// Accumulated listing state: every post loaded so far, in fetch order,
/// plus the cursor to the next page.
///
/// The sequence is append-only, never deduplicated or reordered; if the
/// source repeats a post across overlapping pages, the repeat is kept.
/// All mutation goes through `&mut self`, so one owner drives every
/// transition; coordinating overlapping load triggers (single-flight)
/// is the interaction layer's concern, not this type's.
#[derive(Debug, Clone)]
pub struct PostFeed {
    posts: Vec<Post>,
    next_page: Option<PageCursor>,
    total_results_size: Option<usize>,
}

impl PostFeed {
    /// Builds the feed from the first fetched page. Starts `Idle` when
    /// the page carries a cursor, `Exhausted` otherwise.
    pub fn new(initial: PostPage) -> Self {
        Self {
            posts: initial.results,
            next_page: initial.next_page,
            total_results_size: initial.total_results_size,
        }
    }

    pub fn state(&self) -> FeedState {
        if self.next_page.is_some() {
            FeedState::Idle
        } else {
            FeedState::Exhausted
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.next_page.is_none()
    }

    /// Posts loaded so far, in fetch order.
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// Consumes the feed, returning the accumulated posts.
    pub fn into_posts(self) -> Vec<Post> {
        self.posts
    }

    /// The current next-page cursor, if any.
    pub fn next_page(&self) -> Option<&PageCursor> {
        self.next_page.as_ref()
    }

    /// Total matching posts reported by the source, if known.
    pub fn total_results_size(&self) -> Option<usize> {
        self.total_results_size
    }

    /// Fetches the next page and merges it into the feed.
    ///
    /// In `Idle` state this issues exactly one `fetch_page` against the
    /// held cursor, appends the results in order, and replaces the
    /// cursor with the returned one. In `Exhausted` state it is a
    /// no-op: no fetch is issued. A failed fetch propagates the error
    /// and leaves the feed unchanged.
    pub async fn load_more(
        &mut self,
        source: &dyn ContentRepository,
    ) -> Result<LoadOutcome, AppError> {
        let Some(cursor) = self.next_page.clone() else {
            log::debug!("load_more on an exhausted feed; skipping");
            return Ok(LoadOutcome::AlreadyExhausted);
        };

        let page = source.fetch_page(&cursor).await?;
        let appended = page.results.len();

        self.posts.extend(page.results);
        self.next_page = page.next_page;
        if page.total_results_size.is_some() {
            self.total_results_size = page.total_results_size;
        }

        log::debug!(
            "Loaded {} more posts ({} total, exhausted: {})",
            appended,
            self.posts.len(),
            self.is_exhausted()
        );

        Ok(LoadOutcome::Loaded { appended })
    }
}

/// Drains the listing: fetches the first page, then follows the cursor
/// chain until the feed is exhausted or the page cap is reached.
///
/// `max_pages` counts fetched pages including the first and is clamped
/// to [`FEED_MAX_PAGES`].
pub async fn fetch_entire_feed(
    source: &dyn ContentRepository,
    page_size: u32,
    max_pages: Option<u32>,
) -> Result<PostFeed, AppError> {
    let cap = max_pages.unwrap_or(FEED_MAX_PAGES).min(FEED_MAX_PAGES);

    let mut feed = PostFeed::new(source.list_posts(page_size).await?);
    let mut pages_fetched = 1u32;

    while !feed.is_exhausted() && pages_fetched < cap {
        feed.load_more(source).await?;
        pages_fetched += 1;
    }

    if !feed.is_exhausted() {
        log::debug!("Reached maximum page limit: {}", cap);
    }

    Ok(feed)
}
