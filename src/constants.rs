// src/constants.rs
//! Domain constants that define the operational boundaries of the system.
//!
//! Each constant is named for the domain concept it constrains, not its
//! technical role. Reading these constants should tell you the story
//! of how the front-end operates: how it pages through the source, how
//! it estimates reading time, how long rendered pages stay fresh.

// ---------------------------------------------------------------------------
// Content source boundaries
// ---------------------------------------------------------------------------

/// The document type queried for blog posts.
pub const POST_DOCUMENT_TYPE: &str = "post";

/// How many posts a listing page requests by default.
///
/// Matches the listing page size of the site: ten posts per page, with a
/// "load more" cursor for the rest.
pub const DEFAULT_LIST_PAGE_SIZE: u32 = 10;

/// The maximum page size the document API accepts.
///
/// Requests above this are clamped rather than rejected, so a caller
/// asking for "everything" still gets the largest page the source allows.
pub const SOURCE_MAX_PAGE_SIZE: u32 = 100;

/// Hard cap on cursor-chain length when draining an entire feed.
///
/// The next-page cursor is an opaque URL; if a misbehaving source ever
/// returned a cycling cursor, an uncapped walk would never terminate.
pub const FEED_MAX_PAGES: u32 = 1_000;

// ---------------------------------------------------------------------------
// Reading time
// ---------------------------------------------------------------------------

/// Reading speed used for the per-post time estimate.
pub const WORDS_PER_MINUTE: usize = 200;

// ---------------------------------------------------------------------------
// Static-generation contract
// ---------------------------------------------------------------------------

/// How long a rendered post listing stays fresh before regeneration.
#[allow(dead_code)]
pub const LISTING_REVALIDATE_SECS: u64 = 60;

/// How long a rendered single-post page stays fresh before regeneration.
#[allow(dead_code)]
pub const POST_REVALIDATE_SECS: u64 = 7_200;

// ---------------------------------------------------------------------------
// String capacity hints (performance, not correctness)
// ---------------------------------------------------------------------------

/// Estimated characters per content group, used to pre-allocate output
/// strings. Over-estimating wastes a little memory; under-estimating
/// causes reallocation.
pub const CHARS_PER_GROUP_ESTIMATE: usize = 256;

/// Estimated characters per listing row.
pub const CHARS_PER_LISTING_ROW_ESTIMATE: usize = 160;

// ---------------------------------------------------------------------------
// Error display
// ---------------------------------------------------------------------------

/// Maximum characters shown when previewing error response bodies.
pub const ERROR_BODY_PREVIEW_LENGTH: usize = 200;
