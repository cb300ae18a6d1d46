// src/formatting/mod.rs
//! Page composition — turns posts into rendered markdown pages.
//!
//! Three pages exist: the post listing, a single post, and the
//! missing-post page for a slug the source does not know.

pub mod date;

use crate::analytics::reading_time_minutes;
use crate::constants::{CHARS_PER_GROUP_ESTIMATE, CHARS_PER_LISTING_ROW_ESTIMATE};
use crate::error::AppError;
use crate::model::Post;
use crate::pipeline::ListingContent;
use crate::types::{RenderedPage, Slug};
use date::format_publication_date;
use std::fmt::Write;

/// Composes the post listing: one section per post with title,
/// subtitle, and byline, then a pagination footer.
pub fn compose_listing_markdown(listing: &ListingContent) -> Result<RenderedPage, AppError> {
    let estimated_capacity = listing.posts.len() * CHARS_PER_LISTING_ROW_ESTIMATE;
    let mut output = String::with_capacity(estimated_capacity);

    writeln!(output, "# Posts")?;

    for post in &listing.posts {
        writeln!(output)?;
        writeln!(output, "## {}", post.display_title())?;
        if !post.data.subtitle.is_empty() {
            writeln!(output)?;
            writeln!(output, "{}", post.data.subtitle)?;
        }
        writeln!(output)?;
        writeln!(output, "{}", byline(post))?;
    }

    writeln!(output)?;
    match listing.total_results {
        Some(total) => writeln!(
            output,
            "{} of {} posts loaded.",
            listing.posts.len(),
            total
        )?,
        None => writeln!(output, "{} posts loaded.", listing.posts.len())?,
    }
    if listing.has_more {
        writeln!(output, "More posts are available.")?;
    }

    Ok(RenderedPage::new(output))
}

/// Composes a single post page: banner, byline with reading time, then
/// each content group as a heading followed by its paragraphs.
pub fn compose_post_markdown(post: &Post) -> Result<RenderedPage, AppError> {
    let estimated_capacity = (post.data.content.len() + 1) * CHARS_PER_GROUP_ESTIMATE;
    let mut output = String::with_capacity(estimated_capacity);

    writeln!(output, "# {}", post.display_title())?;

    if let Some(banner) = &post.data.banner {
        writeln!(output)?;
        writeln!(
            output,
            "![{}]({})",
            banner.alt.as_deref().unwrap_or(""),
            banner.url
        )?;
    }

    writeln!(output)?;
    writeln!(
        output,
        "{} · {} min read",
        byline(post),
        reading_time_minutes(Some(post))
    )?;

    for group in &post.data.content {
        writeln!(output)?;
        writeln!(output, "## {}", group.heading)?;
        for paragraph in &group.body {
            writeln!(output)?;
            writeln!(output, "{}", paragraph.text)?;
        }
    }

    Ok(RenderedPage::new(output))
}

/// The distinct page for a slug the source does not know.
pub fn compose_missing_post(slug: &Slug) -> RenderedPage {
    RenderedPage::new(format!(
        "# Post not found\n\nNo post exists for slug '{}'. It may have been unpublished,\nor the address may be mistyped.\n",
        slug
    ))
}

/// Date and author row. Posts the source never published have no date;
/// the byline is then just the author.
fn byline(post: &Post) -> String {
    match format_publication_date(post.first_publication_date) {
        Some(date) => format!("{} · {}", date, post.data.author),
        None => post.data.author.clone(),
    }
}
