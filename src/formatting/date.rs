// src/formatting/date.rs
//! Publication date formatting.

use chrono::{DateTime, Utc};

/// Formats a publication date as `d MMM yyyy` (e.g. `15 Mar 2021`).
///
/// A null date yields `None`; callers omit the date row entirely.
pub fn format_publication_date(date: Option<DateTime<Utc>>) -> Option<String> {
    date.map(|d| d.format("%-d %b %Y").to_string())
}
