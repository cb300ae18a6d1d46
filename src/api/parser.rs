// src/api/parser.rs
//! Turns raw API responses into the domain model.
//!
//! All status handling lives here: a successful body deserializes into
//! the wire types and converts to domain values; a non-success status
//! classifies into a typed [`SourceErrorKind`] with the source's own
//! message when it sent one.

use super::client::ApiResponse;
use super::responses::{ApiErrorBody, RawDocument, RepositoryResponse, SearchResponse};
use crate::constants::ERROR_BODY_PREVIEW_LENGTH;
use crate::error::{AppError, SourceErrorKind};
use crate::model::{Banner, BodyText, ContentGroup, Post, PostData, PostPage};
use crate::types::{PageCursor, Slug};
use chrono::{DateTime, Utc};
use reqwest::StatusCode;

/// Parses a successful body as `T`, or classifies the error status.
fn parse_api_response<T>(result: ApiResponse<String>) -> Result<T, AppError>
where
    T: serde::de::DeserializeOwned,
{
    if result.status.is_success() {
        serde_json::from_str(&result.data).map_err(|e| {
            log::error!("Failed to parse response from {}: {}", result.url, e);
            AppError::MalformedResponse(format!("{} (from {})", e, result.url))
        })
    } else {
        Err(classify_error_response(
            &result.data,
            result.status,
            &result.url,
        ))
    }
}

/// Builds the typed source error for a non-success response.
fn classify_error_response(body: &str, status: StatusCode, url: &str) -> AppError {
    let message = serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .and_then(ApiErrorBody::into_message)
        .unwrap_or_else(|| format!("HTTP {} from {}: {}", status, url, preview(body)));

    AppError::SourceService {
        kind: SourceErrorKind::from_http_status(status.as_u16()),
        message,
        status,
    }
}

/// Truncates an error body for display.
fn preview(body: &str) -> String {
    if body.chars().count() > ERROR_BODY_PREVIEW_LENGTH {
        let truncated: String = body.chars().take(ERROR_BODY_PREVIEW_LENGTH).collect();
        format!("{}...", truncated)
    } else {
        body.to_string()
    }
}

/// Parses the API root response and extracts the master ref.
pub fn parse_master_ref(result: ApiResponse<String>) -> Result<String, AppError> {
    let repository: RepositoryResponse = parse_api_response(result)?;

    repository
        .master_ref()
        .map(str::to_string)
        .ok_or_else(|| {
            AppError::MalformedResponse("repository response carries no master ref".to_string())
        })
}

/// Parses one page of `documents/search` results.
pub fn parse_post_page(result: ApiResponse<String>) -> Result<PostPage, AppError> {
    let response: SearchResponse = parse_api_response(result)?;

    let next_page = match response.next_page {
        Some(url) => Some(PageCursor::parse(&url).map_err(|e| {
            AppError::MalformedResponse(format!("invalid next_page cursor: {}", e))
        })?),
        None => None,
    };

    let results = response
        .results
        .into_iter()
        .map(convert_document)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(PostPage {
        results,
        next_page,
        total_results_size: response.total_results_size,
    })
}

/// Converts a raw document into a domain post.
///
/// A document without a usable slug cannot be routed to, so it is a
/// malformed response, not a silently dropped entry.
pub fn convert_document(document: RawDocument) -> Result<Post, AppError> {
    let uid = document
        .uid
        .ok_or_else(|| AppError::MalformedResponse("document is missing its uid".to_string()))?;

    let slug = Slug::parse(&uid).map_err(|e| {
        AppError::MalformedResponse(format!("document uid is not a usable slug: {}", e))
    })?;

    let first_publication_date = document
        .first_publication_date
        .as_deref()
        .and_then(parse_publication_date);

    let data = document.data;
    let banner = data
        .banner
        .and_then(|banner| banner.url.map(|url| Banner { url, alt: banner.alt }));

    let content = data
        .content
        .into_iter()
        .map(|group| ContentGroup {
            heading: group.heading.plain_text(),
            body: group
                .body
                .into_iter()
                .map(|span| BodyText { text: span.text })
                .collect(),
        })
        .collect();

    Ok(Post {
        slug,
        first_publication_date,
        data: PostData {
            title: data.title.plain_text(),
            subtitle: data.subtitle.plain_text(),
            author: data.author.plain_text(),
            banner,
            content,
        },
    })
}

/// Parses the source's timestamp, accepting RFC 3339 and the compact
/// `+0000` offset form. An unreadable date becomes null: the post still
/// renders, just without a date row.
fn parse_publication_date(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .or_else(|_| DateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%z"))
        .map(|date| date.with_timezone(&Utc))
        .inspect_err(|e| log::warn!("Unreadable first_publication_date '{}': {}", raw, e))
        .ok()
}
