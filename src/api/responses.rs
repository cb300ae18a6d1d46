// src/api/responses.rs
//! Raw wire types for the document API.
//!
//! These mirror the source's JSON shapes as loosely as safety allows;
//! `parser` converts them into the domain model and decides what counts
//! as malformed.

use serde::Deserialize;

/// The API root response carrying the repository's content revisions.
#[derive(Debug, Clone, Deserialize)]
pub struct RepositoryResponse {
    #[serde(default)]
    pub refs: Vec<RawRef>,
}

impl RepositoryResponse {
    /// The master ref required on every documents query.
    pub fn master_ref(&self) -> Option<&str> {
        self.refs
            .iter()
            .find(|r| r.is_master_ref || r.id == "master")
            .map(|r| r.reference.as_str())
    }
}

/// One content revision entry.
#[derive(Debug, Clone, Deserialize)]
pub struct RawRef {
    pub id: String,
    #[serde(rename = "ref")]
    pub reference: String,
    #[serde(rename = "isMasterRef", default)]
    pub is_master_ref: bool,
}

/// A page of results from `documents/search`.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub results: Vec<RawDocument>,
    pub next_page: Option<String>,
    pub total_results_size: Option<usize>,
}

/// A single document as the source returns it.
#[derive(Debug, Clone, Deserialize)]
pub struct RawDocument {
    pub uid: Option<String>,
    pub first_publication_date: Option<String>,
    #[serde(default)]
    pub data: RawPostData,
}

/// The authored fields of a post document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPostData {
    #[serde(default)]
    pub title: TextField,
    #[serde(default)]
    pub subtitle: TextField,
    #[serde(default)]
    pub author: TextField,
    pub banner: Option<RawBanner>,
    #[serde(default)]
    pub content: Vec<RawContentGroup>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawBanner {
    pub url: Option<String>,
    pub alt: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawContentGroup {
    #[serde(default)]
    pub heading: TextField,
    #[serde(default)]
    pub body: Vec<RawSpan>,
}

/// One structured-text span (`{"type": "paragraph", "text": "..."}`).
/// Markup annotations inside the span are ignored; only the plain text
/// is carried.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSpan {
    #[serde(default)]
    pub text: String,
}

/// A field the source serializes either as plain text or as structured
/// spans, depending on how the repository's custom type was defined.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TextField {
    Plain(String),
    Structured(Vec<RawSpan>),
}

impl TextField {
    /// Flattens to plain text; structured spans join with single spaces.
    pub fn plain_text(&self) -> String {
        match self {
            TextField::Plain(text) => text.clone(),
            TextField::Structured(spans) => spans
                .iter()
                .map(|span| span.text.as_str())
                .collect::<Vec<_>>()
                .join(" "),
        }
    }
}

impl Default for TextField {
    fn default() -> Self {
        TextField::Plain(String::new())
    }
}

/// Error body from the source. Older repositories answer
/// `{"error": "..."}`, newer ones `{"message": "..."}`.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    pub error: Option<String>,
    pub message: Option<String>,
}

impl ApiErrorBody {
    pub fn into_message(self) -> Option<String> {
        self.error.or(self.message)
    }
}
