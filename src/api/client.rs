// src/api/client.rs
//! HTTP client for the document API.
//!
//! A thin wrapper around reqwest for one content repository. It carries
//! the endpoint, the optional access token, and the master ref resolved
//! at connect time; parsing and business logic live elsewhere.

use crate::config::SiteConfig;
use crate::constants::{POST_DOCUMENT_TYPE, SOURCE_MAX_PAGE_SIZE};
use crate::error::AppError;
use crate::model::{Post, PostPage};
use crate::types::{AccessToken, ApiEndpoint, PageCursor, Slug};
use reqwest::{Client, Response};
use url::Url;

/// HTTP client bound to a single content repository.
#[derive(Clone)]
pub struct PrismicHttpClient {
    client: Client,
    endpoint: ApiEndpoint,
    access_token: Option<AccessToken>,
    master_ref: String,
}

impl PrismicHttpClient {
    /// Connects to the repository: builds the HTTP client and resolves
    /// the current master ref from the API root.
    pub async fn connect(config: &SiteConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .user_agent(concat!("spacetraveling/", env!("CARGO_PKG_VERSION")))
            .build()?;

        let master_ref =
            resolve_master_ref(&client, &config.endpoint, config.access_token.as_ref()).await?;
        log::debug!("Resolved master ref for {}", config.endpoint);

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            access_token: config.access_token.clone(),
            master_ref,
        })
    }

    /// Makes a GET request to an absolute URL.
    async fn get(&self, url: Url) -> Result<Response, AppError> {
        log::debug!("GET {}", url.path());

        let response = self.client.get(url).send().await?;
        Ok(response)
    }

    /// Builds a `documents/search` URL for the given predicates.
    fn search_url(&self, predicates: &[String], page_size: u32) -> Result<Url, AppError> {
        if page_size > SOURCE_MAX_PAGE_SIZE {
            log::warn!(
                "Requested page size {} exceeds the source maximum {}. Clamping.",
                page_size,
                SOURCE_MAX_PAGE_SIZE
            );
        }
        let page_size = page_size.clamp(1, SOURCE_MAX_PAGE_SIZE);

        let mut url = self.endpoint.join("documents/search")?;
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("ref", &self.master_ref);
            for predicate in predicates {
                query.append_pair("q", predicate);
            }
            query.append_pair("pageSize", &page_size.to_string());
            if let Some(token) = &self.access_token {
                query.append_pair("access_token", token.as_str());
            }
        }

        Ok(url)
    }
}

/// Fetches the API root and extracts the master ref.
async fn resolve_master_ref(
    client: &Client,
    endpoint: &ApiEndpoint,
    access_token: Option<&AccessToken>,
) -> Result<String, AppError> {
    let mut url = endpoint.as_url().clone();
    if let Some(token) = access_token {
        url.query_pairs_mut()
            .append_pair("access_token", token.as_str());
    }

    log::debug!("GET {}", endpoint);
    let response = client.get(url).send().await?;
    let result = extract_response_text(response).await?;
    super::parser::parse_master_ref(result)
}

#[async_trait::async_trait]
impl super::ContentRepository for PrismicHttpClient {
    async fn list_posts(&self, page_size: u32) -> Result<PostPage, AppError> {
        let predicate = format!(r#"[[at(document.type,"{}")]]"#, POST_DOCUMENT_TYPE);
        let url = self.search_url(&[predicate], page_size)?;
        let response = self.get(url).await?;
        let result = extract_response_text(response).await?;
        super::parser::parse_post_page(result)
    }

    async fn fetch_page(&self, cursor: &PageCursor) -> Result<PostPage, AppError> {
        // The cursor is a complete URL from the source, followed
        // verbatim. Never parsed apart, never rebuilt.
        let response = self.get(cursor.as_url().clone()).await?;
        let result = extract_response_text(response).await?;
        super::parser::parse_post_page(result)
    }

    async fn get_post_by_slug(&self, slug: &Slug) -> Result<Post, AppError> {
        let predicates = [
            format!(r#"[[at(document.type,"{}")]]"#, POST_DOCUMENT_TYPE),
            format!(
                r#"[[at(my.{}.uid,"{}")]]"#,
                POST_DOCUMENT_TYPE,
                slug.as_str()
            ),
        ];
        let url = self.search_url(&predicates, 1)?;
        let response = self.get(url).await?;
        let result = extract_response_text(response).await?;
        let page = super::parser::parse_post_page(result)?;

        page.results
            .into_iter()
            .next()
            .ok_or_else(|| AppError::PostNotFound {
                slug: slug.to_string(),
            })
    }
}

/// Result of an HTTP operation with response metadata.
#[derive(Debug)]
pub struct ApiResponse<T> {
    pub data: T,
    pub status: reqwest::StatusCode,
    pub url: String,
}

/// Extracts the response body as text with metadata.
pub async fn extract_response_text(response: Response) -> Result<ApiResponse<String>, AppError> {
    let status = response.status();
    let url = response.url().to_string();
    let text = response.text().await?;

    Ok(ApiResponse {
        data: text,
        status,
        url,
    })
}
