// src/config.rs
use crate::constants::{DEFAULT_LIST_PAGE_SIZE, SOURCE_MAX_PAGE_SIZE};
use crate::error::AppError;
use crate::types::{AccessToken, ApiEndpoint, Slug};
use clap::Parser;
use std::path::PathBuf;

/// Parsed and validated command-line input.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CommandLineInput {
    /// Slug of a single post to render (omit to render the post listing)
    pub slug: Option<String>,

    /// Extra "load more" rounds after the first listing page
    #[arg(long, default_value_t = 0)]
    pub pages: u32,

    /// Follow the cursor chain until the listing is exhausted
    #[arg(long, default_value_t = false)]
    pub all: bool,

    /// Posts per listing page (the source caps this at 100)
    #[arg(short = 'n', long, default_value_t = DEFAULT_LIST_PAGE_SIZE)]
    pub page_size: u32,

    /// Output file for the rendered page (optional)
    #[arg(short, long)]
    pub output_file: Option<String>,

    /// Pipe mode - output the page directly to stdout for piping
    #[arg(short = 'p', long, default_value_t = false)]
    pub pipe: bool,

    /// Enable verbose logging (debug level)
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

/// Resolved site configuration — validated and ready to drive all three
/// pipeline stages.
///
/// All ambient client configuration (endpoint, token) lives here
/// explicitly; nothing is read from the environment past this point.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub endpoint: ApiEndpoint,
    pub access_token: Option<AccessToken>,
    /// Single-post mode when set; listing mode otherwise.
    pub slug: Option<Slug>,
    pub pages: u32,
    pub all: bool,
    pub page_size: u32,
    pub output_file: Option<PathBuf>,
    pub pipe: bool,
    #[allow(dead_code)] // Used by bin target
    pub verbose: bool,
}

impl SiteConfig {
    /// Resolves a complete configuration from CLI input and environment.
    pub fn resolve(cli: CommandLineInput) -> Result<Self, AppError> {
        let endpoint_str = std::env::var("PRISMIC_API_ENDPOINT").map_err(|_| {
            AppError::MissingConfiguration(
                "PRISMIC_API_ENDPOINT environment variable not set".to_string(),
            )
        })?;
        let endpoint = ApiEndpoint::parse(&endpoint_str)?;

        let access_token = match std::env::var("PRISMIC_ACCESS_TOKEN") {
            Ok(token) => Some(AccessToken::new(token)?),
            Err(_) => None,
        };

        let slug = cli.slug.as_deref().map(Slug::parse).transpose()?;

        Ok(SiteConfig {
            endpoint,
            access_token,
            slug,
            pages: cli.pages,
            all: cli.all,
            page_size: cli.page_size.clamp(1, SOURCE_MAX_PAGE_SIZE),
            output_file: cli.output_file.map(PathBuf::from),
            pipe: cli.pipe,
            verbose: cli.verbose,
        })
    }
}
