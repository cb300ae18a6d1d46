// src/main.rs

// Modules defined in the crate
mod analytics;
mod api;
mod config;
mod constants;
mod error;
mod formatting;
mod model;
mod output;
mod pipeline;
mod types;

// Specific imports
use crate::analytics::measure_post;
use crate::api::{ContentRepository, LoadOutcome, PostFeed, PrismicHttpClient};
use crate::config::{CommandLineInput, SiteConfig};
use crate::error::AppError;
use crate::pipeline::{
    ContentSource, ListingContent, PageComposer, PageContent, PageDelivery, PageRequest,
};
use clap::Parser;
use log::LevelFilter;
use log4rs::{
    append::console::ConsoleAppender,
    append::file::FileAppender,
    config::{Appender, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
    Config,
};
use output::{deliver, DeliveryTarget, OutputReport};
use std::fs;
use types::RenderedPage;

/// Sets up logging configuration.
fn setup_logging(verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let log_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let log_file_path = std::env::temp_dir().join("spacetraveling.log");
    if let Some(parent) = log_file_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let pattern = if verbose {
        "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}"
    } else {
        "{m}{n}"
    };

    let stdout_appender = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new(pattern)))
        .build();

    let file_appender = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}",
        )))
        .build(&log_file_path)?;

    let config = Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout_appender)))
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(LevelFilter::Debug)))
                .build("file", Box::new(file_appender)),
        )
        .build(
            Root::builder()
                .appender("stdout")
                .appender("file")
                .build(log_level),
        )?;

    log4rs::init_config(config)?;
    log::info!("Logging initialized. Log file: {}", log_file_path.display());
    Ok(())
}

/// Executes the three-stage pipeline: fetch → compose → deliver.
async fn execute_pipeline(config: &SiteConfig) -> Result<(), AppError> {
    let frontend = BlogFrontend::new(config);

    let request = match &config.slug {
        Some(slug) => PageRequest::Post(slug.clone()),
        None => PageRequest::Listing,
    };

    let content = frontend.fetch(&request).await?;
    let page = frontend.compose(&content)?;
    let report = frontend.deliver(page)?;
    frontend.report_completion(&content, &report)?;

    Ok(())
}

/// Orchestrates the retrieval, composition, and delivery of blog pages.
struct BlogFrontend<'a> {
    config: &'a SiteConfig,
}

impl<'a> BlogFrontend<'a> {
    fn new(config: &'a SiteConfig) -> Self {
        Self { config }
    }

    /// Loads the listing: first page, then the configured number of
    /// "load more" rounds (or the whole chain with --all).
    async fn fetch_listing(&self, client: &PrismicHttpClient) -> Result<ListingContent, AppError> {
        let feed = if self.config.all {
            api::fetch_entire_feed(client, self.config.page_size, None).await?
        } else {
            let mut feed = PostFeed::new(client.list_posts(self.config.page_size).await?);
            for _ in 0..self.config.pages {
                if let LoadOutcome::AlreadyExhausted = feed.load_more(client).await? {
                    break;
                }
            }
            feed
        };

        log::info!(
            "Retrieved {} posts (exhausted: {})",
            feed.posts().len(),
            feed.is_exhausted()
        );

        Ok(ListingContent {
            has_more: !feed.is_exhausted(),
            total_results: feed.total_results_size(),
            posts: feed.into_posts(),
        })
    }

    /// Delivers the rendered page to configured outputs (file, stdout).
    fn deliver_page(&self, page: RenderedPage) -> Result<OutputReport, AppError> {
        let page_str = page.into_string();
        let mut plan = output::OutputPlan::new();

        if self.config.pipe {
            plan = plan.with_operation(DeliveryTarget::PrintToStdout { content: page_str });
        } else if let Some(output_path) = &self.config.output_file {
            plan = plan.with_operation(DeliveryTarget::WriteFile {
                path: output_path.clone(),
                content: page_str,
            });
        } else {
            plan = plan.with_operation(DeliveryTarget::PrintToStdout { content: page_str });
        }

        let report = deliver(plan)?;

        if !report.is_success() {
            return Err(AppError::DeliveryFailed {
                failures: report.failed.iter().map(|f| f.error.clone()).collect(),
            });
        }

        Ok(report)
    }

    /// Reports completion to the user with stats and delivery confirmations.
    fn report_completion(
        &self,
        content: &PageContent,
        report: &OutputReport,
    ) -> Result<(), AppError> {
        if self.config.pipe {
            return Ok(());
        }

        match content {
            PageContent::Listing(listing) => {
                match listing.total_results {
                    Some(total) => {
                        println!("📄 Loaded {} of {} posts.", listing.posts.len(), total)
                    }
                    None => println!("📄 Loaded {} posts.", listing.posts.len()),
                }
                if listing.has_more {
                    println!("ℹ️  More posts are available. Re-run with --pages or --all.");
                }
            }
            PageContent::Post(post) => {
                let stats = measure_post(post);
                println!(
                    "📄 '{}': {} words, {} min read.",
                    post.display_title(),
                    stats.words,
                    stats.reading_minutes
                );
            }
            PageContent::Missing { slug } => {
                eprintln!("⚠️  No post found for slug '{}'.", slug);
            }
        }

        for completed in &report.completed {
            if let DeliveryTarget::WriteFile { path, .. } = &completed.operation {
                println!("✓ Page saved to {}", path.display());
            }
        }

        Ok(())
    }
}

#[async_trait::async_trait]
impl ContentSource for BlogFrontend<'_> {
    async fn fetch(&self, request: &PageRequest) -> Result<PageContent, AppError> {
        let client = PrismicHttpClient::connect(self.config).await?;

        match request {
            PageRequest::Listing => {
                log::info!("Retrieving the post listing");
                Ok(PageContent::Listing(self.fetch_listing(&client).await?))
            }
            PageRequest::Post(slug) => {
                log::info!("Retrieving post '{}'", slug);
                match client.get_post_by_slug(slug).await {
                    Ok(post) => Ok(PageContent::Post(Box::new(post))),
                    Err(err) if err.is_not_found() => {
                        log::warn!("{}", err);
                        Ok(PageContent::Missing { slug: slug.clone() })
                    }
                    Err(err) => Err(err),
                }
            }
        }
    }
}

impl PageComposer for BlogFrontend<'_> {
    fn compose(&self, content: &PageContent) -> Result<RenderedPage, AppError> {
        match content {
            PageContent::Listing(listing) => formatting::compose_listing_markdown(listing),
            PageContent::Post(post) => formatting::compose_post_markdown(post),
            PageContent::Missing { slug } => Ok(formatting::compose_missing_post(slug)),
        }
    }
}

impl PageDelivery for BlogFrontend<'_> {
    fn deliver(&self, page: RenderedPage) -> Result<OutputReport, AppError> {
        self.deliver_page(page)
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CommandLineInput::parse();

    setup_logging(cli.verbose)?;

    let config = SiteConfig::resolve(cli)?;

    execute_pipeline(&config).await?;

    Ok(())
}
