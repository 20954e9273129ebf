//! Feedpress main entry point
//!
//! Command-line interface for the feed archiver.

use clap::Parser;
use feedpress::config::{self, RetryPolicy, RunConfig};
use feedpress::{ArchiveWriter, Crawler, FeedPager, HttpRenderer, RateLimiter, RetryingRenderer};
use reqwest::Client;
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;
use url::Url;

/// Feedpress: a paginated feed archiver
///
/// Feedpress walks an author's paginated RSS feed page by page, renders each
/// entry's linked page into a PDF through a render service, and stores one
/// deterministically named document per entry.
#[derive(Parser, Debug)]
#[command(name = "feedpress")]
#[command(version)]
#[command(about = "Archive a paginated feed as rendered PDF documents", long_about = None)]
struct Cli {
    /// URL of the author RSS feed to archive
    #[arg(value_name = "FEED_URL")]
    feed_url: Url,

    /// Output directory (absolute path) for rendered documents
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,

    /// Seconds to wait between requests
    #[arg(short, long, default_value_t = 3)]
    wait: u64,

    /// Which page to start on
    #[arg(short, long, default_value_t = 1)]
    start: u32,

    /// Base URL of the document render service
    #[arg(long, value_name = "URL", default_value = "http://127.0.0.1:8090")]
    render_service: Url,

    /// Re-attempts for transient fetch/render failures (0 keeps every failure fatal)
    #[arg(long, default_value_t = 0)]
    retries: u32,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let config = RunConfig {
        feed_url: cli.feed_url,
        output_dir: cli.output,
        wait: Duration::from_secs(cli.wait),
        start_page: cli.start,
        render_service: cli.render_service,
        retry: RetryPolicy::with_retries(cli.retries),
    };
    config::validate(&config)?;

    run_archive(config).await
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("feedpress=info,warn"),
            1 => EnvFilter::new("feedpress=debug,info"),
            2 => EnvFilter::new("feedpress=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Builds the HTTP client shared by the feed pager and the render client
fn build_http_client() -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ))
        .timeout(Duration::from_secs(30))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Wires up the collaborators and runs the crawl to exhaustion
async fn run_archive(config: RunConfig) -> anyhow::Result<()> {
    tracing::info!(
        "Archiving {} into {} (wait {}s, starting at page {})",
        config.feed_url,
        config.output_dir.display(),
        config.wait.as_secs(),
        config.start_page
    );
    if config.retry.max_attempts > 1 {
        tracing::info!(
            "Transient-failure retries enabled: up to {} attempts per request",
            config.retry.max_attempts
        );
    }

    let client = build_http_client()?;

    let pager = FeedPager::new(
        client.clone(),
        config.feed_url.clone(),
        config.start_page,
        config.retry,
    );
    let renderer = RetryingRenderer::new(
        HttpRenderer::new(client, config.render_service.clone()),
        config.retry,
    );
    let writer = ArchiveWriter::new(&config.output_dir);
    let limiter = RateLimiter::new(config.wait);

    let mut crawler = Crawler::new(pager, renderer, writer, limiter);

    match crawler.run().await {
        Ok(summary) => {
            tracing::info!(
                "Run complete: {} entries archived from {} pages",
                summary.entries_archived,
                summary.pages_fetched
            );
            Ok(())
        }
        Err(e) => {
            tracing::error!("Archive run failed: {}", e);
            Err(e.into())
        }
    }
}
