//! Feedpress: a paginated feed archiver
//!
//! This crate walks a WordPress-style paginated RSS feed page by page, renders
//! each entry's linked page into a PDF document through an external render
//! service, and stores one deterministically named artifact per entry.

pub mod archive;
pub mod config;
pub mod crawler;
pub mod feed;
pub mod render;

use thiserror::Error;

/// Main error type for archive runs
///
/// Every variant is fatal: the crawl loop propagates the first failure it sees
/// and processes nothing beyond it.
#[derive(Debug, Error)]
pub enum ArchiveError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Feed fetch error: {0}")]
    Feed(#[from] feed::FeedFetchError),

    #[error("Render error: {0}")]
    Render(#[from] render::RenderError),

    #[error("Write error: {0}")]
    Write(#[from] archive::WriteError),

    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Output directory must be an absolute path, got '{0}'")]
    RelativeOutputDir(String),

    #[error("Output directory does not exist: '{0}'")]
    MissingOutputDir(String),

    #[error("Output path is not a directory: '{0}'")]
    NotADirectory(String),

    #[error("Unsupported URL scheme '{scheme}' in {url}")]
    UnsupportedScheme { url: String, scheme: String },
}

/// Result type alias for archive operations
pub type Result<T> = std::result::Result<T, ArchiveError>;

// Re-export commonly used types
pub use archive::{slugify, ArchiveWriter};
pub use config::{RetryPolicy, RunConfig};
pub use crawler::{Crawler, RateLimiter, RunSummary};
pub use feed::{Entry, FeedPage, FeedPager};
pub use render::{DocumentRenderer, HttpRenderer, RetryingRenderer};
