//! Linktally: a single-page link popularity counter
//!
//! This crate implements a one-shot link ranker: it fetches a single web page,
//! tallies how often each absolute HTTP(S) URL appears as an anchor target,
//! and renders the tally ranked by mention count.

pub mod extract;
pub mod fetch;
pub mod report;

use thiserror::Error;

/// Main error type for linktally operations
#[derive(Debug, Error)]
pub enum TallyError {
    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for linktally operations
pub type Result<T> = std::result::Result<T, TallyError>;

// Re-export commonly used types
pub use extract::{tally_links, LinkTally};
pub use fetch::{build_http_client, fetch_page};
pub use report::{rank_links, render_report, ReportFormat};
