//! Linktally main entry point
//!
//! This is the command-line interface for the linktally page-link ranker.

use clap::Parser;
use linktally::{build_http_client, fetch_page, render_report, tally_links, ReportFormat};
use std::io::Write;
use tracing_subscriber::EnvFilter;
use url::Url;

/// Linktally: a single-page link popularity counter
///
/// Linktally fetches one web page, counts how often each absolute HTTP(S)
/// URL appears as an anchor target, and prints the targets ranked by
/// number of mentions.
#[derive(Parser, Debug)]
#[command(name = "linktally")]
#[command(version = "1.0.0")]
#[command(about = "Extract top links out of a HTML page", long_about = None)]
struct Cli {
    /// Input URL
    #[arg(long, value_name = "URL")]
    url: String,

    /// Print output as a HTML table
    #[arg(long)]
    html: bool,

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

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    match run(&cli).await {
        Ok(()) => Ok(()),
        Err(e) => {
            tracing::error!("linktally failed: {}", e);
            Err(e.into())
        }
    }
}

/// Runs the fetch, tally, report pipeline for the given arguments
async fn run(cli: &Cli) -> linktally::Result<()> {
    let page_url = Url::parse(&cli.url)?;

    let client = build_http_client()?;

    tracing::info!("Fetching {}", page_url);
    let body = fetch_page(&client, &page_url).await?;
    tracing::info!("Fetched {} bytes", body.len());

    let tally = tally_links(&body, &page_url);
    tracing::info!("Found {} distinct links", tally.len());

    let format = if cli.html {
        ReportFormat::Html
    } else {
        ReportFormat::Text
    };
    tracing::debug!("Rendering {:?} report", format);

    // The title shows the URL as the user typed it, so pass the raw
    // argument rather than the parsed form
    let report = render_report(&tally, &cli.url, format);

    std::io::stdout().write_all(report.as_bytes())?;

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
///
/// All log output goes to stderr; stdout carries nothing but the report.
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("linktally=warn,error"),
            1 => EnvFilter::new("linktally=info,warn"),
            2 => EnvFilter::new("linktally=debug,info"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}
