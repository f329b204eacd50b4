//! Report generation for ranked link tallies
//!
//! This module handles:
//! - Ranking tallied URLs by mention count
//! - Rendering the ranking as tab-separated plain text
//! - Rendering the ranking as a self-contained HTML table

mod html;
mod text;

pub use html::format_html_report;
pub use text::format_text_report;

use crate::extract::LinkTally;

/// Output format for the link report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    /// One `url<TAB>count` line per link
    Text,
    /// A self-contained HTML document with a two-column table
    Html,
}

/// Ranks a tally's entries by mention count descending, URL ascending
///
/// The secondary ordering breaks ties deterministically: URLs with equal
/// counts come out in alphabetical order.
///
/// # Arguments
///
/// * `tally` - The link tally to rank
///
/// # Returns
///
/// All (url, count) pairs, most mentioned first
pub fn rank_links(tally: &LinkTally) -> Vec<(&str, u64)> {
    let mut entries: Vec<(&str, u64)> = tally.iter().collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    entries
}

/// Renders a tally as a report in the requested format
///
/// # Arguments
///
/// * `tally` - The link tally to report on
/// * `page_url` - The page URL exactly as the user gave it, for the title
/// * `format` - Plain text or HTML
///
/// # Returns
///
/// The complete report, ready to write to stdout
pub fn render_report(tally: &LinkTally, page_url: &str, format: ReportFormat) -> String {
    let entries = rank_links(tally);

    match format {
        ReportFormat::Text => format_text_report(&entries, page_url),
        ReportFormat::Html => format_html_report(&entries, page_url),
    }
}
