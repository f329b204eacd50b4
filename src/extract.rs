//! Link extraction and tallying
//!
//! This module handles parsing fetched page content to count links:
//! - Anchor hrefs are pulled from `<a>` tags
//! - Relative hrefs are resolved against the page's own URL
//! - Only targets with an http or https scheme enter the tally
//!
//! Resolution happens before scheme filtering, so relative hrefs count
//! toward the page's own site while `mailto:`, `javascript:` and other
//! non-web targets drop out no matter how they were written.

use scraper::{Html, Selector};
use std::collections::HashMap;
use url::Url;

/// Occurrence counts for the absolute URLs linked from one page
///
/// Keys are the serialized forms of resolved URLs; values are how many
/// anchor tags pointed at them. No order is kept here, reporting re-sorts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkTally {
    counts: HashMap<String, u64>,
}

impl LinkTally {
    /// Creates an empty tally
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one more mention of the given URL
    pub fn record(&mut self, url: impl Into<String>) {
        *self.counts.entry(url.into()).or_insert(0) += 1;
    }

    /// Returns the number of mentions recorded for a URL (zero if unseen)
    pub fn count(&self, url: &str) -> u64 {
        self.counts.get(url).copied().unwrap_or(0)
    }

    /// Returns the number of distinct URLs in the tally
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Returns true if no URLs have been tallied
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterates over (url, count) pairs in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.counts.iter().map(|(url, count)| (url.as_str(), *count))
    }
}

/// Parses page content and tallies every absolute HTTP(S) link target
///
/// The body is decoded lossily and parsed with the usual browser error
/// recovery, so malformed markup still yields whatever anchors the parser
/// can make sense of. Bytes that contain no anchors at all produce an
/// empty tally, not an error.
///
/// # Arguments
///
/// * `body` - The raw page bytes as fetched
/// * `base_url` - The page's own URL, used to resolve relative hrefs
///
/// # Returns
///
/// A [`LinkTally`] mapping each resolved absolute URL to its mention count
///
/// # Example
///
/// ```
/// use linktally::extract::tally_links;
/// use url::Url;
///
/// let body = br#"<html><body><a href="/a">one</a><a href="/a">two</a></body></html>"#;
/// let base_url = Url::parse("https://example.com/").unwrap();
/// let tally = tally_links(body, &base_url);
/// assert_eq!(tally.count("https://example.com/a"), 2);
/// ```
pub fn tally_links(body: &[u8], base_url: &Url) -> LinkTally {
    let text = String::from_utf8_lossy(body);
    let document = Html::parse_document(&text);

    let mut tally = LinkTally::new();

    if let Ok(selector) = Selector::parse("a[href]") {
        for element in document.select(&selector) {
            if let Some(href) = element.value().attr("href") {
                if let Some(absolute_url) = resolve_href(href, base_url) {
                    tally.record(absolute_url);
                }
            }
        }
    }

    tally
}

/// Resolves an anchor href to an absolute URL and validates it
///
/// Returns None if the href should be excluded:
/// - Empty or whitespace-only hrefs
/// - Fragment-only links (same page anchors)
/// - Hrefs that cannot be resolved against the base URL
/// - Non-HTTP(S) targets after resolution (mailto:, javascript:, tel:, data:)
fn resolve_href(href: &str, base_url: &Url) -> Option<String> {
    let href = href.trim();

    // Skip empty hrefs
    if href.is_empty() {
        return None;
    }

    // Skip fragment-only links (same page anchors)
    if href.starts_with('#') {
        return None;
    }

    // Resolve, then filter on the scheme of the result
    match base_url.join(href) {
        Ok(absolute_url) => {
            if absolute_url.scheme() == "http" || absolute_url.scheme() == "https" {
                Some(absolute_url.to_string())
            } else {
                None
            }
        }
        Err(_) => None,
    }
}
