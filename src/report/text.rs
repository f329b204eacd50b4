//! Plain-text report rendering

/// Formats ranked entries as tab-separated plain text
///
/// The first line names the page; each entry follows as `url<TAB>count`
/// in the order given.
///
/// # Arguments
///
/// * `entries` - The ranked (url, count) pairs
/// * `page_url` - The page URL exactly as the user gave it
pub fn format_text_report(entries: &[(&str, u64)], page_url: &str) -> String {
    let mut out = String::new();

    out.push_str(&format!("Top links in {}\n", page_url));

    for (url, count) in entries {
        out.push_str(&format!("{}\t{}\n", url, count));
    }

    out
}
