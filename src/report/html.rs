//! HTML report rendering
//!
//! Emits a minimal self-contained document: a title, a heading, and a
//! two-column Link/Mentions table. URLs pass through an HTML escape before
//! being embedded, in attribute position as well as in text position.

/// Formats ranked entries as a self-contained HTML document
///
/// # Arguments
///
/// * `entries` - The ranked (url, count) pairs
/// * `page_url` - The page URL exactly as the user gave it
pub fn format_html_report(entries: &[(&str, u64)], page_url: &str) -> String {
    let title = escape_html(&format!("Top links in {}", page_url));

    let mut out = String::new();

    out.push_str(&format!("<html><head><title>{}</title></head>\n", title));
    out.push_str(&format!(
        "<body><h3>{}</h3><table width=\"100%\"><tr><th align=\"left\">Link</th><th align=\"right\">Mentions</th></tr>\n",
        title
    ));

    for (url, count) in entries {
        out.push_str(&format!(
            "<tr><td><a href=\"{}\">{}</a></td><td align=\"right\">{}</td></tr>\n",
            escape_attr(url),
            escape_html(url),
            count
        ));
    }

    out.push_str("</table></body></html>\n");

    out
}

/// Escapes HTML-special characters for text positions
fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

/// Escapes HTML-special characters for double-quoted attribute values
fn escape_attr(s: &str) -> String {
    escape_html(s).replace('"', "&quot;")
}
