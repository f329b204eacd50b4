//! End-to-end tests for the fetch, tally, report pipeline
//!
//! These tests serve a page with wiremock, run the full pipeline against
//! it, and compare the rendered report byte for byte.

use linktally::{build_http_client, fetch_page, render_report, tally_links, ReportFormat};
use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Mounts the given body at /page and returns the server and page URL
async fn serve_page(body: String) -> (MockServer, Url) {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/page"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(&mock_server)
        .await;

    let url = Url::parse(&format!("{}/page", mock_server.uri())).expect("Failed to parse URL");
    (mock_server, url)
}

#[tokio::test]
async fn test_text_report_end_to_end() {
    let body = r##"<html><body>
        <a href="http://example.com/beta">Beta</a>
        <a href="http://example.com/alpha">Alpha</a>
        <a href="http://example.com/beta">Beta again</a>
        <a href="/local">Local</a>
        <a href="mailto:someone@example.com">Mail</a>
        <a href="#top">Top</a>
    </body></html>"##;

    let (mock_server, url) = serve_page(body.to_string()).await;

    let client = build_http_client().expect("Failed to build client");
    let bytes = fetch_page(&client, &url).await.expect("Fetch failed");
    let tally = tally_links(&bytes, &url);
    let report = render_report(&tally, url.as_str(), ReportFormat::Text);

    // The local link resolves against the mock server's own base URL.
    // "http://127.0.0.1:..." sorts before "http://example.com/..." at
    // equal counts ('1' < 'e')
    let expected = format!(
        "Top links in {base}/page\nhttp://example.com/beta\t2\n{base}/local\t1\nhttp://example.com/alpha\t1\n",
        base = mock_server.uri()
    );
    assert_eq!(report, expected);
}

#[tokio::test]
async fn test_html_report_end_to_end() {
    let body = r#"<html><body>
        <a href="http://example.com/a">A</a>
        <a href="http://example.com/a">A</a>
        <a href="http://example.com/b">B</a>
    </body></html>"#;

    let (_mock_server, url) = serve_page(body.to_string()).await;

    let client = build_http_client().expect("Failed to build client");
    let bytes = fetch_page(&client, &url).await.expect("Fetch failed");
    let tally = tally_links(&bytes, &url);
    let report = render_report(&tally, url.as_str(), ReportFormat::Html);

    let expected = format!(
        concat!(
            "<html><head><title>Top links in {page}</title></head>\n",
            "<body><h3>Top links in {page}</h3>",
            "<table width=\"100%\"><tr><th align=\"left\">Link</th><th align=\"right\">Mentions</th></tr>\n",
            "<tr><td><a href=\"http://example.com/a\">http://example.com/a</a></td><td align=\"right\">2</td></tr>\n",
            "<tr><td><a href=\"http://example.com/b\">http://example.com/b</a></td><td align=\"right\">1</td></tr>\n",
            "</table></body></html>\n"
        ),
        page = url
    );
    assert_eq!(report, expected);
}

#[tokio::test]
async fn test_page_without_anchors_yields_title_only() {
    let body = "<html><head><title>Nothing here</title></head><body><p>No links</p></body></html>";

    let (_mock_server, url) = serve_page(body.to_string()).await;

    let client = build_http_client().expect("Failed to build client");
    let bytes = fetch_page(&client, &url).await.expect("Fetch failed");
    let tally = tally_links(&bytes, &url);
    assert!(tally.is_empty());

    let report = render_report(&tally, url.as_str(), ReportFormat::Text);
    assert_eq!(report, format!("Top links in {}\n", url));
}

#[tokio::test]
async fn test_pipeline_counts_only_http_targets() {
    let body = r#"<html><body>
        <a href="ftp://files.example.com/archive">FTP</a>
        <a href="javascript:void(0)">JS</a>
        <a href="https://example.com/kept">Kept</a>
    </body></html>"#;

    let (_mock_server, url) = serve_page(body.to_string()).await;

    let client = build_http_client().expect("Failed to build client");
    let bytes = fetch_page(&client, &url).await.expect("Fetch failed");
    let tally = tally_links(&bytes, &url);

    assert_eq!(tally.len(), 1);
    assert_eq!(tally.count("https://example.com/kept"), 1);
}
