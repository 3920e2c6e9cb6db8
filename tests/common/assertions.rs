//! Assertion helpers for tests.

use axum::http::StatusCode;
use pretty_assertions::assert_eq;

use super::app::TestResponse;
use super::fixtures::RAMP;

/// Assert response has expected status code
pub fn assert_status(response: &TestResponse, expected: StatusCode) {
    assert_eq!(
        response.status, expected,
        "Expected status {}, got {}. Body: {}",
        expected,
        response.status,
        response.text()
    );
}

/// Assert response is OK (200)
pub fn assert_ok(response: &TestResponse) {
    assert_status(response, StatusCode::OK);
}

/// Assert response is an HTML page
pub fn assert_html(response: &TestResponse) {
    assert_ok(response);

    let content_type = response.content_type().unwrap_or_default();
    assert!(
        content_type.starts_with("text/html"),
        "Expected Content-Type: text/html, got {content_type}"
    );
}

/// Extract the contents of the first `<pre>` block in a page.
///
/// The conversion result page carries the ASCII art in exactly one
/// `<pre>` element; this pulls out the text between the opening and
/// closing tags, unmodified.
pub fn pre_content(html: &str) -> String {
    let start = html.find("<pre").expect("No <pre> element in page");
    let open_end = html[start..]
        .find('>')
        .map(|i| start + i + 1)
        .expect("Unterminated <pre> tag");
    let close = html[open_end..]
        .find("</pre>")
        .map(|i| open_end + i)
        .expect("No closing </pre>");
    html[open_end..close].to_string()
}

/// Assert a block of ASCII art has the expected grid shape and alphabet
pub fn assert_ascii_grid(ascii: &str, expected_rows: usize, expected_columns: usize) {
    let rows: Vec<&str> = ascii.split('\n').collect();

    assert_eq!(
        rows.len(),
        expected_rows,
        "Expected {expected_rows} rows, got {}",
        rows.len()
    );
    for (i, row) in rows.iter().enumerate() {
        assert_eq!(
            row.chars().count(),
            expected_columns,
            "Row {i} has the wrong width"
        );
        assert!(
            row.chars().all(|c| RAMP.contains(c)),
            "Row {i} contains characters outside the ramp: {row:?}"
        );
    }

    assert!(!ascii.ends_with('\n'), "ASCII art has a trailing newline");
}
