//! Plain-text error response helpers
//!
//! The backend answers every failure with a single-line `text/plain` body
//! terminated by a newline. These helpers assert that contract without
//! depending on backend types.

use actix_web::body::BoxBody;
use actix_web::dev::ServiceResponse;
use actix_web::http::header::{HeaderMap, CONTENT_TYPE};
use actix_web::http::StatusCode;

/// Assert that response parts carry the plain-text error contract:
/// - HTTP status matches expected
/// - `Content-Type` is `text/plain`
/// - `x-trace-id` header is present and non-empty
/// - body is exactly `"{expected_message}\n"`
pub fn assert_plain_text_error_from_parts(
    status: StatusCode,
    headers: &HeaderMap,
    body_bytes: &[u8],
    expected_status: StatusCode,
    expected_message: &str,
) {
    assert_eq!(status, expected_status);

    let content_type = headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert!(
        content_type.starts_with("text/plain"),
        "Content-Type must be text/plain (got {content_type})"
    );

    let trace_id = headers
        .get("x-trace-id")
        .and_then(|v| v.to_str().ok())
        .expect("x-trace-id header should be present and valid UTF-8");
    assert!(!trace_id.is_empty(), "x-trace-id header should not be empty");

    let body = std::str::from_utf8(body_bytes).expect("Response body should be valid UTF-8");
    assert_eq!(body, format!("{expected_message}\n"));
}

/// Assert that a ServiceResponse carries the plain-text error contract.
pub async fn assert_plain_text_error(
    resp: ServiceResponse<BoxBody>,
    expected_status: StatusCode,
    expected_message: &str,
) {
    let status = resp.status();
    let headers = resp.headers().clone();
    let body = actix_web::test::read_body(resp).await;

    assert_plain_text_error_from_parts(status, &headers, &body, expected_status, expected_message);
}
