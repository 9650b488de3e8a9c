use super::*;

// =============================================================
// Endpoint paths
// =============================================================

#[test]
fn optimize_endpoint_is_per_language() {
    assert_eq!(
        optimize_endpoint("http://localhost:5000", Language::Java),
        "http://localhost:5000/optimize-java"
    );
    assert_eq!(
        optimize_endpoint("http://localhost:5000", Language::Python),
        "http://localhost:5000/optimize-python"
    );
    assert_eq!(
        optimize_endpoint("http://localhost:5000", Language::Js),
        "http://localhost:5000/optimize-js"
    );
}

#[test]
fn summarize_and_decompose_endpoints() {
    assert_eq!(summarize_endpoint("http://api"), "http://api/summarize");
    assert_eq!(decompose_endpoint("http://api"), "http://api/decompose-summary");
}

// =============================================================
// User-facing error messages
// =============================================================

#[test]
fn server_error_uses_backend_message() {
    let err = ApiError::Server(Some("No code provided".to_owned()));
    assert_eq!(err.user_message(), "Server Error: No code provided");
}

#[test]
fn server_error_falls_back_when_body_is_empty() {
    let err = ApiError::Server(None);
    assert_eq!(err.user_message(), "Server Error: Something went wrong");
}

#[test]
fn unreachable_server_has_fixed_message() {
    assert_eq!(
        ApiError::Unreachable.user_message(),
        "Error: Server is unreachable. Please try again later."
    );
}

#[test]
fn request_error_passes_raw_text_through() {
    let err = ApiError::Request("missing field `optimized`".to_owned());
    assert_eq!(err.user_message(), "Unexpected Error: missing field `optimized`");
}
