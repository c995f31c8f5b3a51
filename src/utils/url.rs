//! URL helpers for building backend endpoints.

/// Path of the chat endpoint relative to the configured base URL.
pub const CHAT_ENDPOINT: &str = "chat";

/// Join `base_url` and `endpoint` with exactly one slash between them.
///
/// ```
/// use eventsync::utils::url::join_endpoint;
///
/// assert_eq!(join_endpoint("http://localhost:8000/", "/chat"), "http://localhost:8000/chat");
/// ```
pub fn join_endpoint(base_url: &str, endpoint: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let endpoint = endpoint.trim_start_matches('/');
    format!("{base}/{endpoint}")
}

/// Full URL of the chat endpoint for a configured base URL.
pub fn chat_endpoint(base_url: &str) -> String {
    join_endpoint(base_url, CHAT_ENDPOINT)
}
