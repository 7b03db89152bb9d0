//! HTTP client construction shared by the public and admin clients.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};

use crate::CoreError;

/// Build a JSON client with a fixed whole-request timeout.
pub fn build_json_client(timeout: Duration) -> Result<reqwest::Client, CoreError> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    reqwest::Client::builder()
        .default_headers(headers)
        .timeout(timeout)
        .build()
        .map_err(|e| CoreError::Client(e.to_string()))
}

/// `Authorization` header value for a bearer token.
pub fn bearer(token: &str) -> Result<HeaderValue, CoreError> {
    HeaderValue::from_str(&format!("Bearer {token}")).map_err(|e| CoreError::Header(e.to_string()))
}

/// Join a base URL and a route without doubling slashes.
pub fn join_url(base: &str, route: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), route.trim_start_matches('/'))
}
