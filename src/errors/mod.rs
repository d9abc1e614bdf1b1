use anyhow::Context as _;
use reqwest::{Method, StatusCode};

/// Context for a request that never got a response
pub fn request_context(method: &Method, url: &str) -> String {
    format!("Failed to send {} {}", method, url)
}

/// Context for a response body that did not match the expected shape
pub fn decode_context(url: &str, shape: &str) -> String {
    format!("Failed to decode {} from {}", shape, url)
}

/// Error for a non-success status code
pub fn status_error(method: &Method, url: &str, status: StatusCode) -> anyhow::Error {
    anyhow::anyhow!("{} {} returned status {}", method, url, status)
}

/// Wrap a transport result with request context
pub fn with_request_context<T, E>(result: Result<T, E>, method: &Method, url: &str) -> anyhow::Result<T>
where
    E: std::error::Error + Send + Sync + 'static,
{
    result.with_context(|| request_context(method, url))
}

/// Wrap a decoding result with shape context
pub fn with_decode_context<T, E>(result: Result<T, E>, url: &str, shape: &str) -> anyhow::Result<T>
where
    E: std::error::Error + Send + Sync + 'static,
{
    result.with_context(|| decode_context(url, shape))
}
