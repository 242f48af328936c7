//! Client error types.

/// Error type for upstream calls.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Infrastructure failures talking to the upstream API.
///
/// These propagate out of a tool call; domain failures travel in the
/// envelope instead.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Base URL or route could not form a valid URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Transport failure (connect, timeout, body decode)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx status
    #[error("Upstream returned status {status} for {url}: {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Requested URL
        url: String,
        /// Response body, possibly empty
        body: String,
    },

    /// Body was not valid JSON
    #[error("Invalid JSON from upstream: {0}")]
    Json(#[from] serde_json::Error),
}
