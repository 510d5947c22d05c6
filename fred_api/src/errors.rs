//! Error types for the API client.

/// Errors that can occur when making API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The request URL could not be built from the configured base URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
    /// The request never produced a response (connect error, timeout, TLS).
    #[error("Request failed: {0}")]
    Transport(String),
    /// The API returned a non-success status. `body` is the raw response text.
    #[error("FRED API request failed: {body}")]
    HttpStatus { status: u16, body: String },
    /// The response body was not the expected JSON document.
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl Error {
    /// Diagnostic text for the failure. For status failures this is the
    /// response body exactly as the API sent it.
    pub fn detail(&self) -> &str {
        match self {
            Self::InvalidUrl(msg) | Self::Transport(msg) | Self::Decode(msg) => msg,
            Self::HttpStatus { body, .. } => body,
        }
    }
}
