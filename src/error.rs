//! Unified SDK error types.

use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// HTTP-layer errors.
#[derive(Error, Debug)]
pub enum HttpError {
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// The server answered with a non-2xx status. The body is not decoded.
    #[error("APIError(code={status}): {reason}")]
    Api { status: u16, reason: String },

    /// The server answered 2xx but the body is not valid JSON.
    #[error("Invalid response: {body}")]
    InvalidResponse { body: String },
}
