//! Failure modes of the two chat endpoints.
//!
//! None of these reach the user: a failed poll waits for the next tick and a
//! failed submit is dropped. They exist so callers and tests can tell the
//! silent branches apart.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChatError {
    /// Connection refused, reset, DNS failure, timeout.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("server returned {0}")]
    Status(reqwest::StatusCode),

    /// The body was not a message list.
    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
}
