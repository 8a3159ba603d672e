//! Error types for the artigram library.

use std::io;
use thiserror::Error;

/// Result type alias for artigram operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while validating, rendering, or fetching.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input is not syntactically valid JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The input parses as JSON but fails the document shape check.
    #[error("Schema error: {0}")]
    Schema(String),

    /// Error while producing rendered output.
    #[error("Rendering error: {0}")]
    Render(String),

    /// Transport-level failure talking to the task service.
    #[error("HTTP error: {0}")]
    Http(String),

    /// The task service reported the task as failed.
    #[error("Task failed: {0}")]
    TaskFailed(String),

    /// The poll budget ran out before the task reached a terminal state.
    #[error("Timed out waiting for task completion after {attempts} polls")]
    Timeout {
        /// Number of polls performed before giving up.
        attempts: u32,
    },

    /// A newer submission superseded this poll loop.
    #[error("Superseded by a newer submission")]
    Superseded,

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

#[cfg(feature = "client")]
impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Http(err.to_string())
    }
}
