//! Error taxonomy for the summarize and copy cycles.
//!
//! Every error here is caught at the trigger that caused it and turned into
//! a [`Notice`](crate::host::Notice). Nothing propagates past the controller's
//! trigger entry points.

use thiserror::Error;

use crate::host::Notice;

/// Input rejected before any service call is made.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Input is empty or whitespace-only after trimming.
    #[error("empty input")]
    Empty,

    /// Trimmed input is shorter than the minimum.
    #[error("too short")]
    TooShort {
        /// Trimmed length in characters.
        len: usize,
    },
}

/// Failure reported by (or while talking to) the summarization service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// Response status outside the 2xx range.
    #[error("http status {status}")]
    HttpStatus {
        status: u16,
        /// Server-provided error message, kept for diagnostics only.
        detail: Option<String>,
    },

    /// Response body is not valid JSON.
    #[error("invalid response")]
    InvalidResponse,

    /// JSON body carries no usable `summary` field.
    #[error("no summary")]
    NoSummary,

    /// Request never produced a response (connect, timeout, TLS).
    #[error("request failed: {0}")]
    Transport(String),
}

impl From<reqwest::Error> for ServiceError {
    fn from(error: reqwest::Error) -> Self {
        ServiceError::Transport(error.to_string())
    }
}

/// The host clipboard rejected a write.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("clipboard write failed: {0}")]
pub struct ClipboardError(pub String);

/// Any error raised by a controller operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SummarizeError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Service(#[from] ServiceError),

    #[error(transparent)]
    Clipboard(#[from] ClipboardError),
}

impl SummarizeError {
    /// User-facing notification for this error.
    pub fn notice(&self) -> Notice {
        match self {
            SummarizeError::Validation(ValidationError::Empty) => {
                Notice::warning("Please enter some text to summarize.")
            }
            SummarizeError::Validation(ValidationError::TooShort { .. }) => Notice::warning(
                "Please enter at least 50 characters for better summarization.",
            ),
            SummarizeError::Service(_) => Notice::error(
                "An error occurred while summarizing the text. Please make sure the backend server is running and try again.",
            ),
            SummarizeError::Clipboard(_) => Notice::error("Failed to copy text to clipboard"),
        }
    }
}
