//! Error types surfaced by the data provider and the clipboard.

use thiserror::Error;

/// A failed provider call.
///
/// The store collapses every variant into the owning slice's `error` string;
/// [`ApiError::message`] returns `None` when the failure carried no text so the
/// slice can substitute its own fallback.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("{0}")]
    Rejected(String),

    /// Provider answered with `success: false`.
    #[error("{}", .message.as_deref().unwrap_or("request unsuccessful"))]
    Unsuccessful { message: Option<String> },

    /// Failure without any message attached.
    #[error("request failed")]
    Unknown,
}

impl ApiError {
    pub fn message(&self) -> Option<&str> {
        match self {
            ApiError::Rejected(message) if !message.is_empty() => Some(message),
            ApiError::Unsuccessful { message } => {
                message.as_deref().filter(|m| !m.is_empty())
            }
            _ => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),

    #[error("Failed to set clipboard text: {0}")]
    Write(String),
}
