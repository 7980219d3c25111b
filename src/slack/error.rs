//! Error types for delivering webhook messages.

use thiserror::Error;

/// Error type for HTTP transport operations.
///
/// Describes what went wrong at the network level; the caller decides what
/// to do about it.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Network connection failed.
    ///
    /// Covers DNS resolution, refused connections and TLS failures.
    #[error("Connection error: {0}")]
    Connection(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The server did not answer within the configured timeout.
    #[error("Request timed out")]
    Timeout,

    /// The webhook URL could not be used to build a request.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

/// Error returned by [`Message::send`](super::Message::send).
#[derive(Debug, Error)]
pub enum SendError {
    /// The payload could not be encoded; nothing was sent.
    #[error("Failed to serialize payload: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The request could not be delivered.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// Slack answered with a status outside `200..=299`.
    #[error("code: {}, message:{body}", .status.as_u16())]
    Rejected {
        /// Status code returned by the webhook
        status: http::StatusCode,
        /// Response body, kept as diagnostic detail
        body: String,
    },

    /// The runtime backing [`Message::send_blocking`](super::Message::send_blocking)
    /// could not be started.
    #[error("Failed to start blocking runtime: {0}")]
    Runtime(#[source] std::io::Error),
}

impl SendError {
    /// Returns the HTTP status for a rejected message.
    #[must_use]
    pub const fn status(&self) -> Option<http::StatusCode> {
        match self {
            Self::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }
}
