//! Error types for the interop channel.

use tokio_tungstenite::tungstenite;

/// Errors produced by the interop channel.
#[derive(Debug, thiserror::Error)]
pub enum ChannelError {
    #[error("WebSocket error: {0}")]
    Ws(#[from] tungstenite::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("request timed out")]
    Timeout,

    #[error("channel closed")]
    Closed,

    #[error("host error {code}: {message}")]
    Host { code: i32, message: String },
}

impl From<webconsole_protocol::HostError> for ChannelError {
    fn from(err: webconsole_protocol::HostError) -> Self {
        Self::Host {
            code: err.code,
            message: err.message,
        }
    }
}
