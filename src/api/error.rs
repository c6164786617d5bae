use thiserror::Error;

/// Failure of a single backend call.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Connection, TLS or body transfer failure.
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a body that is not the expected JSON.
    #[error("invalid response from backend: {0}")]
    Decode(#[from] serde_json::Error),

    /// A well-formed response reporting failure (`error` / `success: false`).
    #[error("{message}")]
    Backend { status: u16, message: String },

    /// The call's task ended without reporting a result.
    #[error("request was interrupted before completing")]
    Interrupted,

    /// The request could not be handed to the worker.
    #[error("request could not be sent: {0}")]
    Unavailable(String),
}

impl ApiError {
    /// True for the transport class (network, decode, lost task).
    pub fn is_transport(&self) -> bool {
        !matches!(self, ApiError::Backend { .. })
    }

    /// True for a failure the backend reported in a successful (2xx) reply.
    pub fn is_rejected_reply(&self) -> bool {
        matches!(self, ApiError::Backend { status, .. } if (200..300).contains(status))
    }
}
