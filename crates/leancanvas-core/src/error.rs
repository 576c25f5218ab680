//! Error types for the feedback client.

/// Feedback request errors.
#[derive(Debug, thiserror::Error)]
pub enum FeedbackError {
    /// Transport failure (connection refused, timeout, DNS).
    #[error("network error: {message}")]
    Network { message: String },

    /// Response body was not the JSON document we expected.
    #[error("invalid response: {message}")]
    InvalidResponse { message: String },

    /// Configuration error.
    #[error("configuration error: {message}")]
    Config { message: String },

    /// Writing the feedback log failed.
    #[error("log error: {message}")]
    Log { message: String },
}

impl FeedbackError {
    /// Exit code for CLI.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Network { .. } | Self::InvalidResponse { .. } => 1,
            Self::Config { .. } | Self::Log { .. } => 2,
        }
    }

    /// Whether the failure happened while talking to the endpoint, as opposed
    /// to local setup.
    pub fn is_request_failure(&self) -> bool {
        matches!(self, Self::Network { .. } | Self::InvalidResponse { .. })
    }
}

impl From<reqwest::Error> for FeedbackError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network {
            message: err.to_string(),
        }
    }
}

/// Result type for feedback operations.
pub type FeedbackResult<T> = Result<T, FeedbackError>;
