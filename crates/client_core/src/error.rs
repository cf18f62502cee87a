use shared::error::ValidationError;
use thiserror::Error;

/// Shown to a submitter for failures that carry no backend explanation.
pub const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred.";

#[derive(Debug, Error)]
pub enum ClientError {
    /// Rejected locally; no request was made.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("backend rejected request with status {status}: {message}")]
    Api { status: u16, message: String },
    #[error("network failure: {0}")]
    Network(#[from] reqwest::Error),
    #[error("malformed backend response: {0}")]
    Decode(String),
    /// The request never left this process, e.g. the worker that performs
    /// I/O has gone away.
    #[error("request could not be dispatched: {0}")]
    Transport(String),
}

impl ClientError {
    /// Text suitable for showing next to the form.
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(err) => err.to_string(),
            Self::Api { message, .. } => message.clone(),
            Self::Network(_) | Self::Decode(_) | Self::Transport(_) => {
                UNEXPECTED_ERROR_MESSAGE.to_string()
            }
        }
    }
}
