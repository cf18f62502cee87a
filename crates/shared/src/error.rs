use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Body the backend returns alongside a non-2xx status. Either field may be
/// absent, and some backends send no body at all.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
        }
    }

    /// Non-blank error text, if the backend supplied any.
    pub fn message(&self) -> Option<&str> {
        self.error
            .as_deref()
            .map(str::trim)
            .filter(|message| !message.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Comment exceeds maximum length of {max} characters")]
    ContentTooLong { max: usize },
    #[error("Comment must not be empty")]
    MissingContent,
    #[error("Username is required")]
    MissingUsername,
}
