use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

pub const MAX_COMMENT_LENGTH: usize = 2000;

/// Request body for `POST /api/comments`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NewComment {
    pub username: String,
    pub content: String,
}

impl NewComment {
    pub fn new(username: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            content: content.into(),
        }
    }

    /// Length is checked first so an oversized body is always reported as
    /// such, whatever else is wrong with the draft.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.content.chars().count() > MAX_COMMENT_LENGTH {
            return Err(ValidationError::ContentTooLong {
                max: MAX_COMMENT_LENGTH,
            });
        }
        if self.username.is_empty() {
            return Err(ValidationError::MissingUsername);
        }
        if self.content.is_empty() {
            return Err(ValidationError::MissingContent);
        }
        Ok(())
    }
}
