//! Access to the external comment backend.

use async_trait::async_trait;
use reqwest::{header::ACCEPT, Client, StatusCode};
use serde::de::DeserializeOwned;
use shared::{domain::Comment, error::ErrorBody, protocol::NewComment};
use tracing::{debug, error, info, warn};

use crate::{config::Settings, error::ClientError};

pub const COMMENTS_PATH: &str = "/api/comments";
pub const LIST_FAILED_MESSAGE: &str = "Failed to load comments";
pub const CREATE_FAILED_MESSAGE: &str = "Failed to add comment";

#[async_trait]
pub trait CommentStore: Send + Sync {
    /// Fetches every comment, oldest first as the backend orders them.
    async fn list_comments(&self) -> Result<Vec<Comment>, ClientError>;

    /// Persists a draft and returns the stored comment with its backend
    /// assigned `id` and `created_at`.
    async fn create_comment(&self, draft: &NewComment) -> Result<Comment, ClientError>;
}

/// `CommentStore` over the REST contract. Each call is a single request; no
/// retries and no caching.
#[derive(Debug, Clone)]
pub struct HttpCommentStore {
    http: Client,
    comments_url: String,
}

impl HttpCommentStore {
    pub fn new(settings: &Settings) -> Self {
        Self::with_client(Client::new(), settings)
    }

    pub fn with_client(http: Client, settings: &Settings) -> Self {
        Self {
            http,
            comments_url: format!(
                "{}{COMMENTS_PATH}",
                settings.api_url.trim_end_matches('/')
            ),
        }
    }

    pub fn comments_url(&self) -> &str {
        &self.comments_url
    }
}

#[async_trait]
impl CommentStore for HttpCommentStore {
    async fn list_comments(&self) -> Result<Vec<Comment>, ClientError> {
        debug!(url = %self.comments_url, "fetching comments");
        let response = self
            .http
            .get(&self.comments_url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(transport_failure)?;

        let status = response.status();
        let body = response.text().await.map_err(transport_failure)?;
        if status != StatusCode::OK {
            return Err(rejection(status, &body, LIST_FAILED_MESSAGE));
        }

        let comments: Vec<Comment> = decode(&body)?;
        info!(count = comments.len(), "fetched comments");
        Ok(comments)
    }

    async fn create_comment(&self, draft: &NewComment) -> Result<Comment, ClientError> {
        debug!(url = %self.comments_url, username = %draft.username, "creating comment");
        let response = self
            .http
            .post(&self.comments_url)
            .header(ACCEPT, "application/json")
            .json(draft)
            .send()
            .await
            .map_err(transport_failure)?;

        let status = response.status();
        let body = response.text().await.map_err(transport_failure)?;
        if !status.is_success() {
            return Err(rejection(status, &body, CREATE_FAILED_MESSAGE));
        }

        let comment: Comment = decode(&body)?;
        info!(comment_id = comment.id.0, "created comment");
        Ok(comment)
    }
}

fn transport_failure(err: reqwest::Error) -> ClientError {
    error!("comment backend request failed: {err}");
    ClientError::Network(err)
}

fn rejection(status: StatusCode, body: &str, fallback: &str) -> ClientError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|body| body.message().map(str::to_owned))
        .unwrap_or_else(|| fallback.to_string());
    warn!(status = status.as_u16(), %message, "comment backend rejected request");
    ClientError::Api {
        status: status.as_u16(),
        message,
    }
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ClientError> {
    serde_json::from_str(body).map_err(|err| {
        error!("undecodable comment backend response: {err}");
        ClientError::Decode(err.to_string())
    })
}

#[cfg(test)]
#[path = "tests/store_tests.rs"]
mod tests;
