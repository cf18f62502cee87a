//! Events delivered from the backend worker to the UI thread.

use client_core::{ClientError, Comment};

#[derive(Debug)]
pub enum UiEvent {
    CommentsLoaded(Result<Vec<Comment>, ClientError>),
    CommentCreated(Result<Comment, ClientError>),
    BackendUnavailable(String),
}
