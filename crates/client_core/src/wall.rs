//! Page-level controller: the comment collection plus the form and list
//! state that front-ends render.

use shared::{
    domain::{Comment, CommentId},
    protocol::NewComment,
};
use tracing::{error, info};

use crate::{
    error::ClientError,
    form::CommentForm,
    presenter::{CommentList, CommentView},
    store::{CommentStore, LIST_FAILED_MESSAGE},
};

/// Owned by a single thread. The collection changes only when a load or a
/// submission completes successfully, and then only by replacement (load) or
/// by appending (submission).
#[derive(Debug, Default)]
pub struct CommentWall {
    comments: Vec<Comment>,
    pub form: CommentForm,
    pub list: CommentList,
    loading: bool,
    load_error: Option<String>,
}

impl CommentWall {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Set when the last list fetch failed. Distinct from an empty wall.
    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    pub fn can_submit(&self) -> bool {
        !self.form.is_submitting()
    }

    pub fn views(&self) -> Vec<CommentView> {
        self.list.render(&self.comments)
    }

    pub fn toggle_expanded(&mut self, id: CommentId) -> bool {
        self.list.toggle(id)
    }

    /// Returns `false` if a fetch is already outstanding.
    pub fn begin_load(&mut self) -> bool {
        if self.loading {
            return false;
        }
        self.loading = true;
        true
    }

    /// A failed fetch keeps whatever was already shown.
    pub fn finish_load(&mut self, result: Result<Vec<Comment>, ClientError>) {
        self.loading = false;
        match result {
            Ok(comments) => {
                info!(count = comments.len(), "comment wall loaded");
                self.comments = comments;
                self.list.retain_present(&self.comments);
                self.load_error = None;
            }
            Err(err) => {
                error!("failed to load comments: {err}");
                self.load_error = Some(load_failure_message(&err));
            }
        }
    }

    pub fn begin_submit(&mut self) -> Option<NewComment> {
        self.form.begin_submit()
    }

    /// Appends the stored comment on success and returns its id.
    pub fn finish_submit(&mut self, result: Result<Comment, ClientError>) -> Option<CommentId> {
        let comment = self.form.finish_submit(result)?;
        let id = comment.id;
        self.comments.push(comment);
        info!(comment_id = id.0, total = self.comments.len(), "comment appended");
        Some(id)
    }

    pub async fn load(&mut self, store: &dyn CommentStore) {
        if !self.begin_load() {
            return;
        }
        let result = store.list_comments().await;
        self.finish_load(result);
    }

    pub async fn submit(&mut self, store: &dyn CommentStore) -> Option<CommentId> {
        let draft = self.begin_submit()?;
        let result = store.create_comment(&draft).await;
        self.finish_submit(result)
    }
}

fn load_failure_message(err: &ClientError) -> String {
    match err {
        ClientError::Api { message, .. } if message != LIST_FAILED_MESSAGE => {
            format!("{LIST_FAILED_MESSAGE}: {message}")
        }
        _ => LIST_FAILED_MESSAGE.to_string(),
    }
}

#[cfg(test)]
#[path = "tests/wall_tests.rs"]
mod tests;
