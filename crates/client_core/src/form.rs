//! Draft comment state and the submission state machine.

use shared::{domain::Comment, protocol::NewComment};
use tracing::{debug, warn};

use crate::error::ClientError;

pub const SUBMIT_LABEL: &str = "Submit Comment";
pub const SUBMITTING_LABEL: &str = "Submitting...";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormState {
    #[default]
    Editing,
    Submitting,
    Error(String),
}

/// The comment being composed. Front-ends bind their inputs directly to
/// `username` and `content`.
#[derive(Debug, Default)]
pub struct CommentForm {
    pub username: String,
    pub content: String,
    state: FormState,
    // Survives into `Submitting` so a resubmission doesn't blank the message
    // until the new attempt settles.
    visible_error: Option<String>,
}

impl CommentForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn is_submitting(&self) -> bool {
        self.state == FormState::Submitting
    }

    pub fn error(&self) -> Option<&str> {
        self.visible_error.as_deref()
    }

    pub fn content_len(&self) -> usize {
        self.content.chars().count()
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_submitting() {
            SUBMITTING_LABEL
        } else {
            SUBMIT_LABEL
        }
    }

    pub fn draft(&self) -> NewComment {
        NewComment::new(self.username.clone(), self.content.clone())
    }

    /// Validates the draft and moves to `Submitting`. Returns the payload to
    /// send, or `None` when no request must be made: either a submission is
    /// already in flight or validation failed (the form is then in `Error`).
    pub fn begin_submit(&mut self) -> Option<NewComment> {
        if self.is_submitting() {
            debug!("submit ignored while a submission is in flight");
            return None;
        }

        let draft = self.draft();
        if let Err(err) = draft.validate() {
            debug!("draft rejected locally: {err}");
            self.fail(err.to_string());
            return None;
        }

        self.state = FormState::Submitting;
        Some(draft)
    }

    /// Settles the in-flight submission. On success the draft is cleared and
    /// the stored comment is returned; on failure the draft is kept.
    pub fn finish_submit(&mut self, result: Result<Comment, ClientError>) -> Option<Comment> {
        if !self.is_submitting() {
            warn!("submission result arrived with no submission in flight");
            return None;
        }

        match result {
            Ok(comment) => {
                self.username.clear();
                self.content.clear();
                self.state = FormState::Editing;
                self.visible_error = None;
                Some(comment)
            }
            Err(err) => {
                self.fail(err.user_message());
                None
            }
        }
    }

    fn fail(&mut self, message: String) {
        self.visible_error = Some(message.clone());
        self.state = FormState::Error(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{domain::CommentId, protocol::MAX_COMMENT_LENGTH};

    fn filled(username: &str, content: &str) -> CommentForm {
        let mut form = CommentForm::new();
        form.username = username.to_string();
        form.content = content.to_string();
        form
    }

    fn stored(content: &str) -> Comment {
        Comment {
            id: CommentId(1),
            username: "alice".to_string(),
            content: content.to_string(),
            created_at: "2024-01-01T00:00:00Z".to_string(),
        }
    }

    #[test]
    fn starts_editing_with_empty_draft() {
        let form = CommentForm::new();
        assert_eq!(form.state(), &FormState::Editing);
        assert!(form.username.is_empty());
        assert!(form.content.is_empty());
        assert_eq!(form.submit_label(), SUBMIT_LABEL);
    }

    #[test]
    fn oversized_content_goes_straight_to_error() {
        let mut form = filled("alice", &"x".repeat(MAX_COMMENT_LENGTH + 1));

        assert!(form.begin_submit().is_none());
        assert_eq!(
            form.state(),
            &FormState::Error("Comment exceeds maximum length of 2000 characters".to_string())
        );
        assert_eq!(form.content_len(), MAX_COMMENT_LENGTH + 1);
    }

    #[test]
    fn second_submit_while_in_flight_is_a_no_op() {
        let mut form = filled("alice", "hi");

        assert_eq!(form.begin_submit(), Some(NewComment::new("alice", "hi")));
        assert!(form.is_submitting());
        assert_eq!(form.submit_label(), SUBMITTING_LABEL);
        assert!(form.begin_submit().is_none());
        assert!(form.is_submitting());
    }

    #[test]
    fn success_resets_draft_and_returns_comment() {
        let mut form = filled("alice", "hi");
        form.begin_submit().expect("payload");

        let comment = form.finish_submit(Ok(stored("hi"))).expect("comment");

        assert_eq!(comment.content, "hi");
        assert_eq!(form.state(), &FormState::Editing);
        assert!(form.username.is_empty());
        assert!(form.content.is_empty());
        assert!(form.error().is_none());
    }

    #[test]
    fn failure_keeps_draft_and_shows_message() {
        let mut form = filled("alice", "hi");
        form.begin_submit().expect("payload");

        let result = form.finish_submit(Err(ClientError::Api {
            status: 400,
            message: "username required".to_string(),
        }));

        assert!(result.is_none());
        assert_eq!(form.error(), Some("username required"));
        assert_eq!(form.username, "alice");
        assert_eq!(form.content, "hi");
    }

    #[test]
    fn resubmit_keeps_old_error_until_settled() {
        let mut form = filled("alice", "hi");
        form.begin_submit().expect("payload");
        form.finish_submit(Err(ClientError::Decode("bad".to_string())));

        form.begin_submit().expect("resubmit payload");
        assert!(form.is_submitting());
        assert!(form.error().is_some());

        form.finish_submit(Ok(stored("hi")));
        assert!(form.error().is_none());
    }

    #[test]
    fn failed_resubmit_replaces_old_error() {
        let mut form = filled("alice", "hi");
        form.begin_submit().expect("payload");
        form.finish_submit(Err(ClientError::Decode("bad".to_string())));
        assert_eq!(form.error(), Some(crate::error::UNEXPECTED_ERROR_MESSAGE));

        form.begin_submit().expect("resubmit payload");
        assert_eq!(form.error(), Some(crate::error::UNEXPECTED_ERROR_MESSAGE));

        form.finish_submit(Err(ClientError::Api {
            status: 400,
            message: "username required".to_string(),
        }));
        assert_eq!(
            form.state(),
            &FormState::Error("username required".to_string())
        );
        assert_eq!(form.error(), Some("username required"));
        assert_eq!(form.content, "hi");
    }

    #[test]
    fn stray_result_is_ignored() {
        let mut form = filled("alice", "hi");
        assert!(form.finish_submit(Ok(stored("hi"))).is_none());
        assert_eq!(form.content, "hi");
        assert_eq!(form.state(), &FormState::Editing);
    }
}
