//! Applies backend events to the wall.

use client_core::{ClientError, CommentWall};

use crate::controller::events::UiEvent;

pub fn apply(wall: &mut CommentWall, status: &mut String, event: UiEvent) {
    match event {
        UiEvent::CommentsLoaded(result) => {
            wall.finish_load(result);
            *status = match wall.load_error() {
                Some(err) => err.to_string(),
                None => format!("{} comments", wall.comments().len()),
            };
        }
        UiEvent::CommentCreated(result) => {
            *status = match wall.finish_submit(result) {
                Some(id) => format!("Comment #{} posted", id.0),
                None => "Comment was not posted".to_string(),
            };
        }
        UiEvent::BackendUnavailable(reason) => {
            // Nothing queued will be answered, so settle whatever is in flight.
            if wall.is_loading() {
                wall.finish_load(Err(ClientError::Transport(reason.clone())));
            }
            if wall.form.is_submitting() {
                wall.finish_submit(Err(ClientError::Transport(reason.clone())));
            }
            *status = reason;
        }
    }
}
