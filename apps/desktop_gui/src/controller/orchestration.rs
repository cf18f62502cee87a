//! Command orchestration helpers from UI actions to backend command queue.

use client_core::{ClientError, CommentWall};
use crossbeam_channel::{Sender, TrySendError};

use crate::backend_bridge::commands::BackendCommand;

/// Queues `cmd`, returning why it could not be queued.
pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
) -> Result<(), String> {
    let cmd_name = cmd.name();

    match cmd_tx.try_send(cmd) {
        Ok(()) => {
            tracing::debug!(command = cmd_name, "queued ui->backend command");
            Ok(())
        }
        Err(TrySendError::Full(_)) => Err("UI command queue is full; please retry".to_string()),
        Err(TrySendError::Disconnected(_)) => Err(
            "Backend command processor disconnected (possible startup/runtime failure)".to_string(),
        ),
    }
}

/// Starts a list fetch unless one is already outstanding.
pub fn request_load(
    wall: &mut CommentWall,
    cmd_tx: &Sender<BackendCommand>,
    status: &mut String,
) {
    if !wall.begin_load() {
        return;
    }
    *status = "Loading comments...".to_string();
    if let Err(reason) = dispatch_backend_command(cmd_tx, BackendCommand::LoadComments) {
        *status = reason.clone();
        wall.finish_load(Err(ClientError::Transport(reason)));
    }
}

/// Validates and queues the current draft. Validation failures and duplicate
/// submits never reach the queue.
pub fn request_submit(
    wall: &mut CommentWall,
    cmd_tx: &Sender<BackendCommand>,
    status: &mut String,
) {
    let Some(draft) = wall.begin_submit() else {
        return;
    };
    *status = "Submitting comment...".to_string();
    let cmd = BackendCommand::CreateComment { draft };
    if let Err(reason) = dispatch_backend_command(cmd_tx, cmd) {
        *status = reason.clone();
        wall.finish_submit(Err(ClientError::Transport(reason)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::bounded;

    #[test]
    fn invalid_draft_is_not_queued() {
        let (cmd_tx, cmd_rx) = bounded(4);
        let mut wall = CommentWall::new();
        let mut status = String::new();
        wall.form.username = "alice".to_string();
        wall.form.content = "x".repeat(2001);

        request_submit(&mut wall, &cmd_tx, &mut status);

        assert!(cmd_rx.try_recv().is_err());
        assert_eq!(
            wall.form.error(),
            Some("Comment exceeds maximum length of 2000 characters")
        );
    }

    #[test]
    fn valid_draft_is_queued_once() {
        let (cmd_tx, cmd_rx) = bounded(4);
        let mut wall = CommentWall::new();
        let mut status = String::new();
        wall.form.username = "alice".to_string();
        wall.form.content = "hi".to_string();

        request_submit(&mut wall, &cmd_tx, &mut status);
        request_submit(&mut wall, &cmd_tx, &mut status);

        match cmd_rx.try_recv() {
            Ok(BackendCommand::CreateComment { draft }) => {
                assert_eq!(draft.username, "alice");
                assert_eq!(draft.content, "hi");
            }
            other => panic!("unexpected command: {other:?}"),
        }
        assert!(cmd_rx.try_recv().is_err());
    }

    #[test]
    fn disconnected_worker_fails_the_submission() {
        let (cmd_tx, cmd_rx) = bounded(4);
        drop(cmd_rx);
        let mut wall = CommentWall::new();
        let mut status = String::new();
        wall.form.username = "alice".to_string();
        wall.form.content = "hi".to_string();

        request_submit(&mut wall, &cmd_tx, &mut status);

        assert!(!wall.form.is_submitting());
        assert_eq!(wall.form.error(), Some("An unexpected error occurred."));
        assert_eq!(wall.form.content, "hi");
        assert!(status.contains("disconnected"));
    }

    #[test]
    fn load_is_not_queued_twice() {
        let (cmd_tx, cmd_rx) = bounded(4);
        let mut wall = CommentWall::new();
        let mut status = String::new();

        request_load(&mut wall, &cmd_tx, &mut status);
        request_load(&mut wall, &cmd_tx, &mut status);

        assert!(matches!(cmd_rx.try_recv(), Ok(BackendCommand::LoadComments)));
        assert!(cmd_rx.try_recv().is_err());
    }
}
