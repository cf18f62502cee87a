//! Backend worker: owns a tokio runtime and the comment store, turns queued
//! commands into requests and reports results back as `UiEvent`s.

use std::thread;

use client_core::{CommentStore, HttpCommentStore, Settings};
use crossbeam_channel::{Receiver, Sender};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;

pub fn launch(settings: Settings, cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>) {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                tracing::error!("failed to build backend runtime: {err}");
                let _ = ui_tx.try_send(UiEvent::BackendUnavailable(format!(
                    "backend worker startup failure: {err}"
                )));
                return;
            }
        };

        runtime.block_on(async move {
            let store = HttpCommentStore::new(&settings);
            tracing::info!(url = %store.comments_url(), "backend worker ready");

            while let Ok(cmd) = cmd_rx.recv() {
                let store = store.clone();
                let ui_tx = ui_tx.clone();
                tokio::spawn(async move {
                    let event = match cmd {
                        BackendCommand::LoadComments => {
                            UiEvent::CommentsLoaded(store.list_comments().await)
                        }
                        BackendCommand::CreateComment { draft } => {
                            UiEvent::CommentCreated(store.create_comment(&draft).await)
                        }
                    };
                    // Results must not be dropped: the wall would stay in its
                    // in-flight state forever.
                    if ui_tx.send(event).is_err() {
                        tracing::debug!("ui closed before backend result was delivered");
                    }
                });
            }
            tracing::info!("command queue closed; backend worker exiting");
        });
    });
}
