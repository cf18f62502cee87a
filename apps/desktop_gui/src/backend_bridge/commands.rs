//! Backend commands queued from UI to backend worker.

use client_core::NewComment;

#[derive(Debug)]
pub enum BackendCommand {
    LoadComments,
    CreateComment { draft: NewComment },
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            Self::LoadComments => "load_comments",
            Self::CreateComment { .. } => "create_comment",
        }
    }
}
