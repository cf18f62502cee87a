//! Core of the comment wall: backend access, form and list state, and the
//! page-level controller that ties them together. Nothing in here renders;
//! front-ends read the state and feed user actions and I/O results back in.

pub mod config;
pub mod error;
pub mod form;
pub mod presenter;
pub mod store;
pub mod wall;

pub use crate::config::{load_settings, Settings};
pub use error::ClientError;
pub use form::{CommentForm, FormState};
pub use presenter::{CommentList, CommentView, ToggleControl};
pub use store::{CommentStore, HttpCommentStore};
pub use wall::CommentWall;

pub use shared::{
    domain::{Comment, CommentId},
    protocol::{NewComment, MAX_COMMENT_LENGTH},
};
