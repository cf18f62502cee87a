//! UI layer for desktop GUI: app shell and the form/list panels.

pub mod app;
pub mod panels;

pub use app::CommentWallApp;
