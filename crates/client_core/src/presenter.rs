//! Per-comment rendering decisions: truncation, expansion and timestamps.

use std::{collections::HashSet, fmt::Display};

use chrono::{Local, TimeZone};
use shared::domain::{Comment, CommentId};

pub const MAX_DISPLAY_LENGTH: usize = 150;
pub const TRUNCATION_MARKER: &str = "...";
const TIMESTAMP_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleControl {
    ViewMore,
    ViewLess,
}

impl ToggleControl {
    pub fn label(self) -> &'static str {
        match self {
            Self::ViewMore => "View More",
            Self::ViewLess => "View Less",
        }
    }
}

/// What a front-end draws for one comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentView {
    pub id: CommentId,
    pub username: String,
    pub created_at: String,
    /// Body text, already truncated and marked when collapsed.
    pub body: String,
    /// `None` for bodies short enough to never need one.
    pub toggle: Option<ToggleControl>,
}

impl CommentView {
    pub fn is_collapsed(&self) -> bool {
        self.toggle == Some(ToggleControl::ViewMore)
    }
}

pub fn render_comment(comment: &Comment, expanded: bool) -> CommentView {
    render_comment_in(comment, expanded, &Local)
}

pub fn render_comment_in<Tz>(comment: &Comment, expanded: bool, tz: &Tz) -> CommentView
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let (body, toggle) = match truncated_prefix(&comment.content, MAX_DISPLAY_LENGTH) {
        None => (comment.content.clone(), None),
        Some(_) if expanded => (comment.content.clone(), Some(ToggleControl::ViewLess)),
        Some(prefix) => (
            format!("{prefix}{TRUNCATION_MARKER}"),
            Some(ToggleControl::ViewMore),
        ),
    };

    CommentView {
        id: comment.id,
        username: comment.username.clone(),
        created_at: format_created_at(comment, tz),
        body,
        toggle,
    }
}

pub fn format_created_at<Tz>(comment: &Comment, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    match comment.created_at_utc() {
        Some(ts) => ts.with_timezone(tz).format(TIMESTAMP_FORMAT).to_string(),
        None => comment.created_at.clone(),
    }
}

/// First `max_chars` characters of `text`, or `None` if it already fits.
fn truncated_prefix(text: &str, max_chars: usize) -> Option<&str> {
    text.char_indices()
        .nth(max_chars)
        .map(|(byte_idx, _)| &text[..byte_idx])
}

/// Expansion flags for the comment list, keyed by comment id so they follow
/// a comment across reloads.
#[derive(Debug, Default)]
pub struct CommentList {
    expanded: HashSet<CommentId>,
}

impl CommentList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_expanded(&self, id: CommentId) -> bool {
        self.expanded.contains(&id)
    }

    /// Flips one comment's flag and returns the new value.
    pub fn toggle(&mut self, id: CommentId) -> bool {
        if self.expanded.remove(&id) {
            false
        } else {
            self.expanded.insert(id);
            true
        }
    }

    /// Drops flags for comments no longer present.
    pub fn retain_present(&mut self, comments: &[Comment]) {
        let present: HashSet<CommentId> = comments.iter().map(|c| c.id).collect();
        self.expanded.retain(|id| present.contains(id));
    }

    pub fn render(&self, comments: &[Comment]) -> Vec<CommentView> {
        comments
            .iter()
            .map(|comment| render_comment(comment, self.is_expanded(comment.id)))
            .collect()
    }
}
