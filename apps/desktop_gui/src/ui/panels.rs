//! Form and list panels. Both only read state and report what the user did;
//! the app applies the resulting actions.

use client_core::{CommentForm, CommentId, CommentView, MAX_COMMENT_LENGTH};
use eframe::egui;

const ERROR_COLOR: egui::Color32 = egui::Color32::from_rgb(220, 60, 60);

pub enum ListAction {
    Toggle(CommentId),
    Reload,
}

/// Draws the draft form. Returns `true` when the user asked to submit.
pub fn comment_form(ui: &mut egui::Ui, form: &mut CommentForm, can_submit: bool) -> bool {
    ui.heading("Leave a comment");
    ui.add_space(6.0);

    ui.label("Username");
    ui.add(
        egui::TextEdit::singleline(&mut form.username)
            .hint_text("Your name")
            .desired_width(f32::INFINITY),
    );

    ui.add_space(4.0);
    ui.label("Comment");
    ui.add(
        egui::TextEdit::multiline(&mut form.content)
            .hint_text("Your Comment")
            .desired_rows(4)
            .desired_width(f32::INFINITY),
    );
    ui.small(format!(
        "{}/{MAX_COMMENT_LENGTH} characters",
        form.content_len()
    ));

    if let Some(err) = form.error() {
        ui.colored_label(ERROR_COLOR, err);
    }

    ui.add_space(4.0);
    ui.vertical_centered(|ui| {
        ui.add_enabled(can_submit, egui::Button::new(form.submit_label()))
            .clicked()
    })
    .inner
}

pub fn comment_list(
    ui: &mut egui::Ui,
    views: &[CommentView],
    loading: bool,
    load_error: Option<&str>,
) -> Option<ListAction> {
    let mut action = None;

    ui.heading("Comments");
    ui.add_space(6.0);

    if let Some(err) = load_error {
        ui.horizontal(|ui| {
            ui.colored_label(ERROR_COLOR, err);
            if ui.add_enabled(!loading, egui::Button::new("Reload")).clicked() {
                action = Some(ListAction::Reload);
            }
        });
    }

    if views.is_empty() {
        if loading {
            ui.spinner();
        } else if load_error.is_none() {
            ui.weak("No comments yet.");
        }
    }

    for view in views {
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.strong(view.username.as_str());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.weak(view.created_at.as_str());
                });
            });
            ui.label(view.body.as_str());
            if let Some(toggle) = view.toggle {
                if ui.link(toggle.label()).clicked() {
                    action = Some(ListAction::Toggle(view.id));
                }
            }
        });
        ui.add_space(4.0);
    }

    action
}
