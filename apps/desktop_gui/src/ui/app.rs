use std::time::Duration;

use client_core::CommentWall;
use crossbeam_channel::{Receiver, Sender};
use eframe::egui;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::{events::UiEvent, orchestration, reducer};
use crate::ui::panels::{self, ListAction};

pub struct CommentWallApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    wall: CommentWall,
    api_url: String,
    status: String,
}

impl CommentWallApp {
    /// Creating the app performs the initial list fetch.
    pub fn new(cmd_tx: Sender<BackendCommand>, ui_rx: Receiver<UiEvent>, api_url: String) -> Self {
        let mut app = Self {
            cmd_tx,
            ui_rx,
            wall: CommentWall::new(),
            api_url,
            status: String::new(),
        };
        orchestration::request_load(&mut app.wall, &app.cmd_tx, &mut app.status);
        app
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            reducer::apply(&mut self.wall, &mut self.status, event);
        }
    }
}

impl eframe::App for CommentWallApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.weak(self.api_url.as_str());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.small(self.status.as_str());
                });
            });
            ui.separator();

            egui::ScrollArea::vertical().show(ui, |ui| {
                let can_submit = self.wall.can_submit();
                if panels::comment_form(ui, &mut self.wall.form, can_submit) {
                    orchestration::request_submit(&mut self.wall, &self.cmd_tx, &mut self.status);
                }

                ui.add_space(12.0);
                ui.separator();

                let views = self.wall.views();
                let action = panels::comment_list(
                    ui,
                    &views,
                    self.wall.is_loading(),
                    self.wall.load_error(),
                );
                match action {
                    Some(ListAction::Toggle(id)) => {
                        self.wall.toggle_expanded(id);
                    }
                    Some(ListAction::Reload) => {
                        orchestration::request_load(&mut self.wall, &self.cmd_tx, &mut self.status);
                    }
                    None => {}
                }
            });
        });

        let busy = self.wall.is_loading() || !self.wall.can_submit();
        ctx.request_repaint_after(Duration::from_millis(if busy { 50 } else { 250 }));
    }
}
