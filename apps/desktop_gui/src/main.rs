mod backend_bridge;
mod controller;
mod ui;

use anyhow::{anyhow, Result};
use clap::Parser;
use client_core::{load_settings, Settings};
use crossbeam_channel::bounded;
use eframe::egui;
use tracing_subscriber::EnvFilter;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::ui::CommentWallApp;

#[derive(Parser, Debug)]
struct Args {
    /// Overrides `api_url` from comment_wall.toml / APP__API_URL / API_URL.
    #[arg(long)]
    api_url: Option<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();
    let args = Args::parse();

    let settings = match &args.api_url {
        Some(url) => Settings::with_api_url(url)?,
        None => load_settings()?,
    };
    tracing::info!(api_url = %settings.api_url, "starting comment wall");

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(64);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(256);
    let api_url = settings.api_url.clone();
    backend_bridge::runtime::launch(settings, cmd_rx, ui_tx);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Comment Wall")
            .with_inner_size([720.0, 820.0])
            .with_min_inner_size([420.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Comment Wall",
        options,
        Box::new(move |_cc| Ok(Box::new(CommentWallApp::new(cmd_tx, ui_rx, api_url)))),
    )
    .map_err(|err| anyhow!("desktop window failed: {err}"))
}
