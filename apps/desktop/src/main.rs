use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use client_core::{load_settings, CommentView, CommentWall, HttpCommentStore, Settings};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(about = "Read and post to the comment wall from a terminal")]
struct Args {
    /// Overrides `api_url` from comment_wall.toml / APP__API_URL / API_URL.
    #[arg(long, global = true)]
    api_url: Option<String>,
    /// Print comments as JSON instead of text.
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show every comment, collapsing long ones unless --expand is given.
    List {
        #[arg(long)]
        expand: bool,
    },
    /// Post a comment and print it as stored.
    Post {
        #[arg(long)]
        username: String,
        #[arg(long)]
        content: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();

    let settings = match &args.api_url {
        Some(url) => Settings::with_api_url(url)?,
        None => load_settings()?,
    };
    let store = HttpCommentStore::new(&settings);
    let mut wall = CommentWall::new();

    match args.command {
        Command::List { expand } => {
            wall.load(&store).await;
            if let Some(err) = wall.load_error() {
                bail!("{err}");
            }
            if expand {
                let ids: Vec<_> = wall.comments().iter().map(|c| c.id).collect();
                for id in ids {
                    wall.toggle_expanded(id);
                }
            }
            if args.json {
                println!("{}", serde_json::to_string_pretty(wall.comments())?);
            } else if wall.comments().is_empty() {
                println!("No comments yet.");
            } else {
                for view in wall.views() {
                    print_view(&view);
                }
            }
        }
        Command::Post { username, content } => {
            wall.form.username = username;
            wall.form.content = content;
            if wall.submit(&store).await.is_none() {
                bail!("{}", wall.form.error().unwrap_or("comment was not posted"));
            }
            let posted = wall.comments().last().cloned();
            if let Some(comment) = posted {
                if args.json {
                    println!("{}", serde_json::to_string_pretty(&comment)?);
                } else {
                    print_view(&client_core::presenter::render_comment(&comment, true));
                }
            }
        }
    }

    Ok(())
}

fn print_view(view: &CommentView) {
    println!("#{} {} ({})", view.id.0, view.username, view.created_at);
    println!("{}", view.body);
    if let Some(toggle) = view.toggle.filter(|_| view.is_collapsed()) {
        println!("  [{}: run with --expand]", toggle.label());
    }
    println!();
}
