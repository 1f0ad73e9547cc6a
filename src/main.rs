#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod media;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use anyhow::{Context, Result};
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use greetingcard_core::CardDefinition;

/// Card shown by this instance, set from the command line
static CARD: OnceLock<CardDefinition> = OnceLock::new();

/// Get the card loaded at startup
pub fn get_card() -> Option<CardDefinition> {
    CARD.get().cloned()
}

/// Greeting Card - music and messages for someone special
#[derive(Parser, Debug)]
#[command(name = "greetingcard-desktop")]
#[command(about = "Greeting card with background music and message pop-ups")]
struct Args {
    /// Card definition (JSON). Uses the built-in card when omitted
    #[arg(short, long)]
    card: Option<PathBuf>,

    /// Directory that relative media paths in the card resolve against
    #[arg(short, long)]
    assets: Option<PathBuf>,

    /// Window title (defaults to the card's title)
    #[arg(short, long)]
    title: Option<String>,

    /// Window width in logical pixels
    #[arg(long, default_value_t = 900.0)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 860.0)]
    height: f64,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Log filter used when `RUST_LOG` is unset
fn log_filter(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "info",
        1 => "debug",
        _ => "trace",
    }
}

fn setup_logging(verbosity: u8) {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_filter(verbosity))),
        )
        .init();
}

fn load_card(path: Option<&PathBuf>) -> Result<CardDefinition> {
    match path {
        Some(path) => CardDefinition::load(path)
            .with_context(|| format!("Failed to load card from {}", path.display())),
        None => CardDefinition::builtin().context("Built-in card is invalid"),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    setup_logging(args.verbose);

    let card = load_card(args.card.as_ref())?;
    let title = args.title.clone().unwrap_or_else(|| card.title.clone());

    tracing::info!(
        title = %title,
        tracks = card.tracks.len(),
        messages = card.messages.len(),
        "Starting greeting card"
    );

    let _ = CARD.set(card);

    let mut config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
            .with_resizable(true),
    );
    if let Some(assets) = args.assets {
        config = config.with_resource_directory(assets);
    }

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);

    Ok(())
}
