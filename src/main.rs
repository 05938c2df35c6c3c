#![allow(non_snake_case)]

mod app;
mod components;
mod context;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use storyboard_core::{SensorConfig, UploadConfig};

use crate::context::UploaderConfig;

/// Global widget configuration, set from command line
static CONFIG: OnceLock<UploaderConfig> = OnceLock::new();

/// Global startup files, set from command line
static PRELOAD: OnceLock<Vec<PathBuf>> = OnceLock::new();

/// Get the widget configuration (set from command line or default)
pub fn get_config() -> UploaderConfig {
    CONFIG.get().cloned().unwrap_or_default()
}

/// Files to load into the board on startup
pub fn get_preload() -> Vec<PathBuf> {
    PRELOAD.get().cloned().unwrap_or_default()
}

/// Storyboard - image upload and ordering for story pages
#[derive(Parser, Debug)]
#[command(name = "storyboard-desktop")]
#[command(about = "Storyboard - pick, preview, and order story images")]
struct Args {
    /// Images to load on startup (same path as the upload button)
    #[arg(short, long, num_args = 1..)]
    open: Vec<PathBuf>,

    /// Thumbnail edge length in pixels
    #[arg(long, default_value_t = 128)]
    thumb_size: u32,

    /// Pixels the pointer must move before a press becomes a drag
    #[arg(long, default_value_t = 0.0)]
    drag_distance: f64,

    /// Largest accepted file in bytes (0 for no limit)
    #[arg(long)]
    max_bytes: Option<u64>,

    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}

fn main() {
    let args = Args::parse();
    setup_logging(args.verbose);

    let upload = match args.max_bytes {
        Some(0) => UploadConfig::default().unlimited(),
        Some(limit) => UploadConfig::default().with_max_bytes(limit),
        None => UploadConfig::default(),
    };

    let config = UploaderConfig {
        upload,
        sensors: SensorConfig::default().with_activation_distance(args.drag_distance),
        thumb_size: args.thumb_size.max(16),
        ..UploaderConfig::default()
    };

    tracing::info!(
        "Starting storyboard (thumb {}px, drag distance {}px, {} preload file(s))",
        config.thumb_size,
        config.sensors.pointer.activation_distance,
        args.open.len()
    );

    let _ = CONFIG.set(config);
    let _ = PRELOAD.set(args.open);

    // Configure desktop window
    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Storyboard")
            .with_inner_size(dioxus::desktop::LogicalSize::new(900.0, 700.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
