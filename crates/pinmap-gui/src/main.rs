mod app;
mod convert;
mod panels;
mod states;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use pinmap_core::config::PinmapConfig;

use crate::states::EditorKind;

#[derive(Parser)]
#[command(name = "pinmap-gui", about = "Pin mapper and background eraser")]
#[command(version)]
struct Args {
    /// Image to open on start
    image: Option<PathBuf>,

    /// Settings file (TOML)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Start in the background eraser instead of the pin mapper
    #[arg(long)]
    eraser: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();
    let config = match args.config {
        Some(ref path) => PinmapConfig::load(path)
            .with_context(|| format!("Failed to load settings from {}", path.display()))?,
        None => PinmapConfig::default(),
    };
    let editor = if args.eraser {
        EditorKind::Eraser
    } else {
        EditorKind::PinMapper
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Pinmap"),
        ..Default::default()
    };

    eframe::run_native(
        "Pinmap",
        options,
        Box::new(move |_cc| {
            let mut app = app::PinmapApp::new(config, editor);
            if let Some(ref path) = args.image {
                app.open_image(path);
            }
            Ok(Box::new(app))
        }),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))
}
