use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use pinmap_core::batch::{discover_devices, process_device};
use pinmap_core::catalog::Catalog;
use pinmap_core::config::PinmapConfig;

use crate::summary::print_auto_scale_summary;

#[derive(Args)]
pub struct AutoScaleArgs {
    /// Folder holding `<name>.png` / `<name>.json` pairs
    #[arg(default_value = "ref")]
    pub folder: PathBuf,

    /// Output resolution in pixels per millimetre
    #[arg(long)]
    pub px_per_mm: Option<f64>,

    /// Output folder
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Extra catalog entries (TOML)
    #[arg(long)]
    pub catalog: Option<PathBuf>,
}

pub fn run(args: &AutoScaleArgs, config: &PinmapConfig) -> Result<()> {
    let px_per_mm = args.px_per_mm.unwrap_or(config.scaling.px_per_mm);
    let output_dir = args
        .output
        .clone()
        .unwrap_or_else(|| config.scaling.output_dir.clone());
    let catalog = match args.catalog.as_ref().or(config.scaling.catalog.as_ref()) {
        Some(path) => Catalog::builtin_with_overrides(path)
            .with_context(|| format!("Failed to load catalog {}", path.display()))?,
        None => Catalog::builtin(),
    };

    let devices = discover_devices(&args.folder)
        .with_context(|| format!("Failed to read {}", args.folder.display()))?;
    if devices.is_empty() {
        println!("No devices found in {}", args.folder.display());
        return Ok(());
    }

    let pb = ProgressBar::new(devices.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{msg:24} [{bar:40}] {pos}/{len}")?
            .progress_chars("=> "),
    );

    let mut outcomes = Vec::with_capacity(devices.len());
    for device in &devices {
        pb.set_message(device.clone());
        let outcome = process_device(device, &args.folder, &catalog, px_per_mm, &output_dir)
            .with_context(|| format!("Failed to scale {device}"))?;
        outcomes.push(outcome);
        pb.inc(1);
    }
    pb.finish_with_message("Done");

    print_auto_scale_summary(&outcomes, px_per_mm, &output_dir);

    Ok(())
}
