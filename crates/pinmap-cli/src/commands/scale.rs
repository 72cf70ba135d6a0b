use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use pinmap_core::batch::scale_pair;

use crate::summary::print_scale_report;

#[derive(Args)]
pub struct ScaleArgs {
    /// Input image
    pub image: PathBuf,

    /// Pin or device JSON belonging to the image
    pub json: PathBuf,

    /// Scale ratio (e.g. 0.5 halves both sides)
    #[arg(short, long)]
    pub ratio: f64,

    /// Output image path
    #[arg(long, default_value = "output.png")]
    pub output_image: PathBuf,

    /// Output JSON path
    #[arg(long, default_value = "updated_coordinates.json")]
    pub output_json: PathBuf,
}

pub fn run(args: &ScaleArgs) -> Result<()> {
    let report = scale_pair(
        &args.image,
        &args.json,
        args.ratio,
        &args.output_image,
        &args.output_json,
    )
    .with_context(|| format!("Failed to scale {}", args.image.display()))?;

    print_scale_report(&report);
    Ok(())
}
