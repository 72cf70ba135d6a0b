use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use pinmap_core::batch::discover_devices;

#[derive(Args)]
pub struct ListArgs {
    /// Folder to scan
    #[arg(default_value = "ref")]
    pub folder: PathBuf,
}

pub fn run(args: &ListArgs) -> Result<()> {
    let devices = discover_devices(&args.folder)
        .with_context(|| format!("Failed to read {}", args.folder.display()))?;

    for device in &devices {
        println!("{device}");
    }
    tracing::debug!("{} devices in {}", devices.len(), args.folder.display());
    Ok(())
}
