use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use console::Style;
use pinmap_core::batch::generate_sensor_bible;
use pinmap_core::io::write_json;

#[derive(Args)]
pub struct BibleArgs {
    /// Folder of scaled devices
    #[arg(default_value = "dev-boards")]
    pub folder: PathBuf,

    /// Output file
    #[arg(short, long, default_value = "sensorBible.json")]
    pub output: PathBuf,
}

pub fn run(args: &BibleArgs) -> Result<()> {
    let bible = generate_sensor_bible(&args.folder)
        .with_context(|| format!("Failed to index {}", args.folder.display()))?;
    write_json(&args.output, &bible)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    println!(
        "Generated {} with {} components.",
        Style::new().underlined().apply_to(args.output.display()),
        Style::new().bold().apply_to(bible.components.len())
    );
    Ok(())
}
