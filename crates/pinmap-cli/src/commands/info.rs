use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use image::ImageFormat;
use pinmap_core::batch::grid_overlay;
use pinmap_core::io::{load_unchanged, read_json};
use serde_json::Value;

#[derive(Args)]
pub struct InfoArgs {
    /// Input image
    pub file: PathBuf,

    /// Pin or device JSON (defaults to the image path with a .json extension)
    #[arg(long)]
    pub json: Option<PathBuf>,

    /// Write a preview with an N x N reference grid
    #[arg(long, value_name = "N")]
    pub grid: Option<u32>,

    /// Grid preview path (defaults to <stem>_grid.png next to the image)
    #[arg(long, requires = "grid")]
    pub grid_output: Option<PathBuf>,
}

fn grid_path(file: &Path) -> PathBuf {
    let stem = file
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    file.with_file_name(format!("{stem}_grid.png"))
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let image = load_unchanged(&args.file)
        .with_context(|| format!("Failed to open {}", args.file.display()))?;

    println!("File:        {}", args.file.display());
    println!("Dimensions:  {}x{}", image.width(), image.height());
    println!("Color type:  {:?}", image.color());
    println!("Has alpha:   {}", image.color().has_alpha());

    if let Some(divisions) = args.grid {
        let out = args.grid_output.clone().unwrap_or_else(|| grid_path(&args.file));
        let preview = grid_overlay(&image, divisions)?;
        preview
            .save_with_format(&out, ImageFormat::Png)
            .with_context(|| format!("Failed to write {}", out.display()))?;
        println!("Grid:        {divisions}x{divisions} -> {}", out.display());
    }

    let json_path = args
        .json
        .clone()
        .unwrap_or_else(|| args.file.with_extension("json"));
    if !json_path.exists() {
        return Ok(());
    }

    let doc: Value = read_json(&json_path)
        .with_context(|| format!("Failed to parse {}", json_path.display()))?;
    println!("JSON:        {}", json_path.display());

    if let Some(name) = doc.get("name").and_then(Value::as_str) {
        println!("Name:        {}", name);
    }
    if let Some(kind) = doc.get("type").and_then(Value::as_str) {
        println!("Type:        {}", kind);
    }
    if let Some(reloc) = doc
        .get("digital-pins")
        .and_then(|dp| dp.get("reloc"))
        .and_then(Value::as_array)
    {
        println!("Linked pins: {}", reloc.len());
    }
    if let Some(pins) = doc.get("pins").and_then(Value::as_array) {
        println!("Pins:        {}", pins.len());
    }

    Ok(())
}
