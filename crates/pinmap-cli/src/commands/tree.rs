use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use pinmap_core::batch::build_component_tree;

#[derive(Args)]
pub struct TreeArgs {
    /// Component root folder
    #[arg(default_value = "components")]
    pub root: PathBuf,

    /// Write the tree to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn run(args: &TreeArgs) -> Result<()> {
    let tree = build_component_tree(&args.root)
        .with_context(|| format!("Failed to walk {}", args.root.display()))?;
    let json = serde_json::to_string_pretty(&tree)?;

    if let Some(ref path) = args.output {
        std::fs::write(path, &json)
            .with_context(|| format!("Failed to write tree to {}", path.display()))?;
        println!("Tree saved to {}", path.display());
    } else {
        println!("{json}");
    }

    Ok(())
}
