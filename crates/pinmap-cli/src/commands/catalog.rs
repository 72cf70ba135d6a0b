use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use pinmap_core::catalog::Catalog;
use pinmap_core::config::PinmapConfig;

use crate::summary::print_catalog;

#[derive(Args)]
pub struct CatalogArgs {
    /// Only show components whose name contains this text (case-insensitive)
    pub filter: Option<String>,

    /// Extra catalog entries (TOML)
    #[arg(long)]
    pub catalog: Option<PathBuf>,
}

pub fn run(args: &CatalogArgs, config: &PinmapConfig) -> Result<()> {
    let catalog = match args.catalog.as_ref().or(config.scaling.catalog.as_ref()) {
        Some(path) => Catalog::builtin_with_overrides(path)
            .with_context(|| format!("Failed to load catalog {}", path.display()))?,
        None => Catalog::builtin(),
    };

    let needle = args.filter.as_deref().map(str::to_lowercase);
    let entries: Vec<_> = catalog
        .iter()
        .filter(|(name, _)| {
            needle
                .as_deref()
                .map_or(true, |n| name.to_lowercase().contains(n))
        })
        .collect();

    print_catalog(&entries, config.scaling.px_per_mm);
    Ok(())
}
