mod commands;
mod summary;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use pinmap_core::config::PinmapConfig;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "pinmap", about = "Board artwork pin mapping and scaling tool")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Settings file (TOML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scale one image and its pin JSON by a fixed ratio
    Scale(commands::scale::ScaleArgs),
    /// Scale every device in a folder to its catalog size
    AutoScale(commands::auto_scale::AutoScaleArgs),
    /// List devices that have both an image and a JSON file
    List(commands::list::ListArgs),
    /// Print the package tree of a component folder as JSON
    Tree(commands::tree::TreeArgs),
    /// Generate the sensor index for a folder of scaled devices
    Bible(commands::bible::BibleArgs),
    /// Show the component dimension catalog
    Catalog(commands::catalog::CatalogArgs),
    /// Print or save the default settings as TOML
    Config(commands::config::ConfigArgs),
    /// Show image and pin file details
    Info(commands::info::InfoArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = match cli.config {
        Some(ref path) => PinmapConfig::load(path)
            .with_context(|| format!("Failed to load settings from {}", path.display()))?,
        None => PinmapConfig::default(),
    };

    match &cli.command {
        Commands::Scale(args) => commands::scale::run(args),
        Commands::AutoScale(args) => commands::auto_scale::run(args, &config),
        Commands::List(args) => commands::list::run(args),
        Commands::Tree(args) => commands::tree::run(args),
        Commands::Bible(args) => commands::bible::run(args),
        Commands::Catalog(args) => commands::catalog::run(args, &config),
        Commands::Config(args) => commands::config::run(args),
        Commands::Info(args) => commands::info::run(args),
    }
}
