//! memekit CLI - trim watermark strips off meme images and index the meme folder.
//!
//! # Usage
//!
//! ```bash
//! # Crop the bottom 5% of every image and convert to WebP (into ./output)
//! memekit crop
//!
//! # Regenerate public/meme-manifest.json from public/meme-base
//! memekit manifest
//!
//! # Show the effective configuration
//! memekit config show
//! ```

use clap::{Parser, Subcommand};

mod cli;
mod logging;

/// memekit - meme folder tooling: bottom-crop conversion and manifest generation.
#[derive(Parser, Debug)]
#[command(name = "memekit")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output logs in JSON format
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Crop the bottom strip off each image and re-encode it
    Crop(cli::crop::CropArgs),

    /// Generate the JSON manifest of the meme folder
    Manifest(cli::manifest::ManifestArgs),

    /// View configuration
    Config(cli::config::ConfigArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose, cli.json_logs);

    tracing::debug!("memekit v{}", memekit_core::VERSION);

    match cli.command {
        Commands::Crop(args) => cli::crop::execute(args),
        Commands::Manifest(args) => cli::manifest::execute(args),
        Commands::Config(args) => cli::config::execute(args),
    }
}
