//! The `memekit manifest` command: regenerate the meme manifest JSON.

use clap::Args;
use console::style;
use memekit_core::ManifestGenerator;
use std::path::PathBuf;

use super::RootArgs;

/// Arguments for the `manifest` command.
#[derive(Args, Debug, Default)]
pub struct ManifestArgs {
    #[command(flatten)]
    pub root: RootArgs,

    /// Folder to index (defaults to <root>/public/meme-base)
    #[arg(short, long)]
    pub source: Option<PathBuf>,

    /// Manifest file to write (defaults to <root>/public/meme-manifest.json)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Execute the manifest command.
pub fn execute(args: ManifestArgs) -> anyhow::Result<()> {
    let mut config = args.root.config()?;
    if let Some(source) = args.source {
        config.manifest.source_dir = source;
    }
    if let Some(output) = args.output {
        config.manifest.output_path = output;
    }
    config.validate()?;

    let summary = ManifestGenerator::new(config.manifest).generate()?;

    println!(
        "{}",
        style(format!("✓ Generated manifest with {} memes", summary.entries)).green()
    );
    println!(
        "{}",
        style(format!("✓ Saved to {}", summary.output_path.display())).green()
    );
    Ok(())
}
