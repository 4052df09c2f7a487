//! Subcommand implementations.

pub mod config;
pub mod crop;
pub mod manifest;

use clap::Args;
use memekit_core::Config;
use std::path::PathBuf;

/// Project root shared by every subcommand.
#[derive(Args, Debug, Default, Clone)]
pub struct RootArgs {
    /// Project root that all default paths are resolved against
    /// (defaults to the current directory)
    #[arg(long, env = "MEMEKIT_ROOT")]
    pub root: Option<PathBuf>,
}

impl RootArgs {
    /// Resolve the root, expanding a leading `~`.
    pub fn resolve(&self) -> anyhow::Result<PathBuf> {
        match &self.root {
            Some(root) => {
                let expanded = shellexpand::tilde(&root.to_string_lossy()).into_owned();
                Ok(PathBuf::from(expanded))
            }
            None => Ok(std::env::current_dir()?),
        }
    }

    /// Default configuration anchored at the resolved root.
    pub fn config(&self) -> anyhow::Result<Config> {
        Ok(Config::for_project_root(&self.resolve()?))
    }
}
