//! The `memekit config` command.

use clap::{Args, Subcommand};

use super::RootArgs;

/// Arguments for the `config` command.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Subcommands for configuration.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Display the effective configuration for a project root
    Show {
        #[command(flatten)]
        root: RootArgs,
    },
}

/// Execute the config command.
pub fn execute(args: ConfigArgs) -> anyhow::Result<()> {
    match args.command {
        ConfigCommand::Show { root } => {
            let config = root.config()?;
            println!("{}", config.to_toml()?);
        }
    }

    Ok(())
}
