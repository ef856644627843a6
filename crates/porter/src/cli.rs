//! Command-line interface.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Community concierge bot for Discord guilds.
#[derive(Debug, Parser)]
#[command(name = "porter", version, about)]
pub struct Cli {
    /// What to do.
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the bot against the configured guild.
    Run {
        /// Path to the configuration file.
        #[arg(short, long, default_value = "porter.toml")]
        config: PathBuf,
    },
    /// Validate the configuration and string catalog, then exit.
    Check {
        /// Path to the configuration file.
        #[arg(short, long, default_value = "porter.toml")]
        config: PathBuf,
    },
}
