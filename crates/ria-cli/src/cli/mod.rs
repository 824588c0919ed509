//! CLI for the ria remote-image allowlist.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use commands::{run_check, run_init, run_list, run_test};

/// Top-level CLI for the ria allowlist tool.
#[derive(Debug, Parser)]
#[command(name = "ria")]
#[command(about = "ria: remote-image allowlist checker", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Create the default (deny-all) config file if it does not exist.
    Init,

    /// Load and validate the allowlist config.
    Check {
        /// Path to the config file (defaults to ~/.config/ria/config.toml).
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// List configured remote patterns.
    List {
        /// Path to the config file (defaults to ~/.config/ria/config.toml).
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Test whether a candidate image URL is permitted by the allowlist.
    Test {
        /// Absolute http/https URL of the remote image.
        url: String,

        /// Path to the config file (defaults to ~/.config/ria/config.toml).
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Init => run_init()?,
            CliCommand::Check { config } => run_check(config.as_deref())?,
            CliCommand::List { config } => run_list(config.as_deref())?,
            CliCommand::Test { url, config } => run_test(&url, config.as_deref())?,
        }

        Ok(())
    }
}
