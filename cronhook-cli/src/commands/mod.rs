//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod health;
mod jobs;

pub use jobs::JobCommands;

use anyhow::Result;
use clap::Subcommand;

use crate::config::Config;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Crontab job listing and triggering
    Jobs {
        #[command(subcommand)]
        command: JobCommands,
    },
    /// Show server health
    Health,
}

/// Handle a CLI command
///
/// Routes the command to the appropriate handler module.
pub async fn handle_command(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Jobs { command } => jobs::handle_job_command(command, config).await,
        Commands::Health => health::show_health(config).await,
    }
}
