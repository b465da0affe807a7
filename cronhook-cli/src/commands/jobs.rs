//! Job command handlers
//!
//! Handles listing crontab jobs and triggering them by hash.

use std::io::Write;

use anyhow::{Context, Result};
use clap::Subcommand;
use colored::*;
use cronhook_client::{CronJob, CronhookClient};

use crate::config::Config;
use crate::hash_resolver::resolve_job_hash;
use crate::types::HashOrPrefix;

/// Characters of the hash shown in listings
const SHORT_HASH_LEN: usize = 12;

/// Job subcommands
#[derive(Subcommand)]
pub enum JobCommands {
    /// List all crontab jobs
    List {
        /// Show full hashes instead of short prefixes
        #[arg(long)]
        full: bool,
    },
    /// Run a job now and print its output
    Run {
        /// Job hash or unambiguous prefix
        hash: String,
    },
}

/// Handle job commands
///
/// Routes job subcommands to their respective handlers.
pub async fn handle_job_command(command: JobCommands, config: &Config) -> Result<()> {
    let client = CronhookClient::new(&config.server_url);

    match command {
        JobCommands::List { full } => list_jobs(&client, full).await,
        JobCommands::Run { hash } => run_job(&client, &hash).await,
    }
}

/// List all jobs
async fn list_jobs(client: &CronhookClient, full: bool) -> Result<()> {
    let jobs = client.list_jobs().await?;

    if jobs.is_empty() {
        println!("{}", "No cron jobs found.".yellow());
    } else {
        println!("{}", format!("Found {} cron job(s):", jobs.len()).bold());
        println!();
        for job in &jobs {
            print_job_summary(job, full);
        }
    }

    Ok(())
}

/// Resolve a hash prefix, run the job and stream its output to stdout
async fn run_job(client: &CronhookClient, hash: &str) -> Result<()> {
    let input = HashOrPrefix::parse(hash);
    let hash = resolve_job_hash(client, &input).await?;

    eprintln!("{} {}", "Running job".dimmed(), hash.cyan());

    let output = client
        .run_job(&hash)
        .await
        .with_context(|| format!("Job {} failed", input))?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(&output)?;
    stdout.flush()?;

    Ok(())
}

/// Print a job summary
fn print_job_summary(job: &CronJob, full: bool) {
    let hash = if full {
        job.identifier.as_str()
    } else {
        job.short_identifier(SHORT_HASH_LEN)
    };

    println!("  {} {}", "▸".cyan(), hash.bold());
    println!("    Schedule: {}", job.schedule.yellow());
    println!("    Command:  {}", job.command);
    println!();
}
