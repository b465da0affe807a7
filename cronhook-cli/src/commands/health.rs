//! Health command handler

use anyhow::{Context, Result};
use colored::*;
use cronhook_client::CronhookClient;

use crate::config::Config;

/// Print server status and the number of runnable job hashes
pub async fn show_health(config: &Config) -> Result<()> {
    let client = CronhookClient::new(&config.server_url);
    let health = client
        .health()
        .await
        .with_context(|| format!("Server at {} is not reachable", config.server_url))?;

    println!("Server:       {}", config.server_url.bold());
    println!("Status:       {}", health.status.green());
    println!("Indexed jobs: {}", health.indexed_jobs);

    Ok(())
}
