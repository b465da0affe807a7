//! Hash resolver module
//!
//! Resolves job hash prefixes to full hashes by listing jobs on the server.
//! This lets users type a short, unambiguous prefix instead of a 64-character
//! hash.

use anyhow::{Context, Result, anyhow};
use cronhook_client::{CronJob, CronhookClient};

use crate::types::HashOrPrefix;

/// Resolve a job hash or prefix to a full hash
///
/// The job list is always fetched, even for a full hash: listing is what
/// registers hashes on the server, so it must happen before a job can run.
///
/// # Errors
/// Returns an error if:
/// - No job matches the prefix
/// - Jobs with different hashes match the prefix (ambiguous)
/// - API call fails
pub async fn resolve_job_hash(client: &CronhookClient, input: &HashOrPrefix) -> Result<String> {
    let jobs = client
        .list_jobs()
        .await
        .context("Failed to fetch jobs for hash resolution")?;

    match input {
        HashOrPrefix::Full(hash) => Ok(hash.clone()),
        HashOrPrefix::Prefix(prefix) => match_prefix(&jobs, prefix),
    }
}

/// Find the single hash among `jobs` starting with `prefix`
///
/// Several jobs sharing one hash (same command, different schedules) count
/// as a single match.
pub fn match_prefix(jobs: &[CronJob], prefix: &str) -> Result<String> {
    if prefix.is_empty() {
        return Err(anyhow!("Job hash cannot be empty"));
    }

    let mut matches: Vec<&str> = jobs
        .iter()
        .map(|j| j.identifier.as_str())
        .filter(|hash| hash.starts_with(prefix))
        .collect();
    matches.sort_unstable();
    matches.dedup();

    match matches.as_slice() {
        [] => Err(anyhow!("No job found with hash starting with '{}'", prefix)),
        [hash] => Ok(hash.to_string()),
        _ => Err(anyhow!(
            "Ambiguous prefix '{}' matches multiple jobs: {}",
            prefix,
            matches.join(", ")
        )),
    }
}
