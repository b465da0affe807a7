//! Job Service
//!
//! Listing and on-demand execution of crontab jobs.

use cronhook_core::domain::job::CronJob;
use cronhook_core::parser;
use thiserror::Error;

use crate::repository::{JobIndex, TableError, TableSource};
use crate::service::shell::{ExecError, ShellRunner};

/// Service error type
#[derive(Debug, Error)]
pub enum JobError {
    #[error("Failed to retrieve cron jobs: {0}")]
    TableRead(#[from] TableError),

    /// No listing has registered this identifier
    #[error("Job not found")]
    NotFound(String),

    #[error(transparent)]
    Execution(#[from] ExecError),
}

pub type Result<T> = std::result::Result<T, JobError>;

/// Read the crontab, register every job in the index and return the jobs
///
/// Jobs come back in table order, one per parsed line. If the table cannot
/// be read the index is left exactly as it was.
pub async fn list_jobs(table: &dyn TableSource, index: &JobIndex) -> Result<Vec<CronJob>> {
    let raw = table.read_table().await?;

    let jobs = parser::parse_table(&raw);
    index.register_all(&jobs).await;

    tracing::debug!("Listed {} cron job(s)", jobs.len());

    Ok(jobs)
}

/// Run the job registered under `identifier` and return its stdout
pub async fn execute_job(
    index: &JobIndex,
    runner: &ShellRunner,
    identifier: &str,
) -> Result<Vec<u8>> {
    let command = index
        .resolve(identifier)
        .await
        .ok_or_else(|| JobError::NotFound(identifier.to_string()))?;

    tracing::info!("Running job {}: {}", identifier, command);

    let output = runner.run(&command).await?;

    tracing::info!(
        "Job {} finished, {} byte(s) of output",
        identifier,
        output.len()
    );

    Ok(output)
}
