//! Crontab source
//!
//! Reads the raw scheduler table. The default source shells out to
//! `crontab -l`; the trait keeps the listing logic independent of where the
//! text comes from.

use std::process::{ExitStatus, Stdio};

use async_trait::async_trait;
use thiserror::Error;
use tokio::process::Command;

/// Failure to obtain the raw crontab
#[derive(Debug, Error)]
pub enum TableError {
    /// The reader program could not be started
    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The reader program ran but reported failure
    #[error("{program} failed with {status}: {stderr}")]
    Failed {
        program: String,
        status: ExitStatus,
        stderr: String,
    },
}

/// Source of the raw crontab text
#[async_trait]
pub trait TableSource: Send + Sync {
    /// Returns the whole table, one entry per line
    async fn read_table(&self) -> Result<String, TableError>;
}

/// Reads the table by running an external program and capturing its stdout
#[derive(Debug, Clone)]
pub struct CommandTableSource {
    program: String,
    args: Vec<String>,
}

impl CommandTableSource {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// `crontab -l` for the user running the server
    pub fn crontab() -> Self {
        Self::new("crontab", vec!["-l".to_string()])
    }

    /// Build a source from a program followed by its arguments
    ///
    /// Returns `None` when `command` is empty.
    pub fn from_command(command: &[String]) -> Option<Self> {
        let (program, args) = command.split_first()?;
        Some(Self::new(program.clone(), args.to_vec()))
    }
}

#[async_trait]
impl TableSource for CommandTableSource {
    async fn read_table(&self) -> Result<String, TableError> {
        tracing::debug!("Reading crontab with {} {:?}", self.program, self.args);

        let output = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|source| TableError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(TableError::Failed {
                program: self.program.clone(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
