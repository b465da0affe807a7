//! Cron job domain types

use serde::{Deserialize, Serialize};

use crate::digest;

/// One scheduled entry of the crontab
///
/// The JSON form keeps the field names the HTTP API has always exposed:
/// `script` for the command, `hash` for the identifier and `interval` for
/// the schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CronJob {
    /// Shell command, fields rejoined with single spaces
    #[serde(rename = "script")]
    pub command: String,
    /// Digest of `command`, used to address the job
    #[serde(rename = "hash")]
    pub identifier: String,
    /// The five schedule fields, passed through uninterpreted
    #[serde(rename = "interval")]
    pub schedule: String,
}

impl CronJob {
    /// Build a job from its schedule and command, deriving the identifier
    pub fn new(schedule: impl Into<String>, command: impl Into<String>) -> Self {
        let command = command.into();
        Self {
            identifier: digest::job_identifier(&command),
            schedule: schedule.into(),
            command,
        }
    }

    /// First `len` characters of the identifier, for display
    pub fn short_identifier(&self, len: usize) -> &str {
        let end = len.min(self.identifier.len());
        &self.identifier[..end]
    }
}
