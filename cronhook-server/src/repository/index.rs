//! Job index
//!
//! In-memory mapping from job identifier to the command it stands for. The
//! index is rebuilt from the live crontab on every listing and is the only
//! source consulted when a job is triggered by identifier.
//!
//! Entries are inserted or overwritten, never removed: an identifier stays
//! resolvable until the process exits, even if its line has since been
//! deleted from the crontab.

use std::collections::HashMap;

use cronhook_core::domain::job::CronJob;
use tokio::sync::RwLock;

/// Lock-guarded identifier → command store
#[derive(Debug, Default)]
pub struct JobIndex {
    entries: RwLock<HashMap<String, String>>,
}

impl JobIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite a single mapping
    pub async fn register(&self, identifier: &str, command: &str) {
        let mut entries = self.entries.write().await;
        insert_entry(&mut entries, identifier, command);
    }

    /// Register every job of one listing under a single write lock
    ///
    /// Readers never observe a listing half applied.
    pub async fn register_all(&self, jobs: &[CronJob]) {
        let mut entries = self.entries.write().await;
        for job in jobs {
            insert_entry(&mut entries, &job.identifier, &job.command);
        }
    }

    /// Look up the command registered for `identifier`
    pub async fn resolve(&self, identifier: &str) -> Option<String> {
        self.entries.read().await.get(identifier).cloned()
    }

    /// Number of distinct identifiers
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

fn insert_entry(entries: &mut HashMap<String, String>, identifier: &str, command: &str) {
    match entries.insert(identifier.to_string(), command.to_string()) {
        Some(previous) if previous != command => {
            tracing::warn!(
                "Identifier {} collided: replacing command {:?} with {:?}",
                identifier,
                previous,
                command
            );
        }
        _ => {}
    }
}
