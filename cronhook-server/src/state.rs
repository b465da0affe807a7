//! Shared application state handed to every request handler.

use std::sync::Arc;

use crate::config::Config;
use crate::repository::{CommandTableSource, JobIndex, TableSource};
use crate::service::ShellRunner;

#[derive(Clone)]
pub struct AppState {
    pub index: Arc<JobIndex>,
    pub table: Arc<dyn TableSource>,
    pub runner: Arc<ShellRunner>,
}

impl AppState {
    pub fn new(table: Arc<dyn TableSource>, runner: ShellRunner) -> Self {
        Self {
            index: Arc::new(JobIndex::new()),
            table,
            runner: Arc::new(runner),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        let table = CommandTableSource::from_command(&config.table_command)
            .unwrap_or_else(CommandTableSource::crontab);

        Self::new(Arc::new(table), ShellRunner::from_config(config))
    }
}
