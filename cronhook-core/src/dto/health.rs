//! Health check payload

use serde::{Deserialize, Serialize};

/// Response body of `GET /health`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    /// Always `"ok"` when the server answers
    pub status: String,
    /// Distinct job identifiers currently resolvable for execution
    pub indexed_jobs: usize,
}

impl HealthStatus {
    /// Healthy status reporting `indexed_jobs` resolvable identifiers
    pub fn ok(indexed_jobs: usize) -> Self {
        Self {
            status: "ok".to_string(),
            indexed_jobs,
        }
    }
}
