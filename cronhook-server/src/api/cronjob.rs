//! Cron Job API Handlers
//!
//! HTTP endpoints for listing crontab entries and triggering them by hash.

use axum::{
    Json,
    extract::{Path, State},
};
use cronhook_core::domain::job::CronJob;

use crate::api::error::ApiResult;
use crate::service::job_service;
use crate::state::AppState;

/// GET /cronjobs
/// List every job of the crontab, refreshing the hash index
pub async fn list_cron_jobs(State(state): State<AppState>) -> ApiResult<Json<Vec<CronJob>>> {
    tracing::debug!("Listing cron jobs");

    let jobs = job_service::list_jobs(state.table.as_ref(), &state.index).await?;

    Ok(Json(jobs))
}

/// POST /cronjobs/{hash}
/// Run a previously listed job and return its raw stdout
pub async fn run_cron_job(
    State(state): State<AppState>,
    Path(hash): Path<String>,
) -> ApiResult<Vec<u8>> {
    tracing::info!("Triggering cron job: {}", hash);

    let output = job_service::execute_job(&state.index, &state.runner, &hash).await?;

    Ok(output)
}
