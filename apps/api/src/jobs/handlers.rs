//! Axum route handlers for the Jobs API.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use tracing::debug;

use crate::errors::AppError;
use crate::jobs::search::{filter_jobs, JobFilter};
use crate::models::job::JobPosting;
use crate::state::AppState;

/// GET /api/v1/jobs
///
/// Lists postings, narrowed by optional `q`, `title`, `employment_type` and `min_salary`.
/// An unreadable `min_salary` is a 400.
pub async fn handle_list_jobs(
    State(state): State<AppState>,
    Query(filter): Query<JobFilter>,
) -> Result<Json<Vec<JobPosting>>, AppError> {
    let jobs = state.jobs.list_jobs().await?;
    let total = jobs.len();
    let filtered = filter_jobs(jobs, &filter)?;
    debug!("Job search kept {} of {total} postings", filtered.len());
    Ok(Json(filtered))
}

/// GET /api/v1/jobs/:id
pub async fn handle_get_job(
    State(state): State<AppState>,
    Path(job_id): Path<i64>,
) -> Result<Json<JobPosting>, AppError> {
    let job = state
        .jobs
        .get_job(job_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Job {job_id} not found")))?;
    Ok(Json(job))
}
