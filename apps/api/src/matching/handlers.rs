//! Axum route handlers for the Match API.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::matching::matcher::{ensure_matching_enabled, sort_by_score, MatchResult};
use crate::matching::scoring::MatchWeighting;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct MatchQuery {
    pub user_id: Uuid,
    /// `score` sorts highest first. Anything else keeps posting order.
    pub sort: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MatchListResponse {
    pub backend: &'static str,
    /// Weighting scheme this deployment scores with.
    pub weighting: MatchWeighting,
    pub dream_job: String,
    pub matches: Vec<MatchResult>,
}

#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    pub user_id: Uuid,
    pub job_id: i64,
    /// Score against this resume instead of the best fit.
    pub resume_id: Option<i64>,
}

/// GET /api/v1/matches
pub async fn handle_list_matches(
    State(state): State<AppState>,
    Query(params): Query<MatchQuery>,
) -> Result<Json<MatchListResponse>, AppError> {
    let profile = state.profiles.load_profile_or_default(params.user_id).await?;
    let jobs = state.jobs.list_jobs().await?;

    let mut matches = state.matcher.match_jobs(&jobs, &profile)?;
    if params.sort.as_deref() == Some("score") {
        sort_by_score(&mut matches);
    }

    info!(
        "Matched {} jobs for user {} ({})",
        matches.len(),
        params.user_id,
        state.matcher.backend()
    );

    Ok(Json(MatchListResponse {
        backend: state.matcher.backend(),
        weighting: state.config.match_weighting,
        dream_job: profile
            .active_dream_job_title()
            .unwrap_or_default()
            .to_string(),
        matches,
    }))
}

/// POST /api/v1/matches/score
///
/// Scores one job, optionally against a chosen resume.
pub async fn handle_score_match(
    State(state): State<AppState>,
    Json(request): Json<ScoreRequest>,
) -> Result<Json<MatchResult>, AppError> {
    let profile = state.profiles.load_profile_or_default(request.user_id).await?;
    ensure_matching_enabled(&profile)?;

    let job = state
        .jobs
        .get_job(request.job_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Job {} not found", request.job_id)))?;

    let resume = match request.resume_id {
        Some(id) => Some(
            profile
                .resume(id)
                .ok_or_else(|| AppError::NotFound(format!("Resume {id} not found")))?,
        ),
        None => None,
    };

    Ok(Json(state.matcher.match_job_with(&job, resume, &profile)))
}
