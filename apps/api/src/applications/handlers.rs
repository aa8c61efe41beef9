//! Axum route handlers for the Applications API.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::applications::stats::{compute_stats, ApplicationStats};
use crate::applications::tracker::{
    apply_update, build_application, find_application_mut, remove_application,
    sort_recent_first, ApplicationUpdate, NewApplication,
};
use crate::errors::AppError;
use crate::models::application::Application;
use crate::models::profile::CandidateProfile;
use crate::profile::handlers::UserIdQuery;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct CreateApplicationRequest {
    pub user_id: Uuid,
    #[serde(flatten)]
    pub application: NewApplication,
}

#[derive(Debug, Deserialize)]
pub struct UpdateApplicationRequest {
    pub user_id: Uuid,
    #[serde(flatten)]
    pub update: ApplicationUpdate,
}

#[derive(Debug, Serialize)]
pub struct ApplicationView {
    #[serde(flatten)]
    pub application: Application,
    pub match_score: u8,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/applications
///
/// Most recent first, each with its current match score.
pub async fn handle_list_applications(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<Vec<ApplicationView>>, AppError> {
    let profile = state.profiles.load_profile_or_default(params.user_id).await?;
    let mut applications = state.profiles.load_applications(params.user_id).await?;
    sort_recent_first(&mut applications);

    let views = applications
        .into_iter()
        .map(|application| view(&state, &profile, application))
        .collect();
    Ok(Json(views))
}

/// POST /api/v1/applications
pub async fn handle_create_application(
    State(state): State<AppState>,
    Json(request): Json<CreateApplicationRequest>,
) -> Result<(StatusCode, Json<ApplicationView>), AppError> {
    let job = match request.application.job_id {
        Some(job_id) => Some(
            state
                .jobs
                .get_job(job_id)
                .await?
                .ok_or_else(|| AppError::NotFound(format!("Job {job_id} not found")))?,
        ),
        None => None,
    };

    let application = build_application(
        request.application,
        job.as_ref(),
        Utc::now().date_naive(),
    )?;

    let mut applications = state.profiles.load_applications(request.user_id).await?;
    applications.push(application.clone());
    state
        .profiles
        .save_applications(request.user_id, &applications)
        .await?;
    info!(
        "Recorded application {} ({}) for user {}",
        application.id, application.position, request.user_id
    );

    let profile = state.profiles.load_profile_or_default(request.user_id).await?;
    Ok((StatusCode::CREATED, Json(view(&state, &profile, application))))
}

/// PATCH /api/v1/applications/:id
///
/// Updates status and/or notes. Leaving a terminal status other than by
/// reopening as `Applied` is rejected.
pub async fn handle_update_application(
    State(state): State<AppState>,
    Path(application_id): Path<Uuid>,
    Json(request): Json<UpdateApplicationRequest>,
) -> Result<Json<ApplicationView>, AppError> {
    let mut applications = state.profiles.load_applications(request.user_id).await?;
    let application = find_application_mut(&mut applications, application_id)?;
    apply_update(application, request.update)?;
    let updated = application.clone();

    state
        .profiles
        .save_applications(request.user_id, &applications)
        .await?;
    info!(
        "Application {application_id} for user {} is now {:?}",
        request.user_id, updated.status
    );

    let profile = state.profiles.load_profile_or_default(request.user_id).await?;
    Ok(Json(view(&state, &profile, updated)))
}

/// DELETE /api/v1/applications/:id
pub async fn handle_delete_application(
    State(state): State<AppState>,
    Path(application_id): Path<Uuid>,
    Query(params): Query<UserIdQuery>,
) -> Result<StatusCode, AppError> {
    let mut applications = state.profiles.load_applications(params.user_id).await?;
    remove_application(&mut applications, application_id)?;
    state
        .profiles
        .save_applications(params.user_id, &applications)
        .await?;
    info!("Deleted application {application_id} for user {}", params.user_id);
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/applications/stats
pub async fn handle_application_stats(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<ApplicationStats>, AppError> {
    let profile = state.profiles.load_profile_or_default(params.user_id).await?;
    let applications = state.profiles.load_applications(params.user_id).await?;
    Ok(Json(compute_stats(&applications, &profile)))
}

/// Match score is 0 while no dream job is active.
fn view(state: &AppState, profile: &CandidateProfile, application: Application) -> ApplicationView {
    let match_score = if profile.active_dream_job_title().is_some() {
        state.matcher.match_job(&application.as_posting(), profile).score
    } else {
        0
    };
    ApplicationView {
        application,
        match_score,
    }
}
