//! Axum route handlers for the Profile API.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::profile::{CandidateProfile, ResumeProfile};
use crate::profile::editing::{
    activate_dream_job, add_dream_job, add_resume, apply_profile_changes,
    remove_dream_job, remove_resume, resume_mut, toggle_saved_job, update_dream_job,
    update_resume, DreamJobForm, ProfileChanges, ResumeForm,
};
use crate::profile::scan::{record_scan, scan_resume, ResumeScanReport};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct UserIdQuery {
    pub user_id: Uuid,
}

#[derive(Debug, Deserialize)]
pub struct UserIdBody {
    pub user_id: Uuid,
}

#[derive(Debug, Deserialize)]
pub struct UpdateProfileRequest {
    pub user_id: Uuid,
    #[serde(flatten)]
    pub changes: ProfileChanges,
}

#[derive(Debug, Deserialize)]
pub struct DreamJobRequest {
    pub user_id: Uuid,
    #[serde(flatten)]
    pub form: DreamJobForm,
}

#[derive(Debug, Deserialize)]
pub struct ResumeRequest {
    pub user_id: Uuid,
    #[serde(flatten)]
    pub form: ResumeForm,
}

#[derive(Debug, Deserialize)]
pub struct ScanRequest {
    pub user_id: Uuid,
    /// Plain resume text.
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct ScanResponse {
    pub report: ResumeScanReport,
    pub resume: ResumeProfile,
}

#[derive(Debug, Serialize)]
pub struct SavedJobResponse {
    pub job_id: i64,
    pub saved: bool,
    pub saved_job_ids: Vec<i64>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/profile
pub async fn handle_get_profile(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<CandidateProfile>, AppError> {
    let profile = state.profiles.load_profile_or_default(params.user_id).await?;
    Ok(Json(profile))
}

/// PUT /api/v1/profile
///
/// Updates name, email, skills and preferences. Dream jobs and resumes have their own endpoints.
pub async fn handle_update_profile(
    State(state): State<AppState>,
    Json(request): Json<UpdateProfileRequest>,
) -> Result<Json<CandidateProfile>, AppError> {
    edit_profile(&state, request.user_id, |profile| {
        apply_profile_changes(profile, request.changes);
        Ok(())
    })
    .await
    .map(Json)
}

/// POST /api/v1/profile/dream-jobs
pub async fn handle_add_dream_job(
    State(state): State<AppState>,
    Json(request): Json<DreamJobRequest>,
) -> Result<Json<CandidateProfile>, AppError> {
    edit_profile(&state, request.user_id, |profile| {
        add_dream_job(profile, request.form).map(|_| ())
    })
    .await
    .map(Json)
}

/// PUT /api/v1/profile/dream-jobs/:id
pub async fn handle_update_dream_job(
    State(state): State<AppState>,
    Path(dream_job_id): Path<i64>,
    Json(request): Json<DreamJobRequest>,
) -> Result<Json<CandidateProfile>, AppError> {
    edit_profile(&state, request.user_id, |profile| {
        update_dream_job(profile, dream_job_id, request.form)
    })
    .await
    .map(Json)
}

/// DELETE /api/v1/profile/dream-jobs/:id
pub async fn handle_delete_dream_job(
    State(state): State<AppState>,
    Path(dream_job_id): Path<i64>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<CandidateProfile>, AppError> {
    edit_profile(&state, params.user_id, |profile| {
        remove_dream_job(profile, dream_job_id)
    })
    .await
    .map(Json)
}

/// POST /api/v1/profile/dream-jobs/:id/activate
pub async fn handle_activate_dream_job(
    State(state): State<AppState>,
    Path(dream_job_id): Path<i64>,
    Json(request): Json<UserIdBody>,
) -> Result<Json<CandidateProfile>, AppError> {
    edit_profile(&state, request.user_id, |profile| {
        activate_dream_job(profile, dream_job_id)
    })
    .await
    .map(Json)
}

/// POST /api/v1/profile/resumes
pub async fn handle_add_resume(
    State(state): State<AppState>,
    Json(request): Json<ResumeRequest>,
) -> Result<Json<CandidateProfile>, AppError> {
    let today = Utc::now().date_naive();
    edit_profile(&state, request.user_id, |profile| {
        add_resume(profile, request.form, today).map(|_| ())
    })
    .await
    .map(Json)
}

/// PUT /api/v1/profile/resumes/:id
pub async fn handle_update_resume(
    State(state): State<AppState>,
    Path(resume_id): Path<i64>,
    Json(request): Json<ResumeRequest>,
) -> Result<Json<CandidateProfile>, AppError> {
    let today = Utc::now().date_naive();
    edit_profile(&state, request.user_id, |profile| {
        update_resume(profile, resume_id, request.form, today)
    })
    .await
    .map(Json)
}

/// DELETE /api/v1/profile/resumes/:id
pub async fn handle_delete_resume(
    State(state): State<AppState>,
    Path(resume_id): Path<i64>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<CandidateProfile>, AppError> {
    edit_profile(&state, params.user_id, |profile| {
        remove_resume(profile, resume_id)
    })
    .await
    .map(Json)
}

/// POST /api/v1/profile/resumes/:id/scan
///
/// Scans resume text, merges the extracted keywords into the resume and
/// records the new scan score.
pub async fn handle_scan_resume(
    State(state): State<AppState>,
    Path(resume_id): Path<i64>,
    Json(request): Json<ScanRequest>,
) -> Result<Json<ScanResponse>, AppError> {
    if request.text.trim().is_empty() {
        return Err(AppError::Validation("text cannot be empty".to_string()));
    }

    let mut profile = state.profiles.load_profile_or_default(request.user_id).await?;
    let report = scan_resume(&request.text, profile.active_dream_job());

    let resume = resume_mut(&mut profile, resume_id)?;
    record_scan(resume, &report, Utc::now().date_naive());
    let resume = resume.clone();

    state.profiles.save_profile(request.user_id, &profile).await?;
    info!(
        "Scanned resume {resume_id} for user {}: score {}",
        request.user_id, report.score
    );

    Ok(Json(ScanResponse { report, resume }))
}

/// POST /api/v1/profile/saved-jobs/:job_id
///
/// Toggles whether a job is saved.
pub async fn handle_toggle_saved_job(
    State(state): State<AppState>,
    Path(job_id): Path<i64>,
    Json(request): Json<UserIdBody>,
) -> Result<Json<SavedJobResponse>, AppError> {
    if state.jobs.get_job(job_id).await?.is_none() {
        return Err(AppError::NotFound(format!("Job {job_id} not found")));
    }
    let mut saved = false;
    let profile = edit_profile(&state, request.user_id, |profile| {
        saved = toggle_saved_job(profile, job_id);
        Ok(())
    })
    .await?;

    Ok(Json(SavedJobResponse {
        job_id,
        saved,
        saved_job_ids: profile.saved_job_ids,
    }))
}

/// Load → edit → save. Nothing is written when `edit` fails.
async fn edit_profile<F>(
    state: &AppState,
    user_id: Uuid,
    edit: F,
) -> Result<CandidateProfile, AppError>
where
    F: FnOnce(&mut CandidateProfile) -> Result<(), AppError>,
{
    let mut profile = state.profiles.load_profile_or_default(user_id).await?;
    edit(&mut profile)?;
    state.profiles.save_profile(user_id, &profile).await?;
    info!("Saved profile for user {user_id}");
    Ok(profile)
}
