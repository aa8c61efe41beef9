//! Application tracking: building, updating and ordering a user's applications.
//!
//! Status pipeline: `Applied` → `Interviewing` → `Offer` | `Rejected`.
//! `Offer` and `Rejected` are terminal; the only way out is back to `Applied`.

use chrono::NaiveDate;
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::application::{Application, ApplicationStatus};
use crate::models::job::JobPosting;

/// Fields for a new application. With a `job_id`, missing details come from the posting.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewApplication {
    pub job_id: Option<i64>,
    pub position: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub employment_type: Option<String>,
    #[serde(default)]
    pub required_skills: Vec<String>,
    pub status: Option<ApplicationStatus>,
    pub applied_on: Option<NaiveDate>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApplicationUpdate {
    pub status: Option<ApplicationStatus>,
    pub notes: Option<String>,
}

/// `job` must be the posting for `form.job_id`, if any.
pub fn build_application(
    form: NewApplication,
    job: Option<&JobPosting>,
    today: NaiveDate,
) -> Result<Application, AppError> {
    let position = pick(form.position, job.map(|j| j.title.as_str()));
    if position.is_empty() {
        return Err(AppError::Validation(
            "Application needs a position or a job_id".to_string(),
        ));
    }

    let required_skills = if form.required_skills.is_empty() {
        job.map(|j| j.required_tools.clone()).unwrap_or_default()
    } else {
        form.required_skills
    };

    Ok(Application {
        id: Uuid::new_v4(),
        job_id: form.job_id,
        position,
        company: pick(form.company, job.map(|j| j.company.as_str())),
        location: pick(form.location, job.map(|j| j.location.as_str())),
        employment_type: pick(form.employment_type, job.map(|j| j.employment_type.as_str())),
        required_skills,
        status: form.status.unwrap_or_default(),
        applied_on: form.applied_on.unwrap_or(today),
        notes: clean_notes(form.notes),
    })
}

pub fn check_transition(from: ApplicationStatus, to: ApplicationStatus) -> Result<(), AppError> {
    if from == to || !from.is_terminal() || to == ApplicationStatus::Applied {
        return Ok(());
    }
    Err(AppError::Validation(format!(
        "Cannot move application from {from:?} to {to:?}; reopen it as Applied first"
    )))
}

/// Nothing changes when the status transition is rejected.
pub fn apply_update(application: &mut Application, update: ApplicationUpdate) -> Result<(), AppError> {
    if let Some(status) = update.status {
        check_transition(application.status, status)?;
        application.status = status;
    }
    if update.notes.is_some() {
        application.notes = clean_notes(update.notes);
    }
    Ok(())
}

pub fn find_application_mut(
    applications: &mut [Application],
    id: Uuid,
) -> Result<&mut Application, AppError> {
    applications
        .iter_mut()
        .find(|a| a.id == id)
        .ok_or_else(|| application_not_found(id))
}

pub fn remove_application(applications: &mut Vec<Application>, id: Uuid) -> Result<(), AppError> {
    let before = applications.len();
    applications.retain(|a| a.id != id);
    if applications.len() == before {
        return Err(application_not_found(id));
    }
    Ok(())
}

/// Newest `applied_on` first. Same-day applications keep latest-added first.
pub fn sort_recent_first(applications: &mut [Application]) {
    applications.reverse();
    applications.sort_by(|a, b| b.applied_on.cmp(&a.applied_on));
}

fn pick(given: Option<String>, fallback: Option<&str>) -> String {
    given
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .or_else(|| fallback.map(str::to_string))
        .unwrap_or_default()
}

fn clean_notes(notes: Option<String>) -> Option<String> {
    notes
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty())
}

fn application_not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Application {id} not found"))
}
