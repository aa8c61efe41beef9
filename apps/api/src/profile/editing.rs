//! Profile edits: dream jobs, resumes, saved jobs and contact fields.
//!
//! Pure functions over `CandidateProfile`; handlers load, edit, then save.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::errors::AppError;
use crate::matching::keywords::normalize_term;
use crate::models::profile::{CandidateProfile, DreamJob, Preferences, ResumeProfile, ResumeStatus};

/// Partial update of the scalar profile fields. Absent fields are left alone.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileChanges {
    pub name: Option<String>,
    pub email: Option<String>,
    pub skills: Option<Vec<String>>,
    pub preferences: Option<Preferences>,
}

pub fn apply_profile_changes(profile: &mut CandidateProfile, changes: ProfileChanges) {
    if let Some(name) = changes.name {
        profile.name = name.trim().to_string();
    }
    if let Some(email) = changes.email {
        profile.email = email.trim().to_string();
    }
    if let Some(skills) = changes.skills {
        profile.skills = clean_terms(skills);
    }
    if let Some(preferences) = changes.preferences {
        profile.preferences = preferences;
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DreamJobForm {
    pub title: String,
    pub description: String,
}

impl DreamJobForm {
    fn validate(&self) -> Result<(), AppError> {
        if self.title.trim().is_empty() {
            return Err(AppError::Validation("Dream job title cannot be empty".to_string()));
        }
        if self.description.trim().is_empty() {
            return Err(AppError::Validation(
                "Dream job description cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

pub fn add_dream_job(profile: &mut CandidateProfile, form: DreamJobForm) -> Result<i64, AppError> {
    form.validate()?;
    let id = profile.next_dream_job_id();
    profile.dream_jobs.push(DreamJob {
        id,
        title: form.title.trim().to_string(),
        description: form.description.trim().to_string(),
    });
    Ok(id)
}

pub fn update_dream_job(
    profile: &mut CandidateProfile,
    dream_job_id: i64,
    form: DreamJobForm,
) -> Result<(), AppError> {
    form.validate()?;
    let job = profile
        .dream_jobs
        .iter_mut()
        .find(|j| j.id == dream_job_id)
        .ok_or_else(|| dream_job_not_found(dream_job_id))?;
    job.title = form.title.trim().to_string();
    job.description = form.description.trim().to_string();
    Ok(())
}

/// Removing the active dream job also clears the activation.
pub fn remove_dream_job(profile: &mut CandidateProfile, dream_job_id: i64) -> Result<(), AppError> {
    let before = profile.dream_jobs.len();
    profile.dream_jobs.retain(|j| j.id != dream_job_id);
    if profile.dream_jobs.len() == before {
        return Err(dream_job_not_found(dream_job_id));
    }
    if profile.active_dream_job_id == Some(dream_job_id) {
        profile.active_dream_job_id = None;
    }
    Ok(())
}

pub fn activate_dream_job(profile: &mut CandidateProfile, dream_job_id: i64) -> Result<(), AppError> {
    if !profile.dream_jobs.iter().any(|j| j.id == dream_job_id) {
        return Err(dream_job_not_found(dream_job_id));
    }
    profile.active_dream_job_id = Some(dream_job_id);
    Ok(())
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResumeForm {
    pub name: String,
    pub keywords: Vec<String>,
    #[serde(default)]
    pub status: Option<ResumeStatus>,
}

impl ResumeForm {
    /// Name and at least one keyword are required.
    fn validated(self) -> Result<(String, Vec<String>, Option<ResumeStatus>), AppError> {
        let name = self.name.trim().to_string();
        if name.is_empty() {
            return Err(AppError::Validation("Resume name cannot be empty".to_string()));
        }
        let keywords = clean_terms(self.keywords);
        if keywords.is_empty() {
            return Err(AppError::Validation(
                "Resume needs at least one keyword".to_string(),
            ));
        }
        Ok((name, keywords, self.status))
    }
}

pub fn add_resume(
    profile: &mut CandidateProfile,
    form: ResumeForm,
    today: NaiveDate,
) -> Result<i64, AppError> {
    let (name, keywords, status) = form.validated()?;
    let id = profile.next_resume_id();
    profile.resumes.push(ResumeProfile {
        id,
        name,
        keywords,
        score: 0,
        status: status.unwrap_or_default(),
        last_updated: Some(today),
        last_scanned: None,
    });
    Ok(id)
}

/// Edits name, keywords and status. The scan score is left untouched.
pub fn update_resume(
    profile: &mut CandidateProfile,
    resume_id: i64,
    form: ResumeForm,
    today: NaiveDate,
) -> Result<(), AppError> {
    let (name, keywords, status) = form.validated()?;
    let resume = resume_mut(profile, resume_id)?;
    resume.name = name;
    resume.keywords = keywords;
    if let Some(status) = status {
        resume.status = status;
    }
    resume.last_updated = Some(today);
    Ok(())
}

pub fn remove_resume(profile: &mut CandidateProfile, resume_id: i64) -> Result<(), AppError> {
    let before = profile.resumes.len();
    profile.resumes.retain(|r| r.id != resume_id);
    if profile.resumes.len() == before {
        return Err(AppError::NotFound(format!("Resume {resume_id} not found")));
    }
    Ok(())
}

pub fn resume_mut(
    profile: &mut CandidateProfile,
    resume_id: i64,
) -> Result<&mut ResumeProfile, AppError> {
    profile
        .resumes
        .iter_mut()
        .find(|r| r.id == resume_id)
        .ok_or_else(|| AppError::NotFound(format!("Resume {resume_id} not found")))
}

/// Adds `job_id` to the saved list, or removes it if already saved. Returns whether it is now saved.
pub fn toggle_saved_job(profile: &mut CandidateProfile, job_id: i64) -> bool {
    if let Some(pos) = profile.saved_job_ids.iter().position(|id| *id == job_id) {
        profile.saved_job_ids.remove(pos);
        false
    } else {
        profile.saved_job_ids.push(job_id);
        true
    }
}

/// Appends `extra` terms not already present (by normalized form).
pub fn merge_terms(existing: &mut Vec<String>, extra: impl IntoIterator<Item = String>) {
    for term in extra {
        let key = normalize_term(&term);
        if key.is_empty() {
            continue;
        }
        if !existing.iter().any(|t| normalize_term(t) == key) {
            existing.push(term.trim().to_string());
        }
    }
}

/// Trims, drops blanks and dedupes by normalized form, keeping the first spelling.
fn clean_terms(terms: Vec<String>) -> Vec<String> {
    let mut cleaned = Vec::new();
    merge_terms(&mut cleaned, terms);
    cleaned
}

fn dream_job_not_found(id: i64) -> AppError {
    AppError::NotFound(format!("Dream job {id} not found"))
}
