use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResumeStatus {
    #[default]
    Active,
    Draft,
}

/// A named collection of keywords with an independently maintained scan score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeProfile {
    pub id: i64,
    pub name: String,
    /// Stored as entered. Matched against job tools through `KeywordIndex`.
    pub keywords: Vec<String>,
    /// Last scan score (0 – 100). Only the resume scan writes this.
    #[serde(default)]
    pub score: u8,
    #[serde(default)]
    pub status: ResumeStatus,
    #[serde(default)]
    pub last_updated: Option<NaiveDate>,
    /// Set by the resume scan; `None` until the resume has been scanned once.
    #[serde(default)]
    pub last_scanned: Option<NaiveDate>,
}

/// A user-declared target role. One of them may be active at a time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DreamJob {
    pub id: i64,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    /// "City, Region"
    pub location: Option<String>,
    /// Compared against `JobPosting::employment_type` when that weight is enabled.
    pub work_type: Option<String>,
    pub salary_min: Option<i64>,
    pub salary_max: Option<i64>,
}

/// The candidate profile: the sole owner of resumes and dream jobs.
///
/// Persisted as one JSON record per user by a `ProfileStore`. Every field is
/// optional on the wire so partially-filled records still load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CandidateProfile {
    pub name: String,
    pub email: String,
    pub skills: Vec<String>,
    pub preferences: Preferences,
    pub dream_jobs: Vec<DreamJob>,
    pub active_dream_job_id: Option<i64>,
    pub resumes: Vec<ResumeProfile>,
    pub saved_job_ids: Vec<i64>,
}

impl CandidateProfile {
    pub fn active_dream_job(&self) -> Option<&DreamJob> {
        let active = self.active_dream_job_id?;
        self.dream_jobs.iter().find(|job| job.id == active)
    }

    /// Title of the active dream job. `None` disables matching entirely.
    pub fn active_dream_job_title(&self) -> Option<&str> {
        self.active_dream_job()
            .map(|job| job.title.trim())
            .filter(|title| !title.is_empty())
    }

    pub fn location(&self) -> Option<&str> {
        self.preferences
            .location
            .as_deref()
            .map(str::trim)
            .filter(|loc| !loc.is_empty())
    }

    pub fn resume(&self, resume_id: i64) -> Option<&ResumeProfile> {
        self.resumes.iter().find(|r| r.id == resume_id)
    }

    pub fn next_resume_id(&self) -> i64 {
        self.resumes.iter().map(|r| r.id).max().unwrap_or(0) + 1
    }

    pub fn next_dream_job_id(&self) -> i64 {
        self.dream_jobs.iter().map(|j| j.id).max().unwrap_or(0) + 1
    }
}
