//! Job matcher: pluggable composition of selector and scorer.
//!
//! `AppState` holds an `Arc<dyn JobMatcher>` built once at startup, so a
//! deployment runs exactly one weighting scheme.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::matching::scoring::{score_breakdown, MatchBreakdown, MatchWeights};
use crate::matching::selector::select_best_resume;
use crate::models::job::JobPosting;
use crate::models::profile::{CandidateProfile, ResumeProfile};

/// Derived per request. Never persisted or cached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub job_id: i64,
    pub resume_id: Option<i64>,
    pub resume_name: Option<String>,
    pub score: u8,
    pub breakdown: MatchBreakdown,
}

pub trait JobMatcher: Send + Sync {
    /// Label reported alongside results, e.g. "keyword".
    fn backend(&self) -> &'static str;

    fn score(
        &self,
        job: &JobPosting,
        resume: Option<&ResumeProfile>,
        candidate: &CandidateProfile,
    ) -> MatchBreakdown;

    fn best_resume<'a>(
        &self,
        job: &JobPosting,
        resumes: &'a [ResumeProfile],
    ) -> Option<&'a ResumeProfile>;

    /// Scores `job` with an explicit resume, or the best one when `resume` is `None`.
    fn match_job_with(
        &self,
        job: &JobPosting,
        resume: Option<&ResumeProfile>,
        candidate: &CandidateProfile,
    ) -> MatchResult {
        let resume = resume.or_else(|| self.best_resume(job, &candidate.resumes));
        let breakdown = self.score(job, resume, candidate);
        MatchResult {
            job_id: job.id,
            resume_id: resume.map(|r| r.id),
            resume_name: resume.map(|r| r.name.clone()),
            score: breakdown.total,
            breakdown,
        }
    }

    fn match_job(&self, job: &JobPosting, candidate: &CandidateProfile) -> MatchResult {
        self.match_job_with(job, None, candidate)
    }

    /// Matches every job in order. Requires an active dream job.
    fn match_jobs(
        &self,
        jobs: &[JobPosting],
        candidate: &CandidateProfile,
    ) -> Result<Vec<MatchResult>, AppError> {
        ensure_matching_enabled(candidate)?;
        Ok(jobs.iter().map(|job| self.match_job(job, candidate)).collect())
    }
}

/// Matching is disabled entirely without an active dream job title.
pub fn ensure_matching_enabled(candidate: &CandidateProfile) -> Result<(), AppError> {
    if candidate.active_dream_job_title().is_none() {
        return Err(AppError::UnprocessableEntity(
            "No active dream job set. Add and activate a dream job to get matches.".to_string(),
        ));
    }
    Ok(())
}

/// Default matcher: raw-overlap resume selection + weighted keyword score.
pub struct KeywordJobMatcher {
    weights: MatchWeights,
}

impl KeywordJobMatcher {
    pub fn new(weights: MatchWeights) -> Self {
        Self { weights }
    }
}

impl Default for KeywordJobMatcher {
    fn default() -> Self {
        Self::new(MatchWeights::standard())
    }
}

impl JobMatcher for KeywordJobMatcher {
    fn backend(&self) -> &'static str {
        "keyword"
    }

    fn score(
        &self,
        job: &JobPosting,
        resume: Option<&ResumeProfile>,
        candidate: &CandidateProfile,
    ) -> MatchBreakdown {
        score_breakdown(job, resume, candidate, &self.weights)
    }

    fn best_resume<'a>(
        &self,
        job: &JobPosting,
        resumes: &'a [ResumeProfile],
    ) -> Option<&'a ResumeProfile> {
        select_best_resume(job, resumes)
    }
}

/// Stable sort, highest score first.
pub fn sort_by_score(results: &mut [MatchResult]) {
    results.sort_by(|a, b| b.score.cmp(&a.score));
}
