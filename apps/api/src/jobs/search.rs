use serde::Deserialize;

use crate::errors::AppError;
use crate::models::job::JobPosting;

/// Job search filters. All present filters must hold.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JobFilter {
    /// Matches title, company or any required tool.
    pub q: Option<String>,
    pub title: Option<String>,
    pub employment_type: Option<String>,
    /// Free text such as "$120,000" or "120000.50". Digits before any
    /// decimal point are used; the cents are dropped.
    pub min_salary: Option<String>,
}

impl JobFilter {
    /// `None` when no minimum was given. Text without a whole-dollar amount,
    /// or one too large to hold, is a validation error.
    pub fn min_salary_value(&self) -> Result<Option<i64>, AppError> {
        let Some(raw) = self.min_salary.as_deref().map(str::trim).filter(|v| !v.is_empty()) else {
            return Ok(None);
        };
        let whole = raw.split('.').next().unwrap_or_default();
        let digits: String = whole.chars().filter(char::is_ascii_digit).collect();
        if digits.is_empty() {
            return Err(AppError::Validation(format!(
                "min_salary must be an amount, got '{raw}'"
            )));
        }
        digits
            .parse()
            .map(Some)
            .map_err(|_| AppError::Validation(format!("min_salary is out of range: '{raw}'")))
    }

    /// `min_salary` is the already-parsed `min_salary_value`.
    fn matches(&self, job: &JobPosting, min_salary: Option<i64>) -> bool {
        if let Some(q) = non_blank(&self.q) {
            let hit = contains_ci(&job.title, &q)
                || contains_ci(&job.company, &q)
                || job.required_tools.iter().any(|tool| contains_ci(tool, &q));
            if !hit {
                return false;
            }
        }
        if let Some(title) = non_blank(&self.title) {
            if !contains_ci(&job.title, &title) {
                return false;
            }
        }
        if let Some(kind) = non_blank(&self.employment_type) {
            if !contains_ci(&job.employment_type, &kind) {
                return false;
            }
        }
        if let Some(min) = min_salary {
            // Postings without a salary cannot satisfy a minimum.
            if job.salary.map_or(true, |salary| salary < min) {
                return false;
            }
        }
        true
    }
}

pub fn filter_jobs(jobs: Vec<JobPosting>, filter: &JobFilter) -> Result<Vec<JobPosting>, AppError> {
    let min_salary = filter.min_salary_value()?;
    Ok(jobs
        .into_iter()
        .filter(|job| filter.matches(job, min_salary))
        .collect())
}

fn non_blank(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_lowercase)
}

fn contains_ci(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}
