//! Resume scan: deterministic quality score for a resume's text.
//!
//! Three weighted signals:
//! - keyword breadth: distinct keywords found, saturating at `BREADTH_TARGET`
//! - dream job alignment: share of the dream job's keywords present
//! - quantification: whether the text contains any numbers

use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::matching::keywords::extract_keywords;
use crate::models::profile::{DreamJob, ResumeProfile};
use crate::profile::editing::merge_terms;

const BREADTH_WEIGHT: f64 = 0.50;
const ALIGNMENT_WEIGHT: f64 = 0.35;
const QUANTIFICATION_WEIGHT: f64 = 0.15;

const BREADTH_TARGET: usize = 15;
/// Used for alignment when there is no dream job to compare with.
const NEUTRAL_ALIGNMENT: f64 = 0.5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeScanReport {
    pub score: u8,
    pub keywords: Vec<String>,
    pub strengths: Vec<String>,
    pub suggestions: Vec<String>,
}

pub fn scan_resume(text: &str, dream_job: Option<&DreamJob>) -> ResumeScanReport {
    let keywords = extract_keywords(text);

    let breadth = (keywords.len() as f64 / BREADTH_TARGET as f64).min(1.0);

    let (alignment, missing) = match dream_job {
        Some(job) => dream_job_alignment(&keywords, job),
        None => (NEUTRAL_ALIGNMENT, Vec::new()),
    };

    let quantified = text.chars().any(|c| c.is_ascii_digit());
    let quantification = if quantified { 1.0 } else { 0.0 };

    let raw = BREADTH_WEIGHT * breadth
        + ALIGNMENT_WEIGHT * alignment
        + QUANTIFICATION_WEIGHT * quantification;
    let score = (raw * 100.0).round().clamp(0.0, 100.0) as u8;

    let mut strengths = Vec::new();
    let mut suggestions = Vec::new();

    if breadth >= 1.0 {
        strengths.push("Strong keyword coverage".to_string());
    } else {
        suggestions.push(format!(
            "Add more specific skills and tools ({} of {BREADTH_TARGET} recommended keywords found)",
            keywords.len()
        ));
    }

    match dream_job {
        Some(job) if alignment >= 0.6 => {
            strengths.push(format!("Well aligned with your dream job: {}", job.title));
        }
        Some(job) => {
            let top: Vec<&str> = missing.iter().take(3).map(String::as_str).collect();
            suggestions.push(format!(
                "Tailor your resume toward {}. Consider covering: {}",
                job.title,
                top.join(", ")
            ));
        }
        None => suggestions.push("Activate a dream job to check resume alignment".to_string()),
    }

    if quantified {
        strengths.push("Includes quantifiable achievements".to_string());
    } else {
        suggestions.push("Add quantifiable achievements (numbers, percentages, amounts)".to_string());
    }

    ResumeScanReport {
        score,
        keywords,
        strengths,
        suggestions,
    }
}

/// Writes a scan back to its resume: merges the found keywords, replaces the
/// score and stamps the scan date. The only writer of `score`.
pub fn record_scan(resume: &mut ResumeProfile, report: &ResumeScanReport, today: NaiveDate) {
    merge_terms(&mut resume.keywords, report.keywords.iter().cloned());
    resume.score = report.score;
    resume.last_updated = Some(today);
    resume.last_scanned = Some(today);
}

/// Share of dream-job keywords present, and the ones missing in first-seen order.
fn dream_job_alignment(resume_keywords: &[String], job: &DreamJob) -> (f64, Vec<String>) {
    let wanted = extract_keywords(&format!("{} {}", job.title, job.description));
    if wanted.is_empty() {
        return (NEUTRAL_ALIGNMENT, Vec::new());
    }
    let have: HashSet<&str> = resume_keywords.iter().map(String::as_str).collect();
    let missing: Vec<String> = wanted
        .iter()
        .filter(|kw| !have.contains(kw.as_str()))
        .cloned()
        .collect();
    let covered = wanted.len() - missing.len();
    (covered as f64 / wanted.len() as f64, missing)
}
