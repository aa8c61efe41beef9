//! Match scoring: how well a job posting fits a candidate and one of their resumes.
//!
//! Three weighted sub-scores (title, skills, location) plus an optional
//! employment-type component. The weighting scheme is fixed per deployment
//! via `MatchWeighting`; the two schemes are never mixed.

use serde::{Deserialize, Serialize};

use crate::matching::keywords::KeywordIndex;
use crate::models::job::JobPosting;
use crate::models::profile::{CandidateProfile, ResumeProfile};

/// Selects the weighting scheme for a deployment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchWeighting {
    /// skills 60 / title 30 / location 10
    #[default]
    Standard,
    /// skills 50 / title 30 / location 10 / employment type 10
    EmploymentType,
}

impl MatchWeighting {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "standard" => Some(MatchWeighting::Standard),
            "employment_type" | "employment-type" => Some(MatchWeighting::EmploymentType),
            _ => None,
        }
    }

    pub fn weights(self) -> MatchWeights {
        match self {
            MatchWeighting::Standard => MatchWeights::standard(),
            MatchWeighting::EmploymentType => MatchWeights::with_employment_type(),
        }
    }
}

/// Maximum points per component. Sums to 100 for both built-in schemes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchWeights {
    pub title: f64,
    pub skills: f64,
    pub location: f64,
    pub employment_type: f64,
}

impl Default for MatchWeights {
    fn default() -> Self {
        Self::standard()
    }
}

impl MatchWeights {
    pub fn standard() -> Self {
        Self {
            title: 30.0,
            skills: 60.0,
            location: 10.0,
            employment_type: 0.0,
        }
    }

    pub fn with_employment_type() -> Self {
        Self {
            title: 30.0,
            skills: 50.0,
            location: 10.0,
            employment_type: 10.0,
        }
    }
}

/// Unrounded sub-scores plus the final 0 – 100 score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchBreakdown {
    pub title: f64,
    pub skills: f64,
    pub location: f64,
    pub employment_type: f64,
    pub total: u8,
}

/// Scores `job` against `candidate` using `resume` for skill evidence.
///
/// No resume means no match: the result is 0 whatever the other inputs are.
pub fn score_match(
    job: &JobPosting,
    resume: Option<&ResumeProfile>,
    candidate: &CandidateProfile,
    weights: &MatchWeights,
) -> u8 {
    score_breakdown(job, resume, candidate, weights).total
}

pub fn score_breakdown(
    job: &JobPosting,
    resume: Option<&ResumeProfile>,
    candidate: &CandidateProfile,
    weights: &MatchWeights,
) -> MatchBreakdown {
    let Some(resume) = resume else {
        return MatchBreakdown::default();
    };

    let title = title_score(candidate.active_dream_job_title(), &job.title, weights.title);
    let skills = skills_score(&job.required_tools, &resume.keywords, weights.skills);
    let location = location_score(candidate.location(), &job.location, weights.location);
    let employment_type = employment_type_score(
        candidate.preferences.work_type.as_deref(),
        &job.employment_type,
        weights.employment_type,
    );

    let sum = title + skills + location + employment_type;
    // Rounded only here; clamp guards against custom weights above 100.
    let total = sum.round().clamp(0.0, 100.0) as u8;

    MatchBreakdown {
        title,
        skills,
        location,
        employment_type,
        total,
    }
}

/// exact → full weight, containment → 2/3, shared word → 1/3, else 0.
fn title_score(dream_title: Option<&str>, job_title: &str, weight: f64) -> f64 {
    let dream = dream_title.unwrap_or_default().trim().to_lowercase();
    let job = job_title.trim().to_lowercase();
    if dream.is_empty() || job.is_empty() {
        return 0.0;
    }

    if dream == job {
        weight
    } else if job.contains(&dream) || dream.contains(&job) {
        weight * 2.0 / 3.0
    } else {
        let job_words: Vec<&str> = job.split_whitespace().collect();
        if dream.split_whitespace().any(|w| job_words.contains(&w)) {
            weight / 3.0
        } else {
            0.0
        }
    }
}

/// Share of required tools present in the resume keywords, scaled to `weight`.
fn skills_score(required_tools: &[String], keywords: &[String], weight: f64) -> f64 {
    // Explicit branch: an empty requirement list contributes nothing.
    if required_tools.is_empty() {
        return 0.0;
    }
    let matched = count_matched_tools(required_tools, keywords);
    (matched as f64 / required_tools.len() as f64) * weight
}

/// Number of `required_tools` entries covered by `keywords`.
pub fn count_matched_tools(required_tools: &[String], keywords: &[String]) -> usize {
    let index = KeywordIndex::new(keywords);
    required_tools
        .iter()
        .filter(|tool| index.covers(tool))
        .count()
}

/// exact → full weight, same region (second comma component) → half, else 0.
fn location_score(candidate_location: Option<&str>, job_location: &str, weight: f64) -> f64 {
    let candidate = candidate_location.unwrap_or_default().trim().to_lowercase();
    let job = job_location.trim().to_lowercase();
    if candidate.is_empty() || job.is_empty() {
        return 0.0;
    }

    if candidate == job {
        return weight;
    }
    match (region(&candidate), region(&job)) {
        (Some(a), Some(b)) if a == b => weight / 2.0,
        _ => 0.0,
    }
}

fn region(location: &str) -> Option<&str> {
    location
        .split(',')
        .nth(1)
        .map(str::trim)
        .filter(|r| !r.is_empty())
}

fn employment_type_score(work_type: Option<&str>, employment_type: &str, weight: f64) -> f64 {
    let wanted = work_type.unwrap_or_default().trim();
    let offered = employment_type.trim();
    if weight == 0.0 || wanted.is_empty() || offered.is_empty() {
        return 0.0;
    }
    if wanted.eq_ignore_ascii_case(offered) {
        weight
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::profile::{DreamJob, Preferences};

    fn job(title: &str, location: &str, tools: &[&str]) -> JobPosting {
        JobPosting {
            id: 1,
            title: title.to_string(),
            company: "TechCorp Inc.".to_string(),
            location: location.to_string(),
            employment_type: "Full-time".to_string(),
            salary: Some(135_000),
            salary_range: None,
            description: String::new(),
            required_tools: tools.iter().map(|t| t.to_string()).collect(),
        }
    }

    fn resume(keywords: &[&str]) -> ResumeProfile {
        ResumeProfile {
            id: 1,
            name: "Software Engineer Resume".to_string(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            score: 87,
            status: Default::default(),
            last_updated: None,
            last_scanned: None,
        }
    }

    fn candidate(dream_title: Option<&str>, location: Option<&str>) -> CandidateProfile {
        let dream_jobs = dream_title
            .map(|title| {
                vec![DreamJob {
                    id: 1,
                    title: title.to_string(),
                    description: "Target role".to_string(),
                }]
            })
            .unwrap_or_default();
        CandidateProfile {
            active_dream_job_id: dream_title.map(|_| 1),
            dream_jobs,
            preferences: Preferences {
                location: location.map(str::to_string),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    fn standard() -> MatchWeights {
        MatchWeights::standard()
    }

    #[test]
    fn test_no_resume_scores_zero() {
        let j = job("Software Engineer", "Austin, TX", &["React"]);
        let c = candidate(Some("Software Engineer"), Some("Austin, TX"));
        assert_eq!(score_match(&j, None, &c, &standard()), 0);
        assert_eq!(
            score_match(&j, None, &c, &MatchWeights::with_employment_type()),
            0
        );
    }

    #[test]
    fn test_title_substring_scores_20() {
        let w = standard();
        assert_eq!(
            title_score(Some("Software Engineer"), "Senior Software Engineer", w.title),
            20.0
        );
    }

    #[test]
    fn test_title_substring_is_symmetric() {
        let w = standard();
        let a = title_score(Some("Software Engineer"), "Senior Software Engineer", w.title);
        let b = title_score(Some("Senior Software Engineer"), "Software Engineer", w.title);
        assert_eq!(a, b);
    }

    #[test]
    fn test_title_exact_is_case_insensitive() {
        assert_eq!(title_score(Some("data scientist"), "Data Scientist", 30.0), 30.0);
    }

    #[test]
    fn test_title_shared_word_scores_10() {
        assert_eq!(title_score(Some("Lead AI Engineer"), "DevOps Engineer", 30.0), 10.0);
    }

    #[test]
    fn test_title_no_overlap_scores_zero() {
        assert_eq!(title_score(Some("Product Manager"), "Data Scientist", 30.0), 0.0);
    }

    #[test]
    fn test_title_missing_side_scores_zero() {
        assert_eq!(title_score(None, "Data Scientist", 30.0), 0.0);
        assert_eq!(title_score(Some("Data Scientist"), "  ", 30.0), 0.0);
    }

    #[test]
    fn test_skills_half_matched_scores_30() {
        let tools: Vec<String> = ["React", "Node.js", "AWS", "TypeScript"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let kws = resume(&["React", "Node.js", "Python"]).keywords;
        assert_eq!(skills_score(&tools, &kws, 60.0), 30.0);
    }

    #[test]
    fn test_skills_empty_tools_scores_zero() {
        let kws = resume(&["React"]).keywords;
        let score = skills_score(&[], &kws, 60.0);
        assert_eq!(score, 0.0);
        assert!(!score.is_nan());
    }

    #[test]
    fn test_skills_matching_ignores_case() {
        let tools = vec!["Node.js".to_string(), "AWS".to_string()];
        let kws = resume(&["node.js", "aws"]).keywords;
        assert_eq!(count_matched_tools(&tools, &kws), 2);
    }

    #[test]
    fn test_scanned_keywords_satisfy_punctuated_and_multi_word_tools() {
        use crate::matching::keywords::extract_keywords;

        let mut r = resume(&["Go"]);
        r.keywords
            .extend(extract_keywords("Built Node.js services and Machine Learning pipelines"));
        let tools = vec!["Node.js".to_string(), "Machine Learning".to_string()];
        assert_eq!(count_matched_tools(&tools, &r.keywords), 2);
        assert_eq!(skills_score(&tools, &r.keywords, 60.0), 60.0);
    }

    #[test]
    fn test_location_different_region_scores_zero() {
        assert_eq!(location_score(Some("San Francisco, CA"), "Austin, TX", 10.0), 0.0);
    }

    #[test]
    fn test_location_exact_scores_full() {
        assert_eq!(location_score(Some("austin, tx"), "Austin, TX", 10.0), 10.0);
    }

    #[test]
    fn test_location_same_region_scores_half() {
        assert_eq!(location_score(Some("Seattle, WA"), "Redmond, WA", 10.0), 5.0);
    }

    #[test]
    fn test_location_without_region_scores_zero() {
        assert_eq!(location_score(Some("Remote"), "Austin, TX", 10.0), 0.0);
        assert_eq!(location_score(None, "Austin, TX", 10.0), 0.0);
    }

    #[test]
    fn test_combined_scenario_scores_50() {
        let j = job(
            "Senior Software Engineer",
            "Austin, TX",
            &["React", "Node.js", "AWS", "TypeScript"],
        );
        let r = resume(&["React", "Node.js", "Python"]);
        let c = candidate(Some("Software Engineer"), Some("San Francisco, CA"));

        let breakdown = score_breakdown(&j, Some(&r), &c, &standard());
        assert_eq!(breakdown.title, 20.0);
        assert_eq!(breakdown.skills, 30.0);
        assert_eq!(breakdown.location, 0.0);
        assert_eq!(breakdown.employment_type, 0.0);
        assert_eq!(breakdown.total, 50);
        assert_eq!(score_match(&j, Some(&r), &c, &standard()), 50);
    }

    #[test]
    fn test_empty_tools_never_panics() {
        let j = job("Data Scientist", "Austin, TX", &[]);
        let r = resume(&["Python"]);
        let c = candidate(Some("Data Scientist"), Some("Austin, TX"));
        assert_eq!(score_match(&j, Some(&r), &c, &standard()), 40);
    }

    #[test]
    fn test_rounds_to_nearest() {
        // 1 of 3 tools → 20.0, plus title shared word 10 → 30
        let j = job("Backend Engineer", "Boston, MA", &["Python", "SQL", "AWS"]);
        let r = resume(&["python"]);
        let c = candidate(Some("Frontend Engineer"), None);
        assert_eq!(score_match(&j, Some(&r), &c, &standard()), 30);

        // 2 of 7 tools → 17.14..., rounds to 17
        let j = job("Nurse", "", &["a", "b", "c", "d", "e", "f", "g"]);
        let r = resume(&["a", "b"]);
        assert_eq!(score_match(&j, Some(&r), &candidate(None, None), &standard()), 17);
    }

    #[test]
    fn test_perfect_match_is_100() {
        let j = job("Data Scientist", "Austin, TX", &["Python", "SQL"]);
        let r = resume(&["Python", "SQL"]);
        let c = candidate(Some("Data Scientist"), Some("Austin, TX"));
        assert_eq!(score_match(&j, Some(&r), &c, &standard()), 100);
    }

    #[test]
    fn test_score_clamped_with_oversized_weights() {
        let weights = MatchWeights {
            title: 80.0,
            skills: 80.0,
            location: 80.0,
            employment_type: 0.0,
        };
        let j = job("Data Scientist", "Austin, TX", &["Python"]);
        let r = resume(&["Python"]);
        let c = candidate(Some("Data Scientist"), Some("Austin, TX"));
        assert_eq!(score_match(&j, Some(&r), &c, &weights), 100);
    }

    #[test]
    fn test_employment_type_weighting() {
        let weights = MatchWeights::with_employment_type();
        let j = job("Data Scientist", "Austin, TX", &["Python", "SQL"]);
        let r = resume(&["Python"]);
        let mut c = candidate(Some("Data Scientist"), Some("Austin, TX"));
        c.preferences.work_type = Some("full-time".to_string());

        let breakdown = score_breakdown(&j, Some(&r), &c, &weights);
        assert_eq!(breakdown.skills, 25.0);
        assert_eq!(breakdown.employment_type, 10.0);
        assert_eq!(breakdown.total, 75);
    }

    #[test]
    fn test_standard_weighting_ignores_employment_type() {
        let j = job("Data Scientist", "Austin, TX", &["Python"]);
        let r = resume(&["Python"]);
        let mut c = candidate(Some("Data Scientist"), Some("Austin, TX"));
        c.preferences.work_type = Some("Full-time".to_string());
        assert_eq!(score_breakdown(&j, Some(&r), &c, &standard()).employment_type, 0.0);
    }

    #[test]
    fn test_builtin_weights_sum_to_100() {
        for w in [MatchWeights::standard(), MatchWeights::with_employment_type()] {
            assert_eq!(w.title + w.skills + w.location + w.employment_type, 100.0);
        }
    }

    #[test]
    fn test_weighting_parse() {
        assert_eq!(MatchWeighting::parse("standard"), Some(MatchWeighting::Standard));
        assert_eq!(
            MatchWeighting::parse("Employment_Type"),
            Some(MatchWeighting::EmploymentType)
        );
        assert_eq!(MatchWeighting::parse("60/30/10"), None);
    }
}
