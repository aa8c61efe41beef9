use serde::Serialize;

use crate::models::application::{Application, ApplicationStatus};
use crate::models::profile::CandidateProfile;

/// Dashboard counters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ApplicationStats {
    pub applications_submitted: usize,
    /// Interviewing plus offers, since an offer implies an interview took place.
    pub interviews_scheduled: usize,
    pub offers: usize,
    pub rejections: usize,
    /// Resumes scanned at least once, whatever they scored.
    pub resumes_scanned: usize,
}

pub fn compute_stats(applications: &[Application], profile: &CandidateProfile) -> ApplicationStats {
    let count = |pred: fn(ApplicationStatus) -> bool| {
        applications.iter().filter(|a| pred(a.status)).count()
    };
    ApplicationStats {
        applications_submitted: applications.len(),
        interviews_scheduled: count(|s| {
            matches!(s, ApplicationStatus::Interviewing | ApplicationStatus::Offer)
        }),
        offers: count(|s| s == ApplicationStatus::Offer),
        rejections: count(|s| s == ApplicationStatus::Rejected),
        resumes_scanned: profile
            .resumes
            .iter()
            .filter(|r| r.last_scanned.is_some())
            .count(),
    }
}
