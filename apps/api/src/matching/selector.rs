//! Best-resume selection by raw tool overlap, not the weighted score.

use crate::matching::scoring::count_matched_tools;
use crate::models::job::JobPosting;
use crate::models::profile::ResumeProfile;

/// Picks the resume covering the most of `job.required_tools`.
///
/// Ties go to the earliest resume in `resumes`. Returns `None` only when
/// `resumes` is empty; a resume with zero overlap is still a valid pick.
pub fn select_best_resume<'a>(
    job: &JobPosting,
    resumes: &'a [ResumeProfile],
) -> Option<&'a ResumeProfile> {
    let mut best: Option<(&ResumeProfile, usize)> = None;

    for resume in resumes {
        let overlap = count_matched_tools(&job.required_tools, &resume.keywords);
        // Strictly greater keeps the first of equal candidates.
        if best.map_or(true, |(_, best_overlap)| overlap > best_overlap) {
            best = Some((resume, overlap));
        }
    }

    best.map(|(resume, _)| resume)
}
