//! Fixed sample postings served when no database is configured.

use crate::models::job::JobPosting;

#[allow(clippy::too_many_arguments)]
fn posting(
    id: i64,
    title: &str,
    company: &str,
    location: &str,
    employment_type: &str,
    salary: i64,
    salary_range: &str,
    description: &str,
    tools: &[&str],
) -> JobPosting {
    JobPosting {
        id,
        title: title.to_string(),
        company: company.to_string(),
        location: location.to_string(),
        employment_type: employment_type.to_string(),
        salary: Some(salary),
        salary_range: Some(salary_range.to_string()),
        description: description.to_string(),
        required_tools: tools.iter().map(|t| t.to_string()).collect(),
    }
}

pub fn sample_jobs() -> Vec<JobPosting> {
    vec![
        posting(
            1,
            "Senior Software Engineer",
            "TechCorp Inc.",
            "San Francisco, CA",
            "Full-time",
            135_000,
            "$120,000 - $150,000",
            "Join our team building scalable web applications using React and Node.js. \
             Experience with AWS and TypeScript is a plus.",
            &["React", "Node.js", "AWS", "TypeScript"],
        ),
        posting(
            2,
            "Product Manager",
            "InnovateTech",
            "New York, NY",
            "Full-time",
            115_000,
            "$100,000 - $130,000",
            "Drive innovation and user experience. Must have experience in Agile and analytics.",
            &["Product Strategy", "Agile", "User Research", "Analytics"],
        ),
        posting(
            3,
            "Data Scientist",
            "DataFlow Solutions",
            "Austin, TX",
            "Full-time",
            125_000,
            "$110,000 - $140,000",
            "Build predictive models and data-driven solutions. Strong Python and ML background required.",
            &["Python", "Machine Learning", "SQL", "Statistics"],
        ),
        posting(
            4,
            "Senior Frontend Developer",
            "TechCorp",
            "San Francisco, CA",
            "Full-time",
            150_000,
            "$130k - $170k/year",
            "Build user interfaces and implement features using React.",
            &["React", "JavaScript", "TypeScript", "CSS"],
        ),
        posting(
            5,
            "UX/UI Designer",
            "Adobe",
            "Remote",
            "Contract",
            95_000,
            "$85k - $105k/year",
            "Create beautiful and intuitive user experiences alongside product managers and developers.",
            &["Figma", "UI/UX", "Prototyping", "User Research"],
        ),
        posting(
            6,
            "Backend Engineer",
            "MongoDB",
            "New York, NY",
            "Full-time",
            160_000,
            "$140k - $180k/year",
            "Develop and maintain our server infrastructure and APIs.",
            &["Node.js", "Python", "SQL", "AWS"],
        ),
        posting(
            7,
            "DevOps Engineer",
            "Docker",
            "Seattle, WA",
            "Full-time",
            155_000,
            "$140k - $170k/year",
            "Build and maintain our cloud infrastructure and CI/CD pipelines.",
            &["Docker", "Kubernetes", "AWS", "Terraform"],
        ),
        posting(
            8,
            "Cloud Solutions Architect",
            "Microsoft",
            "Redmond, WA",
            "Full-time",
            190_000,
            "$170k - $210k/year",
            "Design and implement cloud solutions for enterprise clients on Azure.",
            &["Azure", "Cloud Architecture", "DevOps", "Networking"],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_sample_ids_unique() {
        let jobs = sample_jobs();
        let ids: HashSet<i64> = jobs.iter().map(|j| j.id).collect();
        assert_eq!(ids.len(), jobs.len());
    }

    #[test]
    fn test_every_sample_has_tools() {
        assert!(sample_jobs().iter().all(|j| !j.required_tools.is_empty()));
    }
}
