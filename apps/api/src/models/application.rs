use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::job::JobPosting;

/// Where an application sits in the hiring pipeline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApplicationStatus {
    #[default]
    Applied,
    Interviewing,
    Offer,
    Rejected,
}

impl ApplicationStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, ApplicationStatus::Offer | ApplicationStatus::Rejected)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Application {
    pub id: Uuid,
    pub job_id: Option<i64>,
    pub position: String,
    pub company: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub employment_type: String,
    #[serde(default)]
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub status: ApplicationStatus,
    pub applied_on: NaiveDate,
    #[serde(default)]
    pub notes: Option<String>,
}

impl Application {
    /// Views the application as a posting so the regular scorer can rate it.
    pub fn as_posting(&self) -> JobPosting {
        JobPosting {
            id: self.job_id.unwrap_or_default(),
            title: self.position.clone(),
            company: self.company.clone(),
            location: self.location.clone(),
            employment_type: self.employment_type.clone(),
            salary: None,
            salary_range: None,
            description: String::new(),
            required_tools: self.required_skills.clone(),
        }
    }
}
