use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A job posting. Read-only reference data supplied by a `JobSource`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct JobPosting {
    pub id: i64,
    pub title: String,
    pub company: String,
    /// Free text, usually "City, Region".
    pub location: String,
    /// "Full-time", "Contract", ...
    pub employment_type: String,
    /// Annual figure used by the minimum-salary filter.
    pub salary: Option<i64>,
    pub salary_range: Option<String>,
    pub description: String,
    /// Order is irrelevant for scoring.
    pub required_tools: Vec<String>,
}
