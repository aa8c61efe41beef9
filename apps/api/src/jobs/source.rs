//! Job sources: where postings come from. The matcher does not care which.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;

use crate::errors::AppError;
use crate::jobs::sample::sample_jobs;
use crate::models::job::JobPosting;

#[async_trait]
pub trait JobSource: Send + Sync {
    async fn list_jobs(&self) -> Result<Vec<JobPosting>, AppError>;

    async fn get_job(&self, job_id: i64) -> Result<Option<JobPosting>, AppError> {
        Ok(self
            .list_jobs()
            .await?
            .into_iter()
            .find(|job| job.id == job_id))
    }
}

/// In-process postings. `sample()` serves the built-in demo set.
pub struct StaticJobSource {
    jobs: Vec<JobPosting>,
}

impl StaticJobSource {
    pub fn new(jobs: Vec<JobPosting>) -> Self {
        Self { jobs }
    }

    pub fn sample() -> Self {
        Self::new(sample_jobs())
    }
}

#[async_trait]
impl JobSource for StaticJobSource {
    async fn list_jobs(&self) -> Result<Vec<JobPosting>, AppError> {
        Ok(self.jobs.clone())
    }
}

/// Postings read from the `job_postings` table.
pub struct PgJobSource {
    pool: PgPool,
}

impl PgJobSource {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl JobSource for PgJobSource {
    async fn list_jobs(&self) -> Result<Vec<JobPosting>, AppError> {
        let jobs = sqlx::query_as::<_, JobPosting>(
            r#"
            SELECT id, title, company, location, employment_type, salary,
                   salary_range, description, required_tools
            FROM job_postings
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        debug!("Loaded {} job postings", jobs.len());
        Ok(jobs)
    }

    async fn get_job(&self, job_id: i64) -> Result<Option<JobPosting>, AppError> {
        let job = sqlx::query_as::<_, JobPosting>(
            r#"
            SELECT id, title, company, location, employment_type, salary,
                   salary_range, description, required_tools
            FROM job_postings
            WHERE id = $1
            "#,
        )
        .bind(job_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(job)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_static_source_lists_all() {
        let source = StaticJobSource::sample();
        assert_eq!(source.list_jobs().await.unwrap().len(), sample_jobs().len());
    }

    #[tokio::test]
    async fn test_static_source_get_by_id() {
        let source = StaticJobSource::sample();
        let job = source.get_job(3).await.unwrap().unwrap();
        assert_eq!(job.title, "Data Scientist");
        assert!(source.get_job(999).await.unwrap().is_none());
    }
}
