use anyhow::{Context, Result};

use crate::matching::scoring::MatchWeighting;

/// Application configuration loaded from environment variables.
/// Every setting has a default, so the service starts with in-memory
/// backends and the built-in sample jobs when nothing is configured.
#[derive(Debug, Clone)]
pub struct Config {
    /// Profile store. In-memory when unset.
    pub redis_url: Option<String>,
    /// Job postings table. Sample postings when unset.
    pub database_url: Option<String>,
    pub match_weighting: MatchWeighting,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let match_weighting = match optional_env("MATCH_WEIGHTING") {
            Some(value) => MatchWeighting::parse(&value).with_context(|| {
                format!("MATCH_WEIGHTING must be 'standard' or 'employment_type', got '{value}'")
            })?,
            None => MatchWeighting::default(),
        };

        Ok(Config {
            redis_url: optional_env("REDIS_URL"),
            database_url: optional_env("DATABASE_URL"),
            match_weighting,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Unset and blank are treated the same.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
