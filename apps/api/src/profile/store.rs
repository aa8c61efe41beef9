//! Profile store: per-user key-value persistence for profiles and applications.
//!
//! Records are JSON strings under `user_profile:{user_id}` and
//! `applications:{user_id}`. Writes are last-write-wins; there are no
//! transactions across keys.

use std::collections::HashMap;

use async_trait::async_trait;
use redis::AsyncCommands;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::application::Application;
use crate::models::profile::CandidateProfile;

pub fn profile_key(user_id: Uuid) -> String {
    format!("user_profile:{user_id}")
}

pub fn applications_key(user_id: Uuid) -> String {
    format!("applications:{user_id}")
}

/// Backends implement raw get/set; typed access is shared.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    async fn get_raw(&self, key: &str) -> Result<Option<String>, AppError>;

    async fn set_raw(&self, key: &str, value: String) -> Result<(), AppError>;

    async fn load_profile(&self, user_id: Uuid) -> Result<Option<CandidateProfile>, AppError> {
        match self.get_raw(&profile_key(user_id)).await? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    /// A user with nothing saved yet gets an empty profile. It is not persisted.
    async fn load_profile_or_default(&self, user_id: Uuid) -> Result<CandidateProfile, AppError> {
        Ok(self.load_profile(user_id).await?.unwrap_or_default())
    }

    async fn save_profile(&self, user_id: Uuid, profile: &CandidateProfile) -> Result<(), AppError> {
        let raw = serde_json::to_string(profile)?;
        self.set_raw(&profile_key(user_id), raw).await
    }

    async fn load_applications(&self, user_id: Uuid) -> Result<Vec<Application>, AppError> {
        match self.get_raw(&applications_key(user_id)).await? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Vec::new()),
        }
    }

    async fn save_applications(
        &self,
        user_id: Uuid,
        applications: &[Application],
    ) -> Result<(), AppError> {
        let raw = serde_json::to_string(applications)?;
        self.set_raw(&applications_key(user_id), raw).await
    }
}

/// Process-local store. Used when no `REDIS_URL` is configured, and in tests.
#[derive(Default)]
pub struct InMemoryProfileStore {
    records: RwLock<HashMap<String, String>>,
}

impl InMemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProfileStore for InMemoryProfileStore {
    async fn get_raw(&self, key: &str) -> Result<Option<String>, AppError> {
        Ok(self.records.read().await.get(key).cloned())
    }

    async fn set_raw(&self, key: &str, value: String) -> Result<(), AppError> {
        self.records.write().await.insert(key.to_string(), value);
        Ok(())
    }
}

pub struct RedisProfileStore {
    client: redis::Client,
}

impl RedisProfileStore {
    pub fn new(client: redis::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ProfileStore for RedisProfileStore {
    async fn get_raw(&self, key: &str) -> Result<Option<String>, AppError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let value: Option<String> = conn.get(key).await?;
        debug!(key, found = value.is_some(), "Profile store read");
        Ok(value)
    }

    async fn set_raw(&self, key: &str, value: String) -> Result<(), AppError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        conn.set::<_, _, ()>(key, value).await?;
        debug!(key, "Profile store write");
        Ok(())
    }
}
