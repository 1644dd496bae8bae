//! File-backed [`GameApi`] for offline play and tests.
//!
//! The fixture is re-read on every call, so editing the file between syncs
//! behaves like the remote content changing.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::adapters::dto::{CardDto, CategoryDto, FeatureFlagDto};
use crate::adapters::remote_api::GameApi;
use crate::error::AppError;
use crate::errors::domain::{DomainError, InfraErrorKind};

/// On-disk layout of a fixture file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Fixture {
    #[serde(default)]
    pub categories: Vec<CategoryDto>,
    #[serde(default)]
    pub cards: Vec<CardDto>,
    #[serde(default)]
    pub feature_flags: Vec<FeatureFlagDto>,
}

pub struct FixtureGameApi {
    path: PathBuf,
}

impl FixtureGameApi {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read(&self) -> Result<Fixture, AppError> {
        let raw = tokio::fs::read_to_string(&self.path).await.map_err(|err| {
            DomainError::infra(
                InfraErrorKind::Storage,
                format!("Unable to read fixture {}: {err}", self.path.display()),
            )
        })?;
        Ok(serde_json::from_str(&raw)?)
    }
}

#[async_trait]
impl GameApi for FixtureGameApi {
    async fn categories(&self) -> Result<Vec<CategoryDto>, AppError> {
        Ok(self.read().await?.categories)
    }

    async fn cards_for_category(&self, category_id: &str) -> Result<Vec<CardDto>, AppError> {
        let fixture = self.read().await?;
        Ok(fixture
            .cards
            .into_iter()
            .filter(|card| card.category_id == category_id)
            .collect())
    }

    async fn feature_flag(&self, flag_id: &str) -> Result<Vec<FeatureFlagDto>, AppError> {
        let fixture = self.read().await?;
        Ok(fixture
            .feature_flags
            .into_iter()
            .filter(|flag| flag.id == flag_id)
            .collect())
    }
}
