//! Remote card API client.
//!
//! The backend speaks a PostgREST dialect: every resource is a table
//! endpoint filtered with `column=eq.value` query parameters.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::adapters::dto::{CardDto, CategoryDto, FeatureFlagDto};
use crate::config::api::ApiConfig;
use crate::error::AppError;

/// Source of truth for categories, cards and feature flags.
#[async_trait]
pub trait GameApi: Send + Sync {
    async fn categories(&self) -> Result<Vec<CategoryDto>, AppError>;
    async fn cards_for_category(&self, category_id: &str) -> Result<Vec<CardDto>, AppError>;
    async fn feature_flag(&self, flag_id: &str) -> Result<Vec<FeatureFlagDto>, AppError>;
}

pub struct HttpGameApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpGameApi {
    pub fn new(config: &ApiConfig) -> Result<Self, AppError> {
        let api_key = HeaderValue::from_str(&config.api_key)
            .map_err(|err| AppError::config(format!("Invalid GAME_API_KEY: {err}")))?;
        let bearer = HeaderValue::from_str(&format!("Bearer {}", config.api_key))
            .map_err(|err| AppError::config(format!("Invalid GAME_API_KEY: {err}")))?;

        let mut headers = HeaderMap::new();
        headers.insert("apikey", api_key);
        headers.insert(AUTHORIZATION, bearer);

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()
            .map_err(|err| AppError::config(format!("Unable to build HTTP client: {err}")))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, resource: &str) -> String {
        format!("{}/{resource}", self.base_url)
    }

    async fn get_rows<T: DeserializeOwned>(
        &self,
        resource: &str,
        filters: &[(&str, String)],
    ) -> Result<Vec<T>, AppError> {
        let mut query: Vec<(&str, String)> = vec![("select", "*".to_string())];
        query.extend(filters.iter().cloned());

        let url = self.url(resource);
        debug!(%url, ?query, "GET remote rows");
        let rows = self
            .client
            .get(&url)
            .query(&query)
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<T>>()
            .await?;
        Ok(rows)
    }
}

#[async_trait]
impl GameApi for HttpGameApi {
    async fn categories(&self) -> Result<Vec<CategoryDto>, AppError> {
        self.get_rows("categories", &[]).await
    }

    async fn cards_for_category(&self, category_id: &str) -> Result<Vec<CardDto>, AppError> {
        self.get_rows("cards", &[("category_id", format!("eq.{category_id}"))])
            .await
    }

    async fn feature_flag(&self, flag_id: &str) -> Result<Vec<FeatureFlagDto>, AppError> {
        self.get_rows("feature_flags", &[("id", format!("eq.{flag_id}"))])
            .await
    }
}
