//! Cache-first game repository.
//!
//! Cards are kept as the serialized wire JSON keyed by card id and decoded on
//! every read, mirroring how the device database stores them. Syncs upsert
//! (insert or replace by id) and never delete; a failed sync leaves the
//! cache untouched.

use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use tracing::{debug, info};

use crate::adapters::dto::{CardDto, CategoryDto};
use crate::adapters::remote_api::GameApi;
use crate::config::locale::Locale;
use crate::domain::{Category, GameCard};
use crate::error::AppError;
use crate::errors::domain::{DomainError, InfraErrorKind};
use crate::repos::{CardRepository, CategoryLookup, FeatureFlags};

#[derive(Debug, Clone)]
struct CachedCard {
    category_id: String,
    content_json: String,
}

pub struct CachedGameRepository {
    api: Arc<dyn GameApi>,
    locale: Locale,
    cards: DashMap<String, CachedCard>,
    categories: DashMap<String, CategoryDto>,
}

impl CachedGameRepository {
    pub fn new(api: Arc<dyn GameApi>, locale: Locale) -> Self {
        Self {
            api,
            locale,
            cards: DashMap::new(),
            categories: DashMap::new(),
        }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Refresh the category table from the remote API
    pub async fn sync_categories(&self) -> Result<(), AppError> {
        let dtos = self.api.categories().await?;
        let count = dtos.len();
        for dto in dtos {
            self.categories.insert(dto.id.clone(), dto);
        }
        info!(count, "Categories synced");
        Ok(())
    }

    /// All cached categories, ordered by id
    pub fn categories(&self) -> Vec<Category> {
        let mut categories: Vec<Category> = self
            .categories
            .iter()
            .map(|entry| entry.value().to_domain(self.locale))
            .collect();
        categories.sort_by(|a, b| a.id.cmp(&b.id));
        categories
    }

    /// Drop every cached card of a category. Returns how many were removed.
    pub fn clear_cards_for_category(&self, category_id: &str) -> usize {
        let before = self.cards.len();
        self.cards.retain(|_, card| card.category_id != category_id);
        before - self.cards.len()
    }

    pub fn cached_card_count(&self, category_id: &str) -> usize {
        self.cards
            .iter()
            .filter(|entry| entry.value().category_id == category_id)
            .count()
    }

    fn store_card(&self, dto: &CardDto) -> Result<(), AppError> {
        let content_json = serde_json::to_string(dto)?;
        self.cards.insert(
            dto.id.clone(),
            CachedCard {
                category_id: dto.category_id.clone(),
                content_json,
            },
        );
        Ok(())
    }
}

#[async_trait]
impl CardRepository for CachedGameRepository {
    async fn cards_for_category(&self, category_id: &str) -> Result<Vec<GameCard>, AppError> {
        let mut rows: Vec<(String, String)> = self
            .cards
            .iter()
            .filter(|entry| entry.value().category_id == category_id)
            .map(|entry| (entry.key().clone(), entry.value().content_json.clone()))
            .collect();
        rows.sort_by(|a, b| a.0.cmp(&b.0));

        rows.iter()
            .map(|(id, json)| {
                serde_json::from_str::<CardDto>(json)
                    .map(|dto| dto.to_domain(self.locale))
                    .map_err(|err| {
                        AppError::from(DomainError::infra(
                            InfraErrorKind::DataCorruption,
                            format!("Corrupt cached card {id}: {err}"),
                        ))
                    })
            })
            .collect()
    }

    async fn sync_cards_for_category(&self, category_id: &str) -> Result<(), AppError> {
        let dtos = self.api.cards_for_category(category_id).await?;
        for dto in &dtos {
            self.store_card(dto)?;
        }
        debug!(category_id, count = dtos.len(), "Cards synced");
        Ok(())
    }
}

#[async_trait]
impl CategoryLookup for CachedGameRepository {
    async fn category_by_id(&self, category_id: &str) -> Result<Option<Category>, AppError> {
        Ok(self
            .categories
            .get(category_id)
            .map(|entry| entry.value().to_domain(self.locale)))
    }
}

#[async_trait]
impl FeatureFlags for CachedGameRepository {
    async fn is_enabled(&self, flag_id: &str) -> Result<bool, AppError> {
        let flags = self.api.feature_flag(flag_id).await?;
        Ok(flags.first().is_some_and(|flag| flag.is_active))
    }
}
