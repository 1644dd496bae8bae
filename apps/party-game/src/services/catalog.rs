//! Category catalog for the home screen.

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::warn;

use crate::adapters::CachedGameRepository;
use crate::domain::Category;
use crate::error::AppError;

#[derive(Debug, Clone, PartialEq)]
pub enum CatalogState {
    /// Nothing cached yet and the first sync has not finished
    Loading,
    Ready(Vec<Category>),
    /// The sync failed and there is nothing cached to fall back on
    Failed(String),
}

#[derive(Debug, Default)]
struct SyncStatus {
    completed: bool,
    last_error: Option<String>,
}

pub struct CatalogService {
    repo: Arc<CachedGameRepository>,
    status: Mutex<SyncStatus>,
}

impl CatalogService {
    pub fn new(repo: Arc<CachedGameRepository>) -> Self {
        Self {
            repo,
            status: Mutex::new(SyncStatus::default()),
        }
    }

    /// Refresh categories from the remote API. The outcome is remembered
    /// for [`state`](Self::state) either way.
    pub async fn sync(&self) -> Result<(), AppError> {
        let result = self.repo.sync_categories().await;
        let mut status = self.status.lock();
        status.completed = true;
        status.last_error = match &result {
            Ok(()) => None,
            Err(err) => {
                warn!(error = %err, "Category sync failed");
                Some(err.detail().to_string())
            }
        };
        result
    }

    /// Cached categories, free ones first
    pub fn list(&self) -> Vec<Category> {
        let mut categories = self.repo.categories();
        categories.sort_by_key(|c| c.is_premium);
        categories
    }

    pub fn state(&self) -> CatalogState {
        let categories = self.list();
        if !categories.is_empty() {
            return CatalogState::Ready(categories);
        }
        let status = self.status.lock();
        match (status.completed, &status.last_error) {
            (false, _) => CatalogState::Loading,
            (true, Some(err)) => CatalogState::Failed(err.clone()),
            (true, None) => CatalogState::Ready(categories),
        }
    }
}
