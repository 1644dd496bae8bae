use async_trait::async_trait;

use crate::domain::Category;
use crate::error::AppError;

#[async_trait]
pub trait CategoryLookup: Send + Sync {
    async fn category_by_id(&self, category_id: &str) -> Result<Option<Category>, AppError>;
}
