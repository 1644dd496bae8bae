use async_trait::async_trait;

use crate::domain::GameCard;
use crate::error::AppError;

/// Local card cache with an explicit remote refresh.
#[async_trait]
pub trait CardRepository: Send + Sync {
    /// Current cached cards for a category. Unknown ids yield an empty list.
    async fn cards_for_category(&self, category_id: &str) -> Result<Vec<GameCard>, AppError>;

    /// Refresh the local cache for a category from the remote source.
    async fn sync_cards_for_category(&self, category_id: &str) -> Result<(), AppError>;
}
