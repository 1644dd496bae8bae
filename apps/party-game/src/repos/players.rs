use async_trait::async_trait;

use crate::domain::Player;
use crate::error::AppError;

#[async_trait]
pub trait PlayerStore: Send + Sync {
    /// Ordered snapshot of the current roster
    async fn players(&self) -> Result<Vec<Player>, AppError>;
}
