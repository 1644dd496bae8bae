use async_trait::async_trait;

use crate::error::AppError;

/// Remote boolean switches.
#[async_trait]
pub trait FeatureFlags: Send + Sync {
    async fn is_enabled(&self, flag_id: &str) -> Result<bool, AppError>;
}
