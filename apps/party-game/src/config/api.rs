use std::env;
use std::time::Duration;

use crate::error::AppError;

const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Connection settings for the remote card API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub api_key: String,
    pub timeout: Duration,
}

impl ApiConfig {
    /// Builds the API configuration from environment variables
    pub fn from_env() -> Result<Self, AppError> {
        let base_url = must_var("GAME_API_URL")?;
        let api_key = must_var("GAME_API_KEY")?;
        let timeout = timeout()?;

        Ok(Self {
            base_url,
            api_key,
            timeout,
        })
    }
}

/// Get request timeout from environment (defaults to 10 seconds)
fn timeout() -> Result<Duration, AppError> {
    match env::var("GAME_API_TIMEOUT_SECS") {
        Ok(raw) => raw.parse::<u64>().map(Duration::from_secs).map_err(|_| {
            AppError::config(format!(
                "GAME_API_TIMEOUT_SECS must be a whole number of seconds, got: '{raw}'"
            ))
        }),
        Err(_) => Ok(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
    }
}

/// Get required environment variable or return error
fn must_var(name: &str) -> Result<String, AppError> {
    env::var(name)
        .map_err(|_| AppError::config(format!("Required environment variable '{name}' is not set")))
}
