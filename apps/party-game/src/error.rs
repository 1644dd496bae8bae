use thiserror::Error;

use crate::errors::domain::{DomainError, InfraErrorKind, ValidationKind};

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {detail}")]
    Validation { code: &'static str, detail: String },
    #[error("Network error: {detail}")]
    Network { detail: String },
    #[error("Storage error: {detail}")]
    Storage { detail: String },
    #[error("Decode error: {detail}")]
    Decode { detail: String },
    #[error("Configuration error: {detail}")]
    Config { detail: String },
}

impl AppError {
    /// Stable machine-readable code for this error
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation { code, .. } => code,
            AppError::Network { .. } => "NETWORK_ERROR",
            AppError::Storage { .. } => "STORAGE_ERROR",
            AppError::Decode { .. } => "DECODE_ERROR",
            AppError::Config { .. } => "CONFIG_ERROR",
        }
    }

    /// Human-readable detail without the category prefix
    pub fn detail(&self) -> &str {
        match self {
            AppError::Validation { detail, .. }
            | AppError::Network { detail }
            | AppError::Storage { detail }
            | AppError::Decode { detail }
            | AppError::Config { detail } => detail,
        }
    }

    pub fn invalid(code: &'static str, detail: impl Into<String>) -> Self {
        Self::Validation {
            code,
            detail: detail.into(),
        }
    }

    pub fn network(detail: impl Into<String>) -> Self {
        Self::Network {
            detail: detail.into(),
        }
    }

    pub fn storage(detail: impl Into<String>) -> Self {
        Self::Storage {
            detail: detail.into(),
        }
    }

    pub fn decode(detail: impl Into<String>) -> Self {
        Self::Decode {
            detail: detail.into(),
        }
    }

    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(ValidationKind::BlankPlayerName, detail) => {
                AppError::invalid("BLANK_PLAYER_NAME", detail)
            }
            // Both are local store failures as far as callers are concerned
            DomainError::Infra(
                InfraErrorKind::Storage | InfraErrorKind::DataCorruption,
                detail,
            ) => AppError::storage(detail),
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            AppError::decode(err.to_string())
        } else {
            AppError::network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::decode(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::storage(err.to_string())
    }
}
