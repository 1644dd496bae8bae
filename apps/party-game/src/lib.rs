#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod adapters;
pub mod bootstrap;
pub mod config;
pub mod domain;
pub mod error;
pub mod errors;
pub mod repos;
pub mod services;
pub mod telemetry;

// Re-exports for public API
pub use adapters::{CachedGameRepository, FixtureGameApi, GameApi, HttpGameApi, PlayerRoster};
pub use bootstrap::{build_game, GameBuilder, GameStack};
pub use config::api::ApiConfig;
pub use config::locale::Locale;
pub use config::session::SessionSettings;
pub use domain::{ActiveTurn, CardKind, Category, GameCard, GameState, Player, SessionKey};
pub use error::AppError;
pub use repos::{CardRepository, CategoryLookup, FeatureFlags, PlayerStore};
pub use services::{CatalogService, CatalogState, GameSessionController};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    party_test_support::test_logging::init();
}
