//! Wires the remote API, cache, roster and controller into one game.

use std::sync::Arc;

use tracing::warn;

use crate::adapters::{CachedGameRepository, GameApi, PlayerRoster};
use crate::config::locale::Locale;
use crate::config::session::SessionSettings;
use crate::error::AppError;
use crate::services::{CatalogService, GameSessionController};

/// Everything a runner needs to play: the controller plus the stores
/// behind it.
pub struct GameStack {
    pub repo: Arc<CachedGameRepository>,
    pub roster: Arc<PlayerRoster>,
    pub controller: Arc<GameSessionController>,
}

/// Builder for [`GameStack`] (used in both tests and main)
pub struct GameBuilder {
    api: Arc<dyn GameApi>,
    locale: Locale,
    players: Vec<String>,
    settings: SessionSettings,
    seed: Option<u64>,
}

impl GameBuilder {
    pub fn new(api: Arc<dyn GameApi>) -> Self {
        Self {
            api,
            locale: Locale::default(),
            players: Vec::new(),
            settings: SessionSettings::default(),
            seed: None,
        }
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    pub fn with_players(mut self, names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.players = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_settings(mut self, settings: SessionSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Build the stack and refresh the category table.
    ///
    /// Sessions read their style from cached categories, so the refresh
    /// happens before any load. A failed refresh is logged and the cached
    /// table is used as is.
    pub async fn build(self) -> Result<GameStack, AppError> {
        let repo = Arc::new(CachedGameRepository::new(self.api, self.locale));

        let roster = Arc::new(PlayerRoster::new());
        for name in &self.players {
            roster.add_player(name)?;
        }

        if let Err(err) = CatalogService::new(repo.clone()).sync().await {
            warn!(error = %err, "Category sync failed, sessions start without styles");
        }

        let mut controller = GameSessionController::new(
            repo.clone(),
            repo.clone(),
            repo.clone(),
            roster.clone(),
            self.settings,
        );
        if let Some(seed) = self.seed {
            controller = controller.with_seed(seed);
        }

        Ok(GameStack {
            repo,
            roster,
            controller: Arc::new(controller),
        })
    }
}

pub fn build_game(api: Arc<dyn GameApi>) -> GameBuilder {
    GameBuilder::new(api)
}
