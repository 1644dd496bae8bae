//! In-memory player roster.

use async_trait::async_trait;
use parking_lot::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::domain::Player;
use crate::error::AppError;
use crate::errors::domain::{DomainError, ValidationKind};
use crate::repos::PlayerStore;

/// Ordered list of players at the table.
#[derive(Debug, Default)]
pub struct PlayerRoster {
    players: RwLock<Vec<Player>>,
}

impl PlayerRoster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_players(players: Vec<Player>) -> Self {
        Self {
            players: RwLock::new(players),
        }
    }

    /// Append a player with a fresh id. Blank names are rejected.
    pub fn add_player(&self, name: &str) -> Result<Player, AppError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DomainError::validation(
                ValidationKind::BlankPlayerName,
                "Player name must not be blank",
            )
            .into());
        }
        let player = Player::new(Uuid::new_v4().to_string(), name);
        self.players.write().push(player.clone());
        debug!(player_id = %player.id, "Player added");
        Ok(player)
    }

    /// Remove every player with `player_id`. Returns whether anything changed.
    pub fn remove_player(&self, player_id: &str) -> bool {
        let mut players = self.players.write();
        let before = players.len();
        players.retain(|p| p.id != player_id);
        before != players.len()
    }

    /// Replace the whole roster
    pub fn save_players(&self, players: Vec<Player>) {
        *self.players.write() = players;
    }

    pub fn snapshot(&self) -> Vec<Player> {
        self.players.read().clone()
    }

    pub fn to_json(&self) -> Result<String, AppError> {
        Ok(serde_json::to_string(&*self.players.read())?)
    }

    pub fn from_json(raw: &str) -> Result<Self, AppError> {
        let players: Vec<Player> = serde_json::from_str(raw)?;
        Ok(Self::with_players(players))
    }
}

#[async_trait]
impl PlayerStore for PlayerRoster {
    async fn players(&self) -> Result<Vec<Player>, AppError> {
        Ok(self.snapshot())
    }
}
