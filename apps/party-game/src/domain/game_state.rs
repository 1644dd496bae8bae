//! Published view state of a game session.

use std::fmt;

use uuid::Uuid;

use crate::domain::{GameCard, Player};

/// Identity of one session instance.
///
/// Every `load` mints a new key, so two sessions for the same category
/// never share one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionKey(Uuid);

impl SessionKey {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for SessionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Everything the table needs to render the current turn.
///
/// All fields come from the same session; style and flag are captured once
/// per session and never change between turns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveTurn {
    pub card: GameCard,
    pub player: Option<Player>,
    pub session_key: SessionKey,
    pub style_key: Option<String>,
    pub use_alternate_ui: bool,
    pub has_more: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameState {
    Loading,
    Active(ActiveTurn),
    /// No cards to show: the category was empty or the deck is exhausted
    Empty {
        session_key: SessionKey,
    },
    Failed {
        reason: String,
    },
}

impl GameState {
    pub fn session_key(&self) -> Option<SessionKey> {
        match self {
            GameState::Active(turn) => Some(turn.session_key),
            GameState::Empty { session_key } => Some(*session_key),
            GameState::Loading | GameState::Failed { .. } => None,
        }
    }

    pub fn as_active(&self) -> Option<&ActiveTurn> {
        match self {
            GameState::Active(turn) => Some(turn),
            _ => None,
        }
    }
}
