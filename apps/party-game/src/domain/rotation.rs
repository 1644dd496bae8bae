use crate::domain::Player;

/// Round-robin pointer over a roster snapshot.
///
/// With a non-empty roster the cursor is always in `[0, players.len())`.
/// With an empty roster there is never a current player.
#[derive(Debug, Clone, Default)]
pub struct PlayerRotation {
    players: Vec<Player>,
    cursor: usize,
}

impl PlayerRotation {
    pub fn new(players: Vec<Player>) -> Self {
        Self { players, cursor: 0 }
    }

    pub fn current(&self) -> Option<&Player> {
        self.players.get(self.cursor)
    }

    /// Pass the turn to the next player, wrapping at the end of the roster
    pub fn advance(&mut self) {
        if !self.players.is_empty() {
            self.cursor = (self.cursor + 1) % self.players.len();
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }
}
