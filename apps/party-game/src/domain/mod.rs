//! Domain layer: pure game types and helpers.

pub mod cards;
pub mod category;
pub mod deck;
pub mod game_state;
pub mod players;
pub mod rotation;

#[cfg(test)]
mod test_gens;

// Re-exports for ergonomics
pub use cards::{CardKind, GameCard};
pub use category::Category;
pub use deck::Deck;
pub use game_state::{ActiveTurn, GameState, SessionKey};
pub use players::Player;
pub use rotation::PlayerRotation;
