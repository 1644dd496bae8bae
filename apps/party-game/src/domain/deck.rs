//! Session deck: a shuffled, fixed-order card sequence with a cursor.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::domain::GameCard;

/// Cards for one session.
///
/// The order is fixed when the deck is built and never reshuffled. A deck is
/// never empty, so there is always a current card and
/// `cursor < cards.len()` holds for its whole lifetime.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<GameCard>,
    cursor: usize,
}

impl Deck {
    /// Shuffle `cards` uniformly and place the cursor on the first card.
    ///
    /// Returns `None` when there are no cards.
    pub fn shuffled<R: Rng + ?Sized>(mut cards: Vec<GameCard>, rng: &mut R) -> Option<Self> {
        if cards.is_empty() {
            return None;
        }
        cards.shuffle(rng);
        Some(Self { cards, cursor: 0 })
    }

    pub fn current(&self) -> &GameCard {
        &self.cards[self.cursor]
    }

    pub fn has_more(&self) -> bool {
        self.cursor < self.cards.len() - 1
    }

    /// Move to the next card. Returns false (and stays put) on the last card.
    pub fn advance(&mut self) -> bool {
        if self.has_more() {
            self.cursor += 1;
            true
        } else {
            false
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[GameCard] {
        &self.cards
    }
}
