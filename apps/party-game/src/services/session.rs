//! Game session controller.
//!
//! Turns a category's cards and the player roster into a shuffled,
//! turn-by-turn sequence of [`GameState`] publications.
//!
//! Every `load` opens a new generation. Async work for a load carries the
//! generation it started with and re-checks it at each resume point; the
//! final publish happens under the same lock that bumps the generation, so
//! a superseded load can never overwrite a newer one (last load wins, not
//! last completion).

use std::sync::Arc;

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::config::session::SessionSettings;
use crate::domain::{ActiveTurn, Deck, GameState, PlayerRotation, SessionKey};
use crate::error::AppError;
use crate::repos::{CardRepository, CategoryLookup, FeatureFlags, PlayerStore};

/// Working state of one session. Style and flag are fixed at load time.
#[derive(Debug)]
struct Session {
    key: SessionKey,
    deck: Deck,
    rotation: PlayerRotation,
    style_key: Option<String>,
    use_alternate_ui: bool,
}

impl Session {
    fn view(&self) -> GameState {
        GameState::Active(ActiveTurn {
            card: self.deck.current().clone(),
            player: self.rotation.current().cloned(),
            session_key: self.key,
            style_key: self.style_key.clone(),
            use_alternate_ui: self.use_alternate_ui,
            has_more: self.deck.has_more(),
        })
    }
}

#[derive(Debug, Default)]
struct Inner {
    generation: u64,
    session: Option<Session>,
}

/// Identity of an in-flight load, captured synchronously when it starts
#[derive(Debug, Clone)]
struct LoadTicket {
    generation: u64,
    session_key: SessionKey,
    category_id: String,
}

enum Prepared {
    Ready(Session),
    NoCards,
    Superseded,
}

pub struct GameSessionController {
    cards: Arc<dyn CardRepository>,
    categories: Arc<dyn CategoryLookup>,
    flags: Arc<dyn FeatureFlags>,
    players: Arc<dyn PlayerStore>,
    settings: SessionSettings,
    rng: Mutex<StdRng>,
    inner: Mutex<Inner>,
    state_tx: watch::Sender<GameState>,
}

impl GameSessionController {
    pub fn new(
        cards: Arc<dyn CardRepository>,
        categories: Arc<dyn CategoryLookup>,
        flags: Arc<dyn FeatureFlags>,
        players: Arc<dyn PlayerStore>,
        settings: SessionSettings,
    ) -> Self {
        let (state_tx, _rx) = watch::channel(GameState::Loading);
        Self {
            cards,
            categories,
            flags,
            players,
            settings,
            rng: Mutex::new(StdRng::from_os_rng()),
            inner: Mutex::new(Inner::default()),
            state_tx,
        }
    }

    /// Use a fixed shuffle seed (reproducible decks)
    pub fn with_seed(self, seed: u64) -> Self {
        *self.rng.lock() = StdRng::seed_from_u64(seed);
        self
    }

    pub fn subscribe(&self) -> watch::Receiver<GameState> {
        self.state_tx.subscribe()
    }

    pub fn current_state(&self) -> GameState {
        self.state_tx.borrow().clone()
    }

    /// Start a new session for `category_id` and run it to its first state.
    pub async fn load(&self, category_id: &str) {
        let ticket = self.begin(category_id);
        self.complete(ticket).await;
    }

    /// Like [`load`](Self::load) but runs the async part on the runtime.
    ///
    /// The reset to `Loading` happens before this returns.
    pub fn spawn_load(self: &Arc<Self>, category_id: &str) -> JoinHandle<()> {
        let ticket = self.begin(category_id);
        let this = Arc::clone(self);
        tokio::spawn(async move { this.complete(ticket).await })
    }

    /// Move to the next card and player. No-op unless a session is active.
    pub fn advance(&self) {
        let mut inner = self.inner.lock();
        let Some(session) = inner.session.as_mut() else {
            debug!("Advance ignored, no active session");
            return;
        };

        if session.deck.advance() {
            session.rotation.advance();
            debug!(
                session_key = %session.key,
                card_cursor = session.deck.cursor(),
                player_cursor = session.rotation.cursor(),
                "Turn advanced"
            );
            let state = session.view();
            self.state_tx.send_replace(state);
        } else {
            let session_key = session.key;
            inner.session = None;
            info!(%session_key, "Deck exhausted");
            self.state_tx.send_replace(GameState::Empty { session_key });
        }
    }

    fn begin(&self, category_id: &str) -> LoadTicket {
        let mut inner = self.inner.lock();
        inner.generation += 1;
        inner.session = None;
        let ticket = LoadTicket {
            generation: inner.generation,
            session_key: SessionKey::generate(),
            category_id: category_id.to_string(),
        };
        self.state_tx.send_replace(GameState::Loading);
        info!(
            category_id,
            generation = ticket.generation,
            session_key = %ticket.session_key,
            "Starting game session"
        );
        ticket
    }

    async fn complete(&self, ticket: LoadTicket) {
        let outcome = self.prepare(&ticket).await;

        let mut inner = self.inner.lock();
        if inner.generation != ticket.generation {
            debug!(
                generation = ticket.generation,
                current = inner.generation,
                "Discarding superseded load"
            );
            return;
        }

        let state = match outcome {
            Ok(Prepared::Ready(session)) => {
                info!(
                    category_id = %ticket.category_id,
                    session_key = %session.key,
                    cards = session.deck.len(),
                    players = session.rotation.players().len(),
                    "Game session ready"
                );
                let state = session.view();
                inner.session = Some(session);
                state
            }
            Ok(Prepared::NoCards) => {
                info!(category_id = %ticket.category_id, "No cards for category");
                GameState::Empty {
                    session_key: ticket.session_key,
                }
            }
            // A stale ticket stays stale, so the check above already returned
            Ok(Prepared::Superseded) => return,
            Err(err) => {
                warn!(category_id = %ticket.category_id, error = %err, "Game session failed");
                GameState::Failed {
                    reason: err.detail().to_string(),
                }
            }
        };
        self.state_tx.send_replace(state);
    }

    async fn prepare(&self, ticket: &LoadTicket) -> Result<Prepared, AppError> {
        let category_id = ticket.category_id.as_str();

        let (style_key, use_alternate_ui, players) = tokio::join!(
            self.style_key(category_id),
            self.alternate_ui_enabled(),
            self.players.players(),
        );
        let players = players?;
        if self.is_stale(ticket) {
            return Ok(Prepared::Superseded);
        }

        if let Err(err) = self.cards.sync_cards_for_category(category_id).await {
            warn!(category_id, error = %err, "Card sync failed, using cached cards");
        }
        if self.is_stale(ticket) {
            return Ok(Prepared::Superseded);
        }

        let cards = self.cards.cards_for_category(category_id).await?;
        let deck = {
            let mut rng = self.rng.lock();
            Deck::shuffled(cards, &mut *rng)
        };

        Ok(match deck {
            Some(deck) => Prepared::Ready(Session {
                key: ticket.session_key,
                deck,
                rotation: PlayerRotation::new(players),
                style_key,
                use_alternate_ui,
            }),
            None => Prepared::NoCards,
        })
    }

    async fn style_key(&self, category_id: &str) -> Option<String> {
        match self.categories.category_by_id(category_id).await {
            Ok(category) => category.and_then(|c| c.style_key),
            Err(err) => {
                warn!(category_id, error = %err, "Category style lookup failed");
                None
            }
        }
    }

    async fn alternate_ui_enabled(&self) -> bool {
        let flag_id = self.settings.alternate_ui_flag.as_str();
        self.flags.is_enabled(flag_id).await.unwrap_or_else(|err| {
            warn!(flag_id, error = %err, "Feature flag lookup failed");
            false
        })
    }

    fn is_stale(&self, ticket: &LoadTicket) -> bool {
        self.inner.lock().generation != ticket.generation
    }
}
