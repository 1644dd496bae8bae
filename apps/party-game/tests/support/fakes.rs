// Scriptable in-memory collaborators for driving the session controller.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use party_game::{
    AppError, CardRepository, Category, CategoryLookup, FeatureFlags, GameCard,
    GameSessionController, Player, PlayerStore, SessionSettings,
};
use tokio::sync::Notify;

/// Card cache plus a "remote" side that a sync copies into the cache.
#[derive(Default)]
pub struct FakeCards {
    cache: Mutex<HashMap<String, Vec<GameCard>>>,
    remote: Mutex<HashMap<String, Vec<GameCard>>>,
    read_error: Mutex<Option<String>>,
    read_errors_by_category: Mutex<HashMap<String, String>>,
    sync_error: Mutex<Option<String>>,
    sync_gates: Mutex<HashMap<String, Arc<Notify>>>,
    sync_calls: AtomicUsize,
}

impl FakeCards {
    /// Put cards straight into the local cache
    pub fn set_cached(&self, category_id: &str, cards: Vec<GameCard>) {
        self.cache
            .lock()
            .unwrap()
            .insert(category_id.to_string(), cards);
    }

    /// Cards that only become visible after a successful sync
    pub fn set_remote(&self, category_id: &str, cards: Vec<GameCard>) {
        self.remote
            .lock()
            .unwrap()
            .insert(category_id.to_string(), cards);
    }

    pub fn fail_reads(&self, message: Option<&str>) {
        *self.read_error.lock().unwrap() = message.map(str::to_string);
    }

    pub fn fail_reads_for(&self, category_id: &str, message: &str) {
        self.read_errors_by_category
            .lock()
            .unwrap()
            .insert(category_id.to_string(), message.to_string());
    }

    pub fn fail_syncs(&self, message: Option<&str>) {
        *self.sync_error.lock().unwrap() = message.map(str::to_string);
    }

    /// Make syncs for `category_id` wait until the returned gate is notified
    pub fn gate_sync(&self, category_id: &str) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        self.sync_gates
            .lock()
            .unwrap()
            .insert(category_id.to_string(), gate.clone());
        gate
    }

    pub fn sync_calls(&self) -> usize {
        self.sync_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CardRepository for FakeCards {
    async fn cards_for_category(&self, category_id: &str) -> Result<Vec<GameCard>, AppError> {
        if let Some(message) = self.read_error.lock().unwrap().clone() {
            return Err(AppError::storage(message));
        }
        if let Some(message) = self
            .read_errors_by_category
            .lock()
            .unwrap()
            .get(category_id)
            .cloned()
        {
            return Err(AppError::storage(message));
        }
        Ok(self
            .cache
            .lock()
            .unwrap()
            .get(category_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn sync_cards_for_category(&self, category_id: &str) -> Result<(), AppError> {
        self.sync_calls.fetch_add(1, Ordering::SeqCst);
        let gate = self.sync_gates.lock().unwrap().get(category_id).cloned();
        if let Some(gate) = gate {
            gate.notified().await;
        }
        if let Some(message) = self.sync_error.lock().unwrap().clone() {
            return Err(AppError::network(message));
        }
        let remote = self.remote.lock().unwrap().get(category_id).cloned();
        if let Some(cards) = remote {
            self.set_cached(category_id, cards);
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct FakeCategories {
    styles: Mutex<HashMap<String, String>>,
    fail: AtomicBool,
}

impl FakeCategories {
    pub fn set_style(&self, category_id: &str, style_key: &str) {
        self.styles
            .lock()
            .unwrap()
            .insert(category_id.to_string(), style_key.to_string());
    }

    pub fn fail(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl CategoryLookup for FakeCategories {
    async fn category_by_id(&self, category_id: &str) -> Result<Option<Category>, AppError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(AppError::storage("category table unavailable"));
        }
        Ok(Some(Category {
            id: category_id.to_string(),
            name: category_id.to_string(),
            is_premium: false,
            price: 0.0,
            version: "1".to_string(),
            style_key: self.styles.lock().unwrap().get(category_id).cloned(),
        }))
    }
}

#[derive(Default)]
pub struct FakeFlags {
    enabled: AtomicBool,
    fail: AtomicBool,
    requested: Mutex<Vec<String>>,
}

impl FakeFlags {
    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::SeqCst);
    }

    pub fn fail(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl FeatureFlags for FakeFlags {
    async fn is_enabled(&self, flag_id: &str) -> Result<bool, AppError> {
        self.requested.lock().unwrap().push(flag_id.to_string());
        if self.fail.load(Ordering::SeqCst) {
            return Err(AppError::network("flag service offline"));
        }
        Ok(self.enabled.load(Ordering::SeqCst))
    }
}

#[derive(Default)]
pub struct FakePlayers {
    players: Mutex<Vec<Player>>,
    fail: AtomicBool,
}

impl FakePlayers {
    pub fn set(&self, players: Vec<Player>) {
        *self.players.lock().unwrap() = players;
    }

    pub fn fail(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl PlayerStore for FakePlayers {
    async fn players(&self) -> Result<Vec<Player>, AppError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(AppError::storage("roster unreadable"));
        }
        Ok(self.players.lock().unwrap().clone())
    }
}

/// All four fakes plus a way to build a controller over them
#[derive(Default)]
pub struct Harness {
    pub cards: Arc<FakeCards>,
    pub categories: Arc<FakeCategories>,
    pub flags: Arc<FakeFlags>,
    pub players: Arc<FakePlayers>,
}

impl Harness {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn controller(&self) -> Arc<GameSessionController> {
        Arc::new(self.build())
    }

    pub fn seeded_controller(&self, seed: u64) -> Arc<GameSessionController> {
        Arc::new(self.build().with_seed(seed))
    }

    fn build(&self) -> GameSessionController {
        GameSessionController::new(
            self.cards.clone(),
            self.categories.clone(),
            self.flags.clone(),
            self.players.clone(),
            SessionSettings::default(),
        )
    }
}
