// JSON fixture files for the file-backed API.

use std::path::PathBuf;

use serde_json::{json, Value};
use tempfile::TempDir;

pub struct FixtureFile {
    // Keeps the directory alive for the test's duration
    _dir: TempDir,
    pub path: PathBuf,
}

impl FixtureFile {
    pub fn new(content: &Value) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("fixture.json");
        let file = Self { _dir: dir, path };
        file.write(content);
        file
    }

    pub fn write(&self, content: &Value) {
        std::fs::write(&self.path, content.to_string()).expect("write fixture");
    }

    pub fn write_raw(&self, raw: &str) {
        std::fs::write(&self.path, raw).expect("write fixture");
    }

    pub fn remove(&self) {
        std::fs::remove_file(&self.path).expect("remove fixture");
    }
}

pub fn rule_card(id: &str, category_id: &str, rule: &str) -> Value {
    json!({
        "id": id,
        "category_id": category_id,
        "type": "rule",
        "content": { "title": id, "rule": rule }
    })
}

pub fn challenge_card(id: &str, category_id: &str, description: &str, penalty: u32) -> Value {
    json!({
        "id": id,
        "category_id": category_id,
        "type": "challenge",
        "content": {
            "title": "Reto",
            "title_en": "Challenge",
            "description": description,
            "penalty": penalty
        }
    })
}

/// Two categories, one premium, and the alternate UI flag switched on
pub fn sample() -> Value {
    json!({
        "categories": [
            {
                "id": "hot", "name": "Picante", "name_en": "Spicy",
                "is_premium": true, "price": 1.99, "version": "3",
                "style_key": "AURA_CYAN_GLOW"
            },
            {
                "id": "party", "name": "Fiesta", "name_en": "Party",
                "is_premium": false, "price": 0.0, "version": "7",
                "style_key": "AURA_NEON_PURPLE"
            }
        ],
        "cards": [
            rule_card("r1", "party", "Drink"),
            rule_card("r2", "party", "Dance"),
            challenge_card("c1", "hot", "Sing", 2)
        ],
        "feature_flags": [
            { "id": "use_new_game_ui", "is_active": true }
        ]
    })
}
