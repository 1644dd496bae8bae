use std::env;

/// Feature flag consulted at session start to pick the alternate card UI
pub const DEFAULT_ALTERNATE_UI_FLAG: &str = "use_new_game_ui";

/// Settings the session controller needs besides its collaborators
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSettings {
    pub alternate_ui_flag: String,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            alternate_ui_flag: DEFAULT_ALTERNATE_UI_FLAG.to_string(),
        }
    }
}

impl SessionSettings {
    /// Read overrides from the environment (`GAME_ALTERNATE_UI_FLAG`)
    pub fn from_env() -> Self {
        match env::var("GAME_ALTERNATE_UI_FLAG") {
            Ok(flag) if !flag.trim().is_empty() => Self {
                alternate_ui_flag: flag.trim().to_string(),
            },
            _ => Self::default(),
        }
    }
}
