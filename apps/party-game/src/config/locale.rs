use std::env;

/// Content language used when converting wire cards and categories.
///
/// Cards are authored in Spanish; English text is optional per field and
/// falls back to the Spanish original when absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    Spanish,
    English,
}

impl Locale {
    /// Resolve the locale from `GAME_LOCALE`, then `LANG` (defaults to Spanish)
    pub fn from_env() -> Self {
        env::var("GAME_LOCALE")
            .or_else(|_| env::var("LANG"))
            .map(|tag| Self::from_tag(&tag))
            .unwrap_or_default()
    }

    /// Parse a language tag such as `en`, `en_US.UTF-8` or `es-MX`
    pub fn from_tag(tag: &str) -> Self {
        let language = tag
            .split(['_', '-', '.'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        if language == "en" {
            Locale::English
        } else {
            Locale::Spanish
        }
    }

    pub fn is_english(self) -> bool {
        self == Locale::English
    }
}
