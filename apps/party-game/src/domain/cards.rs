//! Card types: the closed set of card variants a deck can hold.

/// A single playable card.
///
/// Cards are immutable once loaded. Every variant carries its own id and the
/// category it belongs to; title, text and penalty are derived by matching
/// on the variant so adding a variant forces every consumer to handle it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GameCard {
    /// Question with a known answer; a wrong answer costs `penalty` drinks.
    Trivia {
        id: String,
        category_id: String,
        question: String,
        answer: String,
        options: Vec<String>,
        penalty: u32,
    },
    /// Dare-style challenge; refusing costs `penalty` drinks.
    Challenge {
        id: String,
        category_id: String,
        title: String,
        description: String,
        penalty: u32,
    },
    /// Standing rule that applies to the table, optionally for a duration.
    Rule {
        id: String,
        category_id: String,
        title: String,
        rule: String,
        duration: Option<String>,
    },
}

impl GameCard {
    pub fn id(&self) -> &str {
        match self {
            GameCard::Trivia { id, .. }
            | GameCard::Challenge { id, .. }
            | GameCard::Rule { id, .. } => id,
        }
    }

    pub fn category_id(&self) -> &str {
        match self {
            GameCard::Trivia { category_id, .. }
            | GameCard::Challenge { category_id, .. }
            | GameCard::Rule { category_id, .. } => category_id,
        }
    }

    /// Heading shown on the card face. Trivia cards have none.
    pub fn title(&self) -> Option<&str> {
        match self {
            GameCard::Trivia { .. } => None,
            GameCard::Challenge { title, .. } | GameCard::Rule { title, .. } => Some(title.as_str()),
        }
    }

    /// Main text shown on the card face
    pub fn description(&self) -> &str {
        match self {
            GameCard::Trivia { question, .. } => question,
            GameCard::Challenge { description, .. } => description,
            GameCard::Rule { rule, .. } => rule,
        }
    }

    /// Penalty points for the current player. Rules never carry one.
    pub fn penalty(&self) -> u32 {
        match self {
            GameCard::Trivia { penalty, .. } | GameCard::Challenge { penalty, .. } => *penalty,
            GameCard::Rule { .. } => 0,
        }
    }

    pub fn kind(&self) -> CardKind {
        match self {
            GameCard::Trivia { .. } => CardKind::Trivia,
            GameCard::Challenge { .. } => CardKind::Challenge,
            GameCard::Rule { .. } => CardKind::Rule,
        }
    }

    /// Convenience constructor for a rule card
    pub fn rule(
        id: impl Into<String>,
        category_id: impl Into<String>,
        title: impl Into<String>,
        rule: impl Into<String>,
    ) -> Self {
        GameCard::Rule {
            id: id.into(),
            category_id: category_id.into(),
            title: title.into(),
            rule: rule.into(),
            duration: None,
        }
    }

    /// Convenience constructor for a challenge card
    pub fn challenge(
        id: impl Into<String>,
        category_id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        penalty: u32,
    ) -> Self {
        GameCard::Challenge {
            id: id.into(),
            category_id: category_id.into(),
            title: title.into(),
            description: description.into(),
            penalty,
        }
    }
}

/// Variant discriminant, useful for logging and tallies
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum CardKind {
    Trivia,
    Challenge,
    Rule,
}

impl CardKind {
    pub fn as_str(self) -> &'static str {
        match self {
            CardKind::Trivia => "trivia",
            CardKind::Challenge => "challenge",
            CardKind::Rule => "rule",
        }
    }
}
