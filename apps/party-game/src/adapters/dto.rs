//! Wire types for the remote card API and their domain conversions.
//!
//! Card content has no explicit tag: the variant is picked from the keys
//! present (`question` → trivia, `description` → challenge, `rule` → rule).
//! Every text field may carry an `_en` translation that wins when the
//! locale is English.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::locale::Locale;
use crate::domain::{Category, GameCard};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardDto {
    pub id: String,
    pub category_id: String,
    #[serde(rename = "type")]
    pub card_type: String,
    pub content: CardContentDto,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CardContentDto {
    Trivia(TriviaContentDto),
    Challenge(ChallengeContentDto),
    Rule(RuleContentDto),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriviaContentDto {
    pub question: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question_en: Option<String>,
    pub answer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer_en: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options_en: Option<Vec<String>>,
    pub penalty: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChallengeContentDto {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_en: Option<String>,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description_en: Option<String>,
    pub penalty: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleContentDto {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_en: Option<String>,
    pub rule: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rule_en: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_en: Option<String>,
}

enum ContentKind {
    Trivia,
    Challenge,
    Rule,
}

impl<'de> Deserialize<'de> for CardContentDto {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        let kind = {
            let object = value
                .as_object()
                .ok_or_else(|| <D::Error as de::Error>::custom("card content must be a JSON object"))?;
            if object.contains_key("question") {
                ContentKind::Trivia
            } else if object.contains_key("description") {
                ContentKind::Challenge
            } else if object.contains_key("rule") {
                ContentKind::Rule
            } else {
                let keys: Vec<&str> = object.keys().map(String::as_str).collect();
                return Err(de::Error::custom(format!(
                    "unable to determine card content type, keys: {keys:?}"
                )));
            }
        };

        let content = match kind {
            ContentKind::Trivia => serde_json::from_value(value).map(CardContentDto::Trivia),
            ContentKind::Challenge => serde_json::from_value(value).map(CardContentDto::Challenge),
            ContentKind::Rule => serde_json::from_value(value).map(CardContentDto::Rule),
        };
        content.map_err(de::Error::custom)
    }
}

fn localized(locale: Locale, base: &str, english: Option<&str>) -> String {
    match english {
        Some(en) if locale.is_english() => en.to_string(),
        _ => base.to_string(),
    }
}

impl CardDto {
    pub fn to_domain(&self, locale: Locale) -> GameCard {
        let id = self.id.clone();
        let category_id = self.category_id.clone();
        match &self.content {
            CardContentDto::Trivia(c) => GameCard::Trivia {
                id,
                category_id,
                question: localized(locale, &c.question, c.question_en.as_deref()),
                answer: localized(locale, &c.answer, c.answer_en.as_deref()),
                options: match (&c.options_en, &c.options) {
                    (Some(en), _) if locale.is_english() => en.clone(),
                    (_, Some(options)) => options.clone(),
                    (_, None) => Vec::new(),
                },
                penalty: c.penalty,
            },
            CardContentDto::Challenge(c) => GameCard::Challenge {
                id,
                category_id,
                title: localized(locale, &c.title, c.title_en.as_deref()),
                description: localized(locale, &c.description, c.description_en.as_deref()),
                penalty: c.penalty,
            },
            CardContentDto::Rule(c) => GameCard::Rule {
                id,
                category_id,
                title: localized(locale, &c.title, c.title_en.as_deref()),
                rule: localized(locale, &c.rule, c.rule_en.as_deref()),
                duration: match (&c.duration_en, &c.duration) {
                    (Some(en), _) if locale.is_english() => Some(en.clone()),
                    (_, duration) => duration.clone(),
                },
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryDto {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_en: Option<String>,
    #[serde(default)]
    pub is_premium: bool,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style_key: Option<String>,
}

impl CategoryDto {
    pub fn to_domain(&self, locale: Locale) -> Category {
        Category {
            id: self.id.clone(),
            name: localized(locale, &self.name, self.name_en.as_deref()),
            is_premium: self.is_premium,
            price: self.price,
            version: self.version.clone(),
            style_key: self.style_key.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureFlagDto {
    pub id: String,
    pub is_active: bool,
}
