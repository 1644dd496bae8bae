// Proptest generators for domain types.
// Card ids are unique by construction so permutation checks can compare ids.

use proptest::prelude::*;

use crate::domain::{GameCard, Player};

/// Shared config: `PROPTEST_CASES` overrides the case count, persistence off.
pub fn proptest_config() -> ProptestConfig {
    let cases = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|s| s.parse::<u32>().ok())
        .unwrap_or(64)
        .max(1);
    ProptestConfig {
        failure_persistence: None,
        cases,
        ..ProptestConfig::default()
    }
}

/// Generate a card of any variant with the given id
pub fn card_with_id(id: String) -> impl Strategy<Value = GameCard> {
    let category = "cat".to_string();
    prop_oneof![
        (0u32..5).prop_map({
            let (id, category) = (id.clone(), category.clone());
            move |penalty| GameCard::Trivia {
                id: id.clone(),
                category_id: category.clone(),
                question: "Who?".into(),
                answer: "Them".into(),
                options: Vec::new(),
                penalty,
            }
        }),
        (0u32..5).prop_map({
            let (id, category) = (id.clone(), category.clone());
            move |penalty| GameCard::challenge(id.clone(), category.clone(), "Do it", "Now", penalty)
        }),
        Just(GameCard::rule(id, category, "Rule", "Drink")),
    ]
}

/// Generate `1..=max` cards with unique ids
pub fn cards(max: usize) -> impl Strategy<Value = Vec<GameCard>> {
    (1..=max).prop_flat_map(|n| {
        (0..n)
            .map(|i| card_with_id(format!("card-{i}")))
            .collect::<Vec<_>>()
    })
}

/// Generate a roster of `0..=max` players
pub fn players(max: usize) -> impl Strategy<Value = Vec<Player>> {
    (0..=max).prop_map(|k| {
        (0..k)
            .map(|i| Player::new(format!("p{i}"), format!("Player {i}")))
            .collect()
    })
}
