//! Spaced repetition scheduling.

pub mod sm2;

use crate::types::{Quality, ReviewCard};
use chrono::Utc;

/// Milliseconds in one scheduling day.
pub const DAY_MS: i64 = 86_400_000;

/// Current wall-clock time in Unix milliseconds.
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Trait for spaced repetition algorithms.
pub trait SpacedRepetitionAlgorithm: Send + Sync {
    /// Algorithm identifier.
    fn name(&self) -> &'static str;

    /// Fresh card for an item seen for the first time, due at `now`.
    fn initial_card(&self, item_id: &str, now: i64) -> ReviewCard;

    /// Next card state after a graded review at `now`.
    fn schedule(&self, card: &ReviewCard, quality: Quality, now: i64) -> ReviewCard;
}

/// Get algorithm by name.
pub fn get_algorithm(name: &str) -> Option<Box<dyn SpacedRepetitionAlgorithm>> {
    match name {
        "sm2" => Some(Box::new(sm2::Sm2::default())),
        _ => None,
    }
}

/// Create a fresh card due at `now`. Does not touch any store.
pub fn create_card_at(item_id: &str, now: i64) -> ReviewCard {
    sm2::Sm2::default().initial_card(item_id, now)
}

/// Create a fresh card due now.
pub fn create_card(item_id: &str) -> ReviewCard {
    create_card_at(item_id, now_millis())
}

/// Whether `card` is due at `now` (inclusive).
pub fn is_due(card: &ReviewCard, now: i64) -> bool {
    card.is_due(now)
}

/// Apply the default SM-2 update for a review at `now`.
pub fn update_card_at(card: &ReviewCard, quality: impl Into<Quality>, now: i64) -> ReviewCard {
    sm2::Sm2::default().schedule(card, quality.into(), now)
}

/// Apply the default SM-2 update at the current time.
pub fn update_card(card: &ReviewCard, quality: impl Into<Quality>) -> ReviewCard {
    update_card_at(card, quality, now_millis())
}
