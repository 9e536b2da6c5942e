//! SM-2 spaced repetition algorithm.
//!
//! Based on SuperMemo 2. A card moves between a learning phase
//! (repetitions 0-1, fixed intervals) and a review phase (ease-scaled
//! intervals). Any failed review sends it back to learning with a one day
//! interval.

use super::{SpacedRepetitionAlgorithm, DAY_MS};
use crate::types::{Quality, ReviewCard};

/// SM-2 algorithm with configurable parameters.
#[derive(Debug, Clone)]
pub struct Sm2 {
    pub initial_ease: f64,
    pub minimum_ease: f64,
    /// Interval after the first successful review.
    pub first_interval: u32,
    /// Interval after the second successful review.
    pub second_interval: u32,
    /// Interval after a failed review.
    pub lapse_interval: u32,
    /// Lowest quality that counts as a successful recall.
    pub success_threshold: u8,
}

impl Default for Sm2 {
    fn default() -> Self {
        Self {
            initial_ease: 2.5,
            minimum_ease: 1.3,
            first_interval: 1,
            second_interval: 6,
            lapse_interval: 1,
            success_threshold: 3,
        }
    }
}

impl SpacedRepetitionAlgorithm for Sm2 {
    fn name(&self) -> &'static str {
        "sm2"
    }

    fn initial_card(&self, item_id: &str, now: i64) -> ReviewCard {
        ReviewCard {
            ease_factor: self.initial_ease,
            ..ReviewCard::new(item_id, now)
        }
    }

    fn schedule(&self, card: &ReviewCard, quality: Quality, now: i64) -> ReviewCard {
        let ease_factor = self.next_ease(card.ease_factor, quality);

        let (interval, repetitions) = if quality.value() >= self.success_threshold {
            let interval = match card.repetitions {
                0 => self.first_interval,
                1 => self.second_interval,
                _ => (card.interval as f64 * ease_factor).round() as u32,
            };
            (interval, card.repetitions.saturating_add(1))
        } else {
            (self.lapse_interval, 0)
        };

        ReviewCard {
            item_id: card.item_id.clone(),
            ease_factor,
            interval,
            repetitions,
            next_review_at: now + interval as i64 * DAY_MS,
            last_review_at: now,
        }
    }
}

impl Sm2 {
    /// `EF' = max(min, EF + (0.1 - (5 - q) * (0.08 + (5 - q) * 0.02)))`
    fn next_ease(&self, ease: f64, quality: Quality) -> f64 {
        let miss = (Quality::MAX - quality.value()) as f64;
        (ease + (0.1 - miss * (0.08 + miss * 0.02))).max(self.minimum_ease)
    }
}
