//! Core types for the review scheduler and quiz engine.

use serde::{Deserialize, Serialize};

/// Number of option slots on a multiple-choice question.
pub const OPTION_SLOTS: usize = 4;

/// Spaced repetition state for one reviewable item.
///
/// Timestamps are Unix milliseconds. `last_review_at` stays 0 until the
/// first graded review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewCard {
    pub item_id: String,
    pub ease_factor: f64,
    pub interval: u32,
    pub repetitions: u32,
    pub next_review_at: i64,
    pub last_review_at: i64,
}

impl ReviewCard {
    /// Fresh card, due immediately at `now`.
    pub fn new(item_id: impl Into<String>, now: i64) -> Self {
        Self {
            item_id: item_id.into(),
            ease_factor: 2.5,
            interval: 0,
            repetitions: 0,
            next_review_at: now,
            last_review_at: 0,
        }
    }

    pub fn is_due(&self, now: i64) -> bool {
        self.next_review_at <= now
    }
}

/// Answer quality on the 0-5 SM-2 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "u8", from = "u8")]
pub struct Quality(u8);

impl Quality {
    pub const MAX: u8 = 5;

    /// Round to the nearest integer, then clamp to 0..=5.
    /// Non-finite input is treated as 0.
    pub fn new(raw: f64) -> Self {
        if !raw.is_finite() {
            return Self(0);
        }
        Self(raw.round().clamp(0.0, Self::MAX as f64) as u8)
    }

    /// Map a right/wrong outcome onto the scale using the configured values.
    pub fn from_outcome(correct: bool, settings: &QuizSettings) -> Self {
        if correct {
            Self::from(settings.correct_quality)
        } else {
            Self::from(settings.incorrect_quality)
        }
    }

    /// Right/wrong outcome with the default mapping (4 / 1).
    pub fn from_correct(correct: bool) -> Self {
        Self::from_outcome(correct, &QuizSettings::default())
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl From<u8> for Quality {
    fn from(value: u8) -> Self {
        Self(value.min(Self::MAX))
    }
}

impl From<i32> for Quality {
    fn from(value: i32) -> Self {
        Self::from(i64::from(value))
    }
}

impl From<i64> for Quality {
    fn from(value: i64) -> Self {
        Self(value.clamp(0, i64::from(Self::MAX)) as u8)
    }
}

impl From<Quality> for u8 {
    fn from(quality: Quality) -> Self {
        quality.0
    }
}

/// Answer modality of a quiz question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuestionType {
    #[serde(rename = "mcq")]
    MultipleChoice,
    #[serde(rename = "freetext")]
    FreeText,
    #[serde(rename = "spatial")]
    Spatial,
}

impl QuestionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MultipleChoice => "mcq",
            Self::FreeText => "freetext",
            Self::Spatial => "spatial",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "mcq" => Some(Self::MultipleChoice),
            "freetext" => Some(Self::FreeText),
            "spatial" => Some(Self::Spatial),
            _ => None,
        }
    }
}

/// A generated quiz question. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub id: String,
    pub kind: QuestionType,
    pub target_item_id: String,
    pub prompt: String,
    /// Multiple-choice only. Empty slots are `None`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<[Option<String>; OPTION_SLOTS]>,
    pub correct_answer: String,
}

impl QuizQuestion {
    /// Non-empty option slots, in display order.
    pub fn filled_options(&self) -> impl Iterator<Item = &str> {
        self.options
            .iter()
            .flat_map(|slots| slots.iter())
            .filter_map(|slot| slot.as_deref())
    }
}

/// Result of grading one question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizAnswer {
    pub question_id: String,
    pub target_item_id: String,
    pub raw_input: String,
    pub is_correct: bool,
    pub elapsed_ms: u64,
}

/// Quiz configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuizSettings {
    /// Repeating pattern of question types across a session.
    pub question_cycle: Vec<QuestionType>,
    pub session_length: u32,
    pub distractor_count: u32,
    pub correct_quality: u8,
    pub incorrect_quality: u8,
    /// Shortest normalized free-text input accepted by containment matching.
    pub min_containment_len: usize,
}

impl Default for QuizSettings {
    fn default() -> Self {
        Self {
            question_cycle: vec![
                QuestionType::MultipleChoice,
                QuestionType::FreeText,
                QuestionType::MultipleChoice,
                QuestionType::MultipleChoice,
                QuestionType::FreeText,
            ],
            session_length: 10,
            distractor_count: 3,
            correct_quality: 4,
            incorrect_quality: 1,
            min_containment_len: 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn quality_rounds_then_clamps() {
        assert_eq!(Quality::new(3.4).value(), 3);
        assert_eq!(Quality::new(3.5).value(), 4);
        assert_eq!(Quality::new(-2.0).value(), 0);
        assert_eq!(Quality::new(9.0).value(), 5);
        assert_eq!(Quality::new(f64::NAN).value(), 0);
        assert_eq!(Quality::from(7u8).value(), 5);
    }

    #[test]
    fn signed_integer_quality_clamps() {
        assert_eq!(Quality::from(-1).value(), 0);
        assert_eq!(Quality::from(3).value(), 3);
        assert_eq!(Quality::from(7).value(), 5);
        assert_eq!(Quality::from(i64::MIN).value(), 0);
        assert_eq!(Quality::from(i64::MAX).value(), 5);
    }

    #[test]
    fn quality_from_correct_uses_default_mapping() {
        assert_eq!(Quality::from_correct(true).value(), 4);
        assert_eq!(Quality::from_correct(false).value(), 1);
    }

    #[test]
    fn new_card_is_due_at_creation() {
        let card = ReviewCard::new("MOp", 1_000);
        assert!(card.is_due(1_000));
        assert!(!card.is_due(999));
        assert_eq!(card.last_review_at, 0);
    }

    #[test]
    fn settings_fill_missing_fields_from_defaults() {
        let settings: QuizSettings = serde_json::from_str(r#"{"session_length": 20}"#).unwrap();
        assert_eq!(settings.session_length, 20);
        assert_eq!(settings.distractor_count, 3);
        assert_eq!(settings.question_cycle.len(), 5);
    }

    #[test]
    fn question_type_uses_short_names() {
        let json = serde_json::to_string(&QuestionType::FreeText).unwrap();
        assert_eq!(json, "\"freetext\"");
        assert_eq!(QuestionType::from_str("mcq"), Some(QuestionType::MultipleChoice));
        assert_eq!(QuestionType::from_str("essay"), None);
    }
}
