//! Review progress store and its persistence boundary.
//!
//! The host application owns one `ProgressStore` and passes it (or a
//! snapshot of its cards) to the scheduler and session generator. Loading
//! and saving go through a `KeyValueStore`; the quiz core never calls it.

use crate::algorithm::sm2::Sm2;
use crate::algorithm::SpacedRepetitionAlgorithm;
use crate::error::{MalformedCard, StoreError};
use crate::types::{Quality, ReviewCard};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::{BTreeMap, HashMap};

/// Key the progress snapshot is stored under.
pub const STORE_KEY: &str = "neuroanatomy-store";

/// Snapshot format version written by `save_to`.
pub const SNAPSHOT_VERSION: u32 = 0;

/// Cards by item id.
pub type CardSnapshot = BTreeMap<String, ReviewCard>;

/// Minimal blob storage used for persistence.
pub trait KeyValueStore {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn save(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-memory key-value store.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Accepted spellings per card field. The camelCase forms are the web
/// client's snapshot format.
const CARD_FIELDS: [(&str, &str); 6] = [
    ("item_id", "regionId"),
    ("ease_factor", "easeFactor"),
    ("interval", "interval"),
    ("repetitions", "repetitions"),
    ("next_review_at", "nextReview"),
    ("last_review_at", "lastReview"),
];

fn card_field<'v>(record: &'v Map<String, Value>, field: &str) -> Option<&'v Value> {
    let alias = CARD_FIELDS
        .iter()
        .find(|(name, _)| *name == field)
        .map_or(field, |(_, alias)| *alias);
    record.get(field).or_else(|| record.get(alias))
}

/// Validate one persisted card record.
///
/// All five numeric fields must be present and numeric. Interval and
/// repetitions must be non-negative integers and the ease factor must be a
/// finite value at or above the SM-2 floor. A missing `item_id` falls back
/// to the record key. Fields may use either snake_case or the web client's
/// camelCase names.
pub fn validate_card(key: &str, value: &Value) -> Result<ReviewCard, MalformedCard> {
    let malformed = |reason: String| MalformedCard {
        item_id: key.to_string(),
        reason,
    };

    let record = value
        .as_object()
        .ok_or_else(|| malformed("not an object".to_string()))?;

    let number = |field: &str| -> Result<f64, MalformedCard> {
        card_field(record, field)
            .and_then(Value::as_f64)
            .ok_or_else(|| malformed(format!("missing or non-numeric {field}")))
    };
    let count = |field: &str| -> Result<u32, MalformedCard> {
        let n = number(field)?;
        if n < 0.0 || n.fract() != 0.0 || n > u32::MAX as f64 {
            return Err(malformed(format!("{field} is not a non-negative integer")));
        }
        Ok(n as u32)
    };
    let timestamp = |field: &str| -> Result<i64, MalformedCard> {
        let n = number(field)?;
        if !n.is_finite() {
            return Err(malformed(format!("{field} is not finite")));
        }
        Ok(n as i64)
    };

    let ease_factor = number("ease_factor")?;
    if !ease_factor.is_finite() || ease_factor < Sm2::default().minimum_ease {
        return Err(malformed(format!("ease_factor {ease_factor} out of range")));
    }

    let item_id = match card_field(record, "item_id") {
        Some(Value::String(id)) => id.clone(),
        Some(_) => return Err(malformed("item_id is not a string".to_string())),
        None => key.to_string(),
    };

    Ok(ReviewCard {
        item_id,
        ease_factor,
        interval: count("interval")?,
        repetitions: count("repetitions")?,
        next_review_at: timestamp("next_review_at")?,
        last_review_at: timestamp("last_review_at")?,
    })
}

/// The stored card for `item_id`, or a fresh one due at `now` when the
/// entry is missing.
pub fn card_or_default(snapshot: &CardSnapshot, item_id: &str, now: i64) -> ReviewCard {
    match snapshot.get(item_id) {
        Some(card) => card.clone(),
        None => {
            tracing::warn!(item_id, "no review card, using a fresh one");
            Sm2::default().initial_card(item_id, now)
        }
    }
}

#[derive(Serialize, Deserialize)]
struct Envelope<S> {
    state: S,
    #[serde(default)]
    version: u32,
}

#[derive(Serialize)]
struct PersistedState<'a> {
    cards: &'a CardSnapshot,
    total_reviews: u64,
}

#[derive(Deserialize)]
struct RawState {
    #[serde(default, alias = "srCards")]
    cards: Map<String, Value>,
    #[serde(default, alias = "totalReviews")]
    total_reviews: u64,
}

/// Per-item review cards plus a lifetime review counter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProgressStore {
    cards: CardSnapshot,
    total_reviews: u64,
}

impl ProgressStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a card for `item_id` unless one already exists.
    pub fn init_card(&mut self, item_id: &str, now: i64) {
        self.cards
            .entry(item_id.to_string())
            .or_insert_with(|| Sm2::default().initial_card(item_id, now));
    }

    /// Apply a graded review. Items without a card are left untouched.
    pub fn update_card(
        &mut self,
        item_id: &str,
        quality: impl Into<Quality>,
        now: i64,
    ) -> Option<&ReviewCard> {
        self.update_card_with(&Sm2::default(), item_id, quality.into(), now)
    }

    pub fn update_card_with(
        &mut self,
        algorithm: &dyn SpacedRepetitionAlgorithm,
        item_id: &str,
        quality: Quality,
        now: i64,
    ) -> Option<&ReviewCard> {
        let card = self.cards.get_mut(item_id)?;
        *card = algorithm.schedule(card, quality, now);
        self.total_reviews += 1;
        Some(&*card)
    }

    pub fn card(&self, item_id: &str) -> Option<&ReviewCard> {
        self.cards.get(item_id)
    }

    /// Ids of all stored cards due at `now`.
    pub fn due_item_ids(&self, now: i64) -> Vec<&str> {
        self.cards
            .values()
            .filter(|card| card.is_due(now))
            .map(|card| card.item_id.as_str())
            .collect()
    }

    pub fn snapshot(&self) -> &CardSnapshot {
        &self.cards
    }

    pub fn total_reviews(&self) -> u64 {
        self.total_reviews
    }

    /// Serialize to the persisted JSON envelope.
    pub fn to_json(&self) -> Result<String, StoreError> {
        let envelope = Envelope {
            state: PersistedState {
                cards: &self.cards,
                total_reviews: self.total_reviews,
            },
            version: SNAPSHOT_VERSION,
        };
        Ok(serde_json::to_string(&envelope)?)
    }

    /// Parse a persisted envelope. Malformed cards are replaced with fresh
    /// ones due at `now`.
    pub fn from_json(json: &str, now: i64) -> Result<Self, StoreError> {
        let envelope: Envelope<RawState> = serde_json::from_str(json)?;
        let mut cards = CardSnapshot::new();
        for (key, value) in &envelope.state.cards {
            let card = validate_card(key, value).unwrap_or_else(|err| {
                tracing::warn!(error = %err, "re-initializing malformed card");
                Sm2::default().initial_card(key, now)
            });
            cards.insert(key.clone(), card);
        }
        Ok(Self {
            cards,
            total_reviews: envelope.state.total_reviews,
        })
    }

    /// Load from `store`. A missing or unreadable snapshot yields an empty
    /// store; backend failures propagate.
    pub fn load_from<S: KeyValueStore + ?Sized>(store: &S, now: i64) -> Result<Self, StoreError> {
        let Some(json) = store.load(STORE_KEY)? else {
            tracing::info!("no saved progress, starting fresh");
            return Ok(Self::new());
        };

        match Self::from_json(&json, now) {
            Ok(progress) => {
                tracing::info!(
                    cards = progress.cards.len(),
                    total_reviews = progress.total_reviews,
                    "loaded progress"
                );
                Ok(progress)
            }
            Err(err) => {
                tracing::warn!(error = %err, "unreadable progress snapshot, starting fresh");
                Ok(Self::new())
            }
        }
    }

    pub fn save_to<S: KeyValueStore + ?Sized>(&self, store: &mut S) -> Result<(), StoreError> {
        store.save(STORE_KEY, &self.to_json()?)?;
        tracing::info!(cards = self.cards.len(), "saved progress");
        Ok(())
    }
}
