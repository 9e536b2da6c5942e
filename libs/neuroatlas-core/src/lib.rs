//! Core library for the neuroanatomy atlas quiz.
//!
//! Provides:
//! - Mouse brain region atlas (metadata, hierarchy, search)
//! - SM-2 review scheduling per region
//! - Quiz session generation with distractor selection
//! - Lenient free-text answer grading
//! - Progress store with snapshot validation and key-value persistence
//! - In-flight quiz run state and session summaries

pub mod algorithm;
pub mod atlas;
pub mod catalog;
pub mod error;
pub mod matching;
pub mod quiz;
pub mod session;
pub mod store;
pub mod types;

pub use algorithm::{
    create_card, create_card_at, is_due, update_card, update_card_at, SpacedRepetitionAlgorithm,
};
pub use atlas::{Atlas, HierarchyNode, Region, RegionGroup};
pub use catalog::{Catalog, CatalogItem};
pub use error::{MalformedCard, QuizError, Result, StoreError};
pub use matching::{grade_free_text, normalize};
pub use quiz::{apply_answer, grade, QuizRun, RunProgress, SessionSummary};
pub use session::SessionGenerator;
pub use store::{CardSnapshot, KeyValueStore, MemoryStore, ProgressStore};
pub use types::{
    QuestionType, Quality, QuizAnswer, QuizQuestion, QuizSettings, ReviewCard, OPTION_SLOTS,
};
