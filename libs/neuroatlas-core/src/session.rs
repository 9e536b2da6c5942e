//! Quiz session generation.
//!
//! A session is a fully materialized list of questions. Due items come
//! first, the pool is cycled when the session is longer than the pool, and
//! question types follow the configured repeating cycle.

use crate::catalog::{Catalog, CatalogItem};
use crate::error::{QuizError, Result};
use crate::matching;
use crate::store::{card_or_default, CardSnapshot};
use crate::types::{QuestionType, QuizQuestion, QuizSettings, OPTION_SLOTS};
use rand::rngs::ThreadRng;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;
use uuid::Uuid;

/// Builds questions from a catalog using an injectable random source.
pub struct SessionGenerator<'a, C: ?Sized, R = ThreadRng> {
    catalog: &'a C,
    settings: QuizSettings,
    rng: R,
}

impl<'a, C: Catalog + ?Sized> SessionGenerator<'a, C, ThreadRng> {
    /// Generator using the thread-local RNG and default settings.
    pub fn new(catalog: &'a C) -> Self {
        Self::with_rng(catalog, rand::rng())
    }
}

impl<'a, C: Catalog + ?Sized, R: Rng> SessionGenerator<'a, C, R> {
    pub fn with_rng(catalog: &'a C, rng: R) -> Self {
        Self {
            catalog,
            settings: QuizSettings::default(),
            rng,
        }
    }

    pub fn with_settings(mut self, settings: QuizSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn settings(&self) -> &QuizSettings {
        &self.settings
    }

    /// Pick up to `count` wrong answers for `target_id`.
    ///
    /// Same-category items are preferred; other categories fill the rest.
    /// Never contains the target or duplicates. Unknown targets and
    /// non-positive counts yield nothing.
    pub fn select_distractors(&mut self, target_id: &str, count: i64) -> Vec<String> {
        let catalog = self.catalog;
        let Some(target) = catalog.item(target_id) else {
            return Vec::new();
        };
        if count <= 0 {
            return Vec::new();
        }
        let count = count as usize;

        let mut seen = HashSet::new();
        let (mut same, mut other): (Vec<&str>, Vec<&str>) = catalog
            .item_ids()
            .into_iter()
            .filter(|id| *id != target.id && seen.insert(*id))
            .partition(|id| {
                catalog
                    .item(id)
                    .is_some_and(|item| item.category == target.category)
            });

        same.shuffle(&mut self.rng);
        same.truncate(count);

        if same.len() < count {
            let needed = count - same.len();
            other.shuffle(&mut self.rng);
            same.extend(other.into_iter().take(needed));
        }

        same.into_iter().map(str::to_string).collect()
    }

    /// Build one question of `kind` about `item_id`.
    pub fn build_question(&mut self, kind: QuestionType, item_id: &str) -> Result<QuizQuestion> {
        let catalog = self.catalog;
        let item = catalog
            .item(item_id)
            .ok_or_else(|| QuizError::UnknownItem {
                id: item_id.to_string(),
            })?;
        Ok(self.question_for(kind, item))
    }

    fn question_for(&mut self, kind: QuestionType, item: CatalogItem<'_>) -> QuizQuestion {
        let (prompt, options) = match kind {
            QuestionType::MultipleChoice => (
                "What is the highlighted region?".to_string(),
                Some(self.option_slots(item.id)),
            ),
            QuestionType::FreeText => ("Name this highlighted region".to_string(), None),
            QuestionType::Spatial => (
                format!("Click on {} ({})", item.display_name, item.short_code),
                None,
            ),
        };

        QuizQuestion {
            id: Uuid::new_v4().to_string(),
            kind,
            target_item_id: item.id.to_string(),
            prompt,
            options,
            correct_answer: item.id.to_string(),
        }
    }

    /// Target plus distractors, shuffled into exactly `OPTION_SLOTS` slots.
    fn option_slots(&mut self, target_id: &str) -> [Option<String>; OPTION_SLOTS] {
        let wanted = (self.settings.distractor_count as usize).min(OPTION_SLOTS - 1);

        let mut choices = vec![target_id.to_string()];
        choices.extend(self.select_distractors(target_id, wanted as i64));
        choices.shuffle(&mut self.rng);
        choices.truncate(OPTION_SLOTS);

        let mut slots: [Option<String>; OPTION_SLOTS] = Default::default();
        for (slot, choice) in slots.iter_mut().zip(choices) {
            *slot = Some(choice);
        }
        slots
    }

    /// Generate `count` questions over `catalog_ids`.
    ///
    /// Ids are deduplicated and filtered against the catalog. Items without a
    /// card count as due at `now`. Empty input or a non-positive count yields
    /// an empty session.
    pub fn generate_session<S: AsRef<str>>(
        &mut self,
        catalog_ids: &[S],
        count: i64,
        cards: &CardSnapshot,
        now: i64,
    ) -> Vec<QuizQuestion> {
        let count = count.max(0) as usize;
        if count == 0 {
            return Vec::new();
        }

        let catalog = self.catalog;
        let mut seen = HashSet::new();
        let items: Vec<CatalogItem<'_>> = catalog_ids
            .iter()
            .filter_map(|id| catalog.item(id.as_ref()))
            .filter(|item| seen.insert(item.id))
            .collect();

        if items.is_empty() {
            return Vec::new();
        }

        let (mut due, mut upcoming): (Vec<_>, Vec<_>) = items
            .into_iter()
            .partition(|item| card_or_default(cards, item.id, now).is_due(now));

        tracing::debug!(
            due = due.len(),
            upcoming = upcoming.len(),
            count,
            "generating quiz session"
        );

        due.shuffle(&mut self.rng);
        upcoming.shuffle(&mut self.rng);
        let pool: Vec<CatalogItem<'_>> = due.into_iter().chain(upcoming).collect();

        let cycle = if self.settings.question_cycle.is_empty() {
            tracing::warn!("empty question cycle, using default");
            QuizSettings::default().question_cycle
        } else {
            self.settings.question_cycle.clone()
        };

        (0..count)
            .map(|i| self.question_for(cycle[i % cycle.len()], pool[i % pool.len()]))
            .collect()
    }

    /// Lenient typed-answer check against the target's accepted forms.
    pub fn grade_free_text(&self, input: &str, target_item_id: &str) -> bool {
        matching::grade_free_text(
            self.catalog,
            input,
            target_item_id,
            self.settings.min_containment_len,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atlas::Atlas;
    use crate::types::ReviewCard;
    use pretty_assertions::assert_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const NOW: i64 = 1_700_000_000_000;

    fn seeded(atlas: &Atlas, seed: u64) -> SessionGenerator<'_, Atlas, StdRng> {
        SessionGenerator::with_rng(atlas, StdRng::seed_from_u64(seed))
    }

    #[test]
    fn distractors_prefer_same_group() {
        let atlas = Atlas::mouse();
        let mut generator = seeded(&atlas, 1);
        // Hippocampus has four members, so three distractors fit in-group.
        let picked = generator.select_distractors("CA1", 3);
        assert_eq!(picked.len(), 3);
        for id in &picked {
            assert_eq!(atlas.region(id).unwrap().group, atlas.region("CA1").unwrap().group);
        }
    }

    #[test]
    fn distractors_backfill_from_other_groups() {
        let atlas = Atlas::mouse();
        let mut generator = seeded(&atlas, 2);
        // Hindbrain only has CB and LC.
        let picked = generator.select_distractors("CB", 3);
        assert_eq!(picked.len(), 3);
        assert!(picked.contains(&"LC".to_string()));
        assert!(!picked.contains(&"CB".to_string()));
    }

    #[test]
    fn distractors_never_repeat_or_include_target() {
        let atlas = Atlas::mouse();
        for seed in 0..20 {
            let mut generator = seeded(&atlas, seed);
            let picked = generator.select_distractors("VTA", 40);
            assert_eq!(picked.len(), 29);
            let unique: HashSet<_> = picked.iter().collect();
            assert_eq!(unique.len(), picked.len());
            assert!(!picked.iter().any(|id| id == "VTA"));
        }
    }

    #[test]
    fn distractors_for_unknown_or_zero() {
        let atlas = Atlas::mouse();
        let mut generator = seeded(&atlas, 3);
        assert!(generator.select_distractors("nope", 3).is_empty());
        assert!(generator.select_distractors("MOp", 0).is_empty());
        assert!(generator.select_distractors("MOp", -4).is_empty());
    }

    #[test]
    fn multiple_choice_has_four_slots_with_answer() {
        let atlas = Atlas::mouse();
        let mut generator = seeded(&atlas, 4);
        let question = generator.build_question(QuestionType::MultipleChoice, "PL").unwrap();
        assert_eq!(question.options.as_ref().map(|o| o.len()), Some(OPTION_SLOTS));
        assert_eq!(question.correct_answer, "PL");
        assert!(question.filled_options().any(|o| o == "PL"));
        assert_eq!(question.filled_options().count(), 4);
    }

    #[test]
    fn multiple_choice_pads_small_catalogs() {
        let mut regions = Atlas::mouse().regions().to_vec();
        regions.truncate(2);
        let atlas = Atlas::new(regions);
        let mut generator = seeded(&atlas, 5);
        let question = generator.build_question(QuestionType::MultipleChoice, "MOp").unwrap();
        let slots = question.options.unwrap();
        assert_eq!(slots.iter().filter(|s| s.is_some()).count(), 2);
        assert_eq!(slots.iter().filter(|s| s.is_none()).count(), 2);
    }

    #[test]
    fn oversized_distractor_setting_keeps_answer() {
        let atlas = Atlas::mouse();
        let settings = QuizSettings {
            distractor_count: 10,
            ..QuizSettings::default()
        };
        for seed in 0..20 {
            let mut generator = seeded(&atlas, seed).with_settings(settings.clone());
            let question = generator.build_question(QuestionType::MultipleChoice, "HY").unwrap();
            assert!(question.filled_options().any(|o| o == "HY"));
        }
    }

    #[test]
    fn free_text_and_spatial_have_no_options() {
        let atlas = Atlas::mouse();
        let mut generator = seeded(&atlas, 6);
        let free = generator.build_question(QuestionType::FreeText, "DG").unwrap();
        assert!(free.options.is_none());
        assert_eq!(free.correct_answer, "DG");

        let spatial = generator.build_question(QuestionType::Spatial, "DG").unwrap();
        assert!(spatial.options.is_none());
        assert_eq!(spatial.prompt, "Click on Dentate Gyrus (DG)");
    }

    #[test]
    fn unknown_item_fails() {
        let atlas = Atlas::mouse();
        let mut generator = seeded(&atlas, 7);
        let err = generator.build_question(QuestionType::FreeText, "XYZ").unwrap_err();
        assert_eq!(err, QuizError::UnknownItem { id: "XYZ".to_string() });
    }

    #[test]
    fn degenerate_sessions_are_empty() {
        let atlas = Atlas::mouse();
        let mut generator = seeded(&atlas, 8);
        let cards = CardSnapshot::new();
        let none: [&str; 0] = [];
        assert!(generator.generate_session(&none, 10, &cards, NOW).is_empty());
        assert!(generator.generate_session(&["MOp"], 0, &cards, NOW).is_empty());
        assert!(generator.generate_session(&["MOp"], -3, &cards, NOW).is_empty());
        assert!(generator.generate_session(&["nope", "nada"], 5, &cards, NOW).is_empty());
    }

    #[test]
    fn session_cycles_short_pool() {
        let atlas = Atlas::mouse();
        let mut generator = seeded(&atlas, 9);
        let questions =
            generator.generate_session(&["MOp", "CA1", "CB"], 5, &CardSnapshot::new(), NOW);
        assert_eq!(questions.len(), 5);
        for q in &questions {
            assert!(["MOp", "CA1", "CB"].contains(&q.target_item_id.as_str()));
        }
        // First pass over the pool visits each item once.
        let first: HashSet<_> = questions[..3].iter().map(|q| q.target_item_id.as_str()).collect();
        assert_eq!(first.len(), 3);
    }

    #[test]
    fn session_follows_type_cycle() {
        let atlas = Atlas::mouse();
        let mut generator = seeded(&atlas, 10);
        let ids = atlas.item_ids();
        let kinds: Vec<_> = generator
            .generate_session(&ids, 7, &CardSnapshot::new(), NOW)
            .iter()
            .map(|q| q.kind)
            .collect();
        use QuestionType::*;
        assert_eq!(
            kinds,
            vec![
                MultipleChoice,
                FreeText,
                MultipleChoice,
                MultipleChoice,
                FreeText,
                MultipleChoice,
                FreeText,
            ]
        );
    }

    #[test]
    fn session_dedupes_ids() {
        let atlas = Atlas::mouse();
        let mut generator = seeded(&atlas, 11);
        let questions =
            generator.generate_session(&["SNc", "SNc", "SNc"], 3, &CardSnapshot::new(), NOW);
        assert!(questions.iter().all(|q| q.target_item_id == "SNc"));
    }

    #[test]
    fn due_items_come_first() {
        let atlas = Atlas::mouse();
        let mut cards = CardSnapshot::new();
        let later = ReviewCard {
            next_review_at: NOW + 10,
            ..ReviewCard::new("MOp", 0)
        };
        cards.insert("MOp".to_string(), later);
        cards.insert("MOs".to_string(), ReviewCard::new("MOs", NOW - 1));

        for seed in 0..10 {
            let mut generator = seeded(&atlas, seed);
            // SSp has no card and counts as due.
            let questions = generator.generate_session(&["MOp", "MOs", "SSp"], 3, &cards, NOW);
            assert_eq!(questions[2].target_item_id, "MOp");
        }
    }

    #[test]
    fn spatial_selectable_through_cycle() {
        let atlas = Atlas::mouse();
        let settings = QuizSettings {
            question_cycle: vec![QuestionType::Spatial],
            ..QuizSettings::default()
        };
        let mut generator = seeded(&atlas, 12).with_settings(settings);
        let questions = generator.generate_session(&["TH"], 2, &CardSnapshot::new(), NOW);
        assert!(questions.iter().all(|q| q.kind == QuestionType::Spatial));
    }

    #[test]
    fn empty_cycle_falls_back_to_default() {
        let atlas = Atlas::mouse();
        let settings = QuizSettings {
            question_cycle: Vec::new(),
            ..QuizSettings::default()
        };
        let mut generator = seeded(&atlas, 13).with_settings(settings);
        let questions = generator.generate_session(&["TH"], 2, &CardSnapshot::new(), NOW);
        assert_eq!(questions[0].kind, QuestionType::MultipleChoice);
        assert_eq!(questions[1].kind, QuestionType::FreeText);
    }

    #[test]
    fn question_ids_are_unique() {
        let atlas = Atlas::mouse();
        let mut generator = seeded(&atlas, 14);
        let questions = generator.generate_session(&["LC"], 20, &CardSnapshot::new(), NOW);
        let ids: HashSet<_> = questions.iter().map(|q| q.id.as_str()).collect();
        assert_eq!(ids.len(), 20);
    }

    #[test]
    fn grading_uses_configured_floor() {
        let atlas = Atlas::mouse();
        let generator = SessionGenerator::new(&atlas);
        assert!(generator.grade_free_text("mop", "MOp"));
        assert!(!generator.grade_free_text("m", "MOp"));
    }
}
