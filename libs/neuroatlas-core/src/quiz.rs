//! In-flight quiz state: the question queue, answer log and scoring.

use crate::catalog::Catalog;
use crate::matching;
use crate::store::ProgressStore;
use crate::types::{Quality, QuestionType, QuizAnswer, QuizQuestion, QuizSettings, ReviewCard};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Grade a raw answer to `question`.
///
/// Multiple-choice and spatial answers are item ids and must equal the
/// correct answer exactly. Free-text answers use lenient matching.
pub fn grade<C: Catalog + ?Sized>(
    question: &QuizQuestion,
    input: &str,
    catalog: &C,
    settings: &QuizSettings,
) -> bool {
    match question.kind {
        QuestionType::MultipleChoice | QuestionType::Spatial => {
            !input.is_empty() && input == question.correct_answer
        }
        QuestionType::FreeText => matching::grade_free_text(
            catalog,
            input,
            &question.correct_answer,
            settings.min_containment_len,
        ),
    }
}

/// Feed a graded answer back into the progress store.
///
/// The item's card is created first if it does not exist yet.
pub fn apply_answer<'s>(
    store: &'s mut ProgressStore,
    answer: &QuizAnswer,
    settings: &QuizSettings,
    now: i64,
) -> Option<&'s ReviewCard> {
    store.init_card(&answer.target_item_id, now);
    store.update_card(
        &answer.target_item_id,
        Quality::from_outcome(answer.is_correct, settings),
        now,
    )
}

/// Position within a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunProgress {
    /// 1-based index of the current question; equals `total` once done.
    pub position: usize,
    pub total: usize,
    pub score: u32,
    pub answered: usize,
}

/// One quiz session being worked through.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuizRun {
    active: bool,
    current: Option<QuizQuestion>,
    queue: VecDeque<QuizQuestion>,
    answers: Vec<QuizAnswer>,
    score: u32,
    streak: u32,
    best_streak: u32,
}

impl QuizRun {
    /// Start a run; the first question becomes current.
    pub fn start(questions: Vec<QuizQuestion>) -> Self {
        let mut queue: VecDeque<_> = questions.into();
        let current = queue.pop_front();
        Self {
            active: true,
            current,
            queue,
            ..Self::default()
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Active with no question left to show.
    pub fn is_complete(&self) -> bool {
        self.active && self.current.is_none()
    }

    pub fn current(&self) -> Option<&QuizQuestion> {
        self.current.as_ref()
    }

    pub fn answers(&self) -> &[QuizAnswer] {
        &self.answers
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn streak(&self) -> u32 {
        self.streak
    }

    pub fn best_streak(&self) -> u32 {
        self.best_streak
    }

    fn current_answered(&self) -> bool {
        match (&self.current, self.answers.last()) {
            (Some(question), Some(last)) => last.question_id == question.id,
            _ => false,
        }
    }

    /// Grade `input` against the current question and log the result.
    ///
    /// Returns `None` when there is no current question or it has already
    /// been answered.
    pub fn answer<C: Catalog + ?Sized>(
        &mut self,
        input: &str,
        elapsed_ms: u64,
        catalog: &C,
        settings: &QuizSettings,
    ) -> Option<QuizAnswer> {
        if self.current_answered() {
            return None;
        }
        let question = self.current.as_ref()?;

        let answer = QuizAnswer {
            question_id: question.id.clone(),
            target_item_id: question.target_item_id.clone(),
            raw_input: input.to_string(),
            is_correct: grade(question, input, catalog, settings),
            elapsed_ms,
        };
        self.record(answer.clone());
        Some(answer)
    }

    /// Append an already graded answer and update score and streaks.
    pub fn record(&mut self, answer: QuizAnswer) {
        if answer.is_correct {
            self.score += 1;
            self.streak += 1;
            self.best_streak = self.best_streak.max(self.streak);
        } else {
            self.streak = 0;
        }
        self.answers.push(answer);
    }

    /// Move to the next queued question.
    pub fn advance(&mut self) -> Option<&QuizQuestion> {
        self.current = self.queue.pop_front();
        self.current.as_ref()
    }

    /// Stop the run. The answer log is kept for the summary.
    pub fn finish(&mut self) {
        self.active = false;
        self.current = None;
        self.queue.clear();
    }

    pub fn progress(&self) -> RunProgress {
        let unanswered = self.current.is_some() && !self.current_answered();
        let pending = self.queue.len() + usize::from(unanswered);
        let total = self.answers.len() + pending;
        RunProgress {
            position: (self.answers.len() + 1).min(total),
            total,
            score: self.score,
            answered: self.answers.len(),
        }
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary::from_answers(&self.answers)
    }
}

/// End-of-session statistics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub correct: usize,
    pub total: usize,
    /// Rounded percentage, 0 for an empty session.
    pub accuracy_percent: u32,
    /// Rounded seconds per question, 0 for an empty session.
    pub average_seconds: u64,
    pub mistakes: Vec<QuizAnswer>,
}

impl SessionSummary {
    pub fn from_answers(answers: &[QuizAnswer]) -> Self {
        let total = answers.len();
        let correct = answers.iter().filter(|a| a.is_correct).count();

        let (accuracy_percent, average_seconds) = if total == 0 {
            (0, 0)
        } else {
            let total_ms: u64 = answers.iter().map(|a| a.elapsed_ms).sum();
            (
                (correct as f64 / total as f64 * 100.0).round() as u32,
                (total_ms as f64 / total as f64 / 1000.0).round() as u64,
            )
        };

        Self {
            correct,
            total,
            accuracy_percent,
            average_seconds,
            mistakes: answers.iter().filter(|a| !a.is_correct).cloned().collect(),
        }
    }
}
