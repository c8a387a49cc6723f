//! Quiz scoring: answer set + question bank -> [`QuizResult`].
//!
//! Scoring is pure. Persisting the result is a separate step owned by
//! [`ProgressStore`](crate::progress::ProgressStore).

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::bank::QuestionBank;
use crate::error::EngineError;
use crate::leveling::{level_of, percentage};
use crate::model::{Level, Topic, TopicScore};

/// One selected option per question index; `None` (or an empty string) is
/// unanswered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet(Vec<Option<String>>);

impl AnswerSet {
    /// An answer set with every question unanswered.
    pub fn unanswered(len: usize) -> Self {
        Self(vec![None; len])
    }

    /// Select `option` for question `index`. Returns `false` if out of range.
    pub fn select(&mut self, index: usize, option: impl Into<String>) -> bool {
        match self.0.get_mut(index) {
            Some(slot) => {
                *slot = Some(option.into());
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self, index: usize) {
        if let Some(slot) = self.0.get_mut(index) {
            *slot = None;
        }
    }

    /// The selected option, treating empty strings as unanswered.
    pub fn answer(&self, index: usize) -> Option<&str> {
        self.0
            .get(index)
            .and_then(|a| a.as_deref())
            .filter(|a| !a.is_empty())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn answered_count(&self) -> usize {
        (0..self.len()).filter(|&i| self.answer(i).is_some()).count()
    }
}

impl From<Vec<Option<String>>> for AnswerSet {
    fn from(answers: Vec<Option<String>>) -> Self {
        Self(answers)
    }
}

impl From<Vec<&str>> for AnswerSet {
    fn from(answers: Vec<&str>) -> Self {
        Self(answers.into_iter().map(|a| Some(a.to_string())).collect())
    }
}

/// The persisted outcome of one quiz submission.
///
/// Fields are read-only outside this crate: a result is only created by
/// [`score_answers`] or by decoding a stored record, and `user_level` is
/// always what [`level_of`] says for `score`/`total`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizResult {
    score: u32,
    total: u32,
    percentage: f64,
    date: DateTime<Utc>,
    #[serde(default)]
    topic_errors: BTreeMap<Topic, u32>,
    #[serde(default)]
    topic_details: BTreeMap<Topic, TopicScore>,
    user_level: Level,
    #[serde(default)]
    weak_topics: Vec<Topic>,
}

impl QuizResult {
    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    /// Unrounded percentage; round at display time.
    pub fn percentage(&self) -> f64 {
        self.percentage
    }

    pub fn date(&self) -> DateTime<Utc> {
        self.date
    }

    /// Wrong-answer counts; topics without errors are absent.
    pub fn topic_errors(&self) -> &BTreeMap<Topic, u32> {
        &self.topic_errors
    }

    /// Per-topic breakdown covering every topic in the bank.
    pub fn topic_details(&self) -> &BTreeMap<Topic, TopicScore> {
        &self.topic_details
    }

    pub fn user_level(&self) -> Level {
        self.user_level
    }

    /// Topics with errors, most errors first.
    pub fn weak_topics(&self) -> &[Topic] {
        &self.weak_topics
    }

    /// Check the structural invariants of a decoded record.
    ///
    /// Sums are taken in `u64` so hostile counts cannot overflow.
    pub fn validate(&self) -> Result<(), String> {
        if self.total == 0 {
            return Err("total is zero".into());
        }
        if self.score > self.total {
            return Err(format!("score {} exceeds total {}", self.score, self.total));
        }
        let missed = u64::from(self.total - self.score);
        if self.topic_details.is_empty() {
            let errors: u64 = self.topic_errors.values().map(|&e| u64::from(e)).sum();
            if errors != missed {
                return Err(format!(
                    "topic errors sum to {errors}, record misses {missed}"
                ));
            }
            return Ok(());
        }

        let mut correct = 0u64;
        let mut total = 0u64;
        for (topic, details) in &self.topic_details {
            if details.total == 0 || details.correct > details.total {
                return Err(format!(
                    "topic '{topic}' has {}/{} correct",
                    details.correct, details.total
                ));
            }
            correct += u64::from(details.correct);
            total += u64::from(details.total);
        }
        if total != u64::from(self.total) || correct != u64::from(self.score) {
            return Err(format!(
                "breakdown sums to {correct}/{total}, record says {}/{}",
                self.score, self.total
            ));
        }
        Ok(())
    }

    /// Recompute every derived field of a decoded record.
    ///
    /// `topic_errors` is rebuilt from `topic_details` when a breakdown is
    /// present, and `weak_topics` is always re-ranked with `order` as the
    /// tie-break. Call [`validate`](Self::validate) first. Returns the
    /// previously stored level when it disagreed with the policy.
    pub fn rederive(&mut self, order: &[Topic]) -> Option<Level> {
        self.percentage = percentage(self.score, self.total);

        if !self.topic_details.is_empty() {
            let errors: BTreeMap<Topic, u32> = self
                .topic_details
                .iter()
                .filter(|(_, d)| d.errors() > 0)
                .map(|(&t, d)| (t, d.errors()))
                .collect();
            if errors != self.topic_errors {
                tracing::warn!("stored topic errors disagree with breakdown, rebuilding");
                self.topic_errors = errors;
            }
        } else {
            self.topic_errors.retain(|_, e| *e > 0);
        }

        // Topics missing from `order` still rank, after the ordered ones.
        let mut full_order = order.to_vec();
        full_order.extend(Topic::ALL.iter().filter(|t| !order.contains(t)));
        self.weak_topics = rank_weak_topics(&self.topic_errors, &full_order);

        let level = level_of(self.score, self.total);
        if level != self.user_level {
            let stored = self.user_level;
            self.user_level = level;
            Some(stored)
        } else {
            None
        }
    }
}

/// Score an answer set against the bank, timestamped now.
pub fn score_answers(answers: &AnswerSet, bank: &QuestionBank) -> Result<QuizResult, EngineError> {
    score_answers_at(answers, bank, Utc::now())
}

/// Score an answer set against the bank with an explicit submission date.
pub fn score_answers_at(
    answers: &AnswerSet,
    bank: &QuestionBank,
    date: DateTime<Utc>,
) -> Result<QuizResult, EngineError> {
    if bank.is_empty() {
        return Err(EngineError::InvalidInput("question bank is empty".into()));
    }
    if answers.len() != bank.len() {
        return Err(EngineError::InvalidInput(format!(
            "expected {} answers, got {}",
            bank.len(),
            answers.len()
        )));
    }

    let mut topic_details: BTreeMap<Topic, TopicScore> = BTreeMap::new();
    for question in bank.questions() {
        topic_details.entry(question.topic).or_default().total += 1;
    }

    let mut score = 0u32;
    let mut topic_errors: BTreeMap<Topic, u32> = BTreeMap::new();
    for (index, question) in bank.questions().iter().enumerate() {
        let correct = answers
            .answer(index)
            .is_some_and(|answer| question.is_correct(answer));
        if correct {
            score += 1;
            if let Some(details) = topic_details.get_mut(&question.topic) {
                details.correct += 1;
            }
        } else {
            *topic_errors.entry(question.topic).or_insert(0) += 1;
        }
    }

    let total = bank.len() as u32;
    let weak_topics = rank_weak_topics(&topic_errors, &bank.topics());

    tracing::debug!(score, total, weak = weak_topics.len(), "scored quiz submission");

    Ok(QuizResult {
        score,
        total,
        percentage: percentage(score, total),
        date,
        topic_errors,
        topic_details,
        user_level: level_of(score, total),
        weak_topics,
    })
}

/// Rank topics with at least one error by descending error count.
///
/// `order` gives the tie-break: equal counts keep their relative position in
/// `order` (the sort is stable).
pub fn rank_weak_topics(topic_errors: &BTreeMap<Topic, u32>, order: &[Topic]) -> Vec<Topic> {
    let errors = |t: &Topic| topic_errors.get(t).copied().unwrap_or(0);
    let mut ranked: Vec<Topic> = order.iter().copied().filter(|t| errors(t) > 0).collect();
    ranked.sort_by(|a, b| errors(b).cmp(&errors(a)));
    ranked
}
