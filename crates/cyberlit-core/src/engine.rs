//! Learning engine orchestrator.
//!
//! Wires the question bank, module catalog and progress store together:
//! compute new state synchronously, then persist it.

use std::sync::Arc;

use crate::bank::QuestionBank;
use crate::catalog::ModuleCatalog;
use crate::completion::ModuleCompletion;
use crate::context::ChatQuery;
use crate::error::EngineError;
use crate::progress::{Persisted, ProgressStore};
use crate::scoring::{score_answers, AnswerSet, QuizResult};
use crate::store::KeyValueStore;

/// Completion summary for one module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleProgress {
    pub module_id: String,
    pub completed: usize,
    pub total: usize,
    pub percent: u8,
}

/// The central learning engine.
pub struct LearningEngine {
    bank: QuestionBank,
    catalog: ModuleCatalog,
    progress: ProgressStore,
}

impl LearningEngine {
    pub fn new(bank: QuestionBank, catalog: ModuleCatalog, store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            progress: ProgressStore::with_topic_order(store, bank.topics()),
            bank,
            catalog,
        }
    }

    /// Built-in bank and catalog over `store`.
    pub fn with_builtin_content(store: Arc<dyn KeyValueStore>) -> Self {
        Self::new(QuestionBank::builtin(), ModuleCatalog::builtin(), store)
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    pub fn catalog(&self) -> &ModuleCatalog {
        &self.catalog
    }

    /// Load the stored result, if any. Call once at startup.
    ///
    /// An unreadable or invalid record restores nothing and comes back as
    /// the warning.
    pub async fn restore(&mut self) -> Persisted<Option<&QuizResult>> {
        self.progress.load_result().await
    }

    pub fn current_result(&self) -> Option<&QuizResult> {
        self.progress.current_result()
    }

    /// Score `answers` and persist the result.
    ///
    /// Invalid input is returned before anything is stored, so the previous
    /// result survives a rejected submission.
    pub async fn submit(
        &mut self,
        answers: &AnswerSet,
    ) -> Result<Persisted<QuizResult>, EngineError> {
        let result = score_answers(answers, &self.bank)?;
        tracing::info!(
            score = result.score(),
            total = result.total(),
            level = %result.user_level(),
            "quiz submitted"
        );
        Ok(self.progress.save_result(result).await)
    }

    /// Toggle an article of a catalog module.
    pub async fn toggle_article(
        &mut self,
        module_id: &str,
        title: &str,
    ) -> Result<Persisted<ModuleCompletion>, EngineError> {
        if self.catalog.module(module_id).is_none() {
            return Err(EngineError::InvalidInput(format!(
                "unknown module '{module_id}'"
            )));
        }
        if !self.catalog.articles(module_id).iter().any(|a| a.title == title) {
            return Err(EngineError::InvalidInput(format!(
                "module '{module_id}' has no article titled '{title}'"
            )));
        }
        Ok(self.progress.toggle(module_id, title).await)
    }

    /// Completion map for a module, all-incomplete if never toggled or
    /// unreadable; the latter carries the read warning.
    pub async fn completion(&mut self, module_id: &str) -> Persisted<ModuleCompletion> {
        let loaded = self.progress.load_completion(module_id).await;
        Persisted {
            value: loaded.value.clone(),
            warning: loaded.warning,
        }
    }

    /// Completion summary for a module, recomputed from the current map.
    pub async fn module_progress(&mut self, module_id: &str) -> ModuleProgress {
        let titles = self.catalog.article_titles(module_id);
        let completion = self.progress.completion(module_id).await;
        ModuleProgress {
            module_id: module_id.to_string(),
            completed: completion.completed_count(&titles),
            total: titles.len(),
            percent: completion.percent_complete(&titles),
        }
    }

    /// Build an assistant query tagged with the current level.
    pub fn chat_query(&self, text: &str) -> Option<ChatQuery> {
        ChatQuery::with_result(text, self.current_result())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Level, Question, Topic};
    use crate::store::{MemoryStore, RESULT_KEY};

    fn all_correct(bank: &QuestionBank) -> AnswerSet {
        let mut answers = AnswerSet::unanswered(bank.len());
        for (i, q) in bank.questions().iter().enumerate() {
            answers.select(i, q.correct_option.clone());
        }
        answers
    }

    #[tokio::test]
    async fn submit_persists_and_restores() {
        let backend = Arc::new(MemoryStore::new());
        let mut engine = LearningEngine::with_builtin_content(backend.clone());
        let answers = all_correct(engine.bank());
        let submitted = engine.submit(&answers).await.unwrap();
        assert!(submitted.is_durable());
        assert_eq!(submitted.value.user_level(), Level::Advanced);

        let mut reopened = LearningEngine::with_builtin_content(backend);
        let restored = reopened.restore().await;
        assert!(restored.is_durable());
        assert_eq!(restored.value, Some(&submitted.value));
    }

    #[tokio::test]
    async fn restore_reports_unreadable_storage() {
        let backend = Arc::new(MemoryStore::new());
        let mut engine = LearningEngine::with_builtin_content(backend.clone());
        let answers = all_correct(engine.bank());
        let _ = engine.submit(&answers).await.unwrap();

        backend.set_fail_reads(true);
        let mut reopened = LearningEngine::with_builtin_content(backend);
        let restored = reopened.restore().await;
        assert!(restored.value.is_none());
        let warning = restored.warning.unwrap();
        assert!(matches!(warning, EngineError::StorageUnavailable(_)));
        assert!(warning.is_soft());

        let completion = reopened.completion("phishing").await;
        assert!(matches!(completion.warning, Some(EngineError::StorageUnavailable(_))));
        assert_eq!(completion.value, ModuleCompletion::new());
    }

    #[tokio::test]
    async fn restore_ranks_ties_in_bank_order() {
        let bank = QuestionBank::new(vec![
            Question::new("p1", &["a", "b"], "a", Topic::DataPrivacy),
            Question::new("q1", &["a", "b"], "a", Topic::Phishing),
        ])
        .unwrap();
        let json = r#"{"score":0,"total":2,"percentage":0.0,
            "date":"2024-03-01T10:00:00Z","userLevel":"beginner",
            "topicErrors":{"Phishing":1,"Data Privacy":1}}"#;
        let backend = Arc::new(MemoryStore::new().with_value(RESULT_KEY, json));
        let mut engine = LearningEngine::new(bank, ModuleCatalog::builtin(), backend);
        let restored = engine.restore().await.value.unwrap();
        assert_eq!(restored.weak_topics(), &[Topic::DataPrivacy, Topic::Phishing]);
    }

    #[tokio::test]
    async fn invalid_submission_keeps_previous_result() {
        let backend = Arc::new(MemoryStore::new());
        let mut engine = LearningEngine::with_builtin_content(backend.clone());
        let answers = all_correct(engine.bank());
        let _ = engine.submit(&answers).await.unwrap();
        let stored_before = backend.raw(RESULT_KEY);

        let err = engine.submit(&AnswerSet::unanswered(3)).await.unwrap_err();
        assert!(matches!(err, EngineError::InvalidInput(_)));
        assert_eq!(backend.raw(RESULT_KEY), stored_before);
        assert_eq!(engine.current_result().map(|r| r.score()), Some(21));
    }

    #[tokio::test]
    async fn toggle_unknown_article_rejected() {
        let backend = Arc::new(MemoryStore::new());
        let mut engine = LearningEngine::with_builtin_content(backend.clone());
        assert!(engine.toggle_article("phishing", "Not an article").await.is_err());
        assert!(engine.toggle_article("defaultModule", "Video 1").await.is_err());
        assert_eq!(backend.write_count(), 0);
    }

    #[tokio::test]
    async fn module_progress_follows_toggles() {
        let mut engine = LearningEngine::with_builtin_content(Arc::new(MemoryStore::new()));
        let before = engine.module_progress("dataencrypt").await;
        assert_eq!(before.percent, 0);
        assert_eq!(before.total, 4);

        let _ = engine.toggle_article("dataencrypt", "Video 1").await.unwrap();
        let after = engine.module_progress("dataencrypt").await;
        assert_eq!((after.completed, after.percent), (1, 25));

        let _ = engine.toggle_article("dataencrypt", "Video 1").await.unwrap();
        assert_eq!(engine.module_progress("dataencrypt").await, before);
    }

    #[tokio::test]
    async fn unknown_module_progress_is_zero() {
        let mut engine = LearningEngine::with_builtin_content(Arc::new(MemoryStore::new()));
        let progress = engine.module_progress("defaultModule").await;
        assert_eq!(progress.total, 0);
        assert_eq!(progress.percent, 0);
    }

    #[tokio::test]
    async fn chat_query_carries_level_after_submission() {
        let mut engine = LearningEngine::with_builtin_content(Arc::new(MemoryStore::new()));
        assert_eq!(engine.chat_query("hello").unwrap().user_level, None);

        let mut answers = AnswerSet::unanswered(engine.bank().len());
        let correct: Vec<(usize, String)> = engine
            .bank()
            .questions()
            .iter()
            .enumerate()
            .filter(|(_, q)| q.topic != Topic::Phishing)
            .take(9)
            .map(|(i, q)| (i, q.correct_option.clone()))
            .collect();
        for (i, option) in correct {
            answers.select(i, option);
        }
        let _ = engine.submit(&answers).await.unwrap();
        assert_eq!(
            engine.chat_query("hello").unwrap().user_level,
            Some(Level::Intermediate)
        );
    }
}
