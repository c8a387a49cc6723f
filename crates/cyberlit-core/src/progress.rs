//! The progress store: learner state over a [`KeyValueStore`].
//!
//! In-memory state is updated before anything is written, and a failed
//! read or write never aborts the flow. Reads that fail or return
//! undecodable data count as a cold start; both failed reads and failed
//! writes come back as a warning on [`Persisted`], and the in-memory value
//! stays authoritative for the rest of the session.

use std::collections::HashMap;
use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::completion::ModuleCompletion;
use crate::error::EngineError;
use crate::model::Topic;
use crate::scoring::QuizResult;
use crate::store::{module_key, KeyValueStore, RESULT_KEY};

/// A value plus any soft storage warning from producing it.
///
/// For writes the warning means the value did not reach durable storage; for
/// reads it means stored state could not be used and the value is a cold
/// start.
#[derive(Debug)]
#[must_use]
pub struct Persisted<T> {
    pub value: T,
    pub warning: Option<EngineError>,
}

impl<T> Persisted<T> {
    /// `true` if no storage warning was raised.
    pub fn is_durable(&self) -> bool {
        self.warning.is_none()
    }
}

/// Owner of the latest quiz result and every module completion map.
///
/// Mutating methods take `&mut self`: one logical writer, and each mutation
/// finishes its write before the next can start.
pub struct ProgressStore {
    backend: Arc<dyn KeyValueStore>,
    /// Tie-break order for re-ranking weak topics of loaded results.
    topic_order: Vec<Topic>,
    result: Option<QuizResult>,
    result_loaded: bool,
    modules: HashMap<String, ModuleCompletion>,
}

impl ProgressStore {
    pub fn new(backend: Arc<dyn KeyValueStore>) -> Self {
        Self::with_topic_order(backend, Topic::ALL.to_vec())
    }

    /// A store that re-ranks loaded weak topics in `topic_order`, normally
    /// the active bank's [`topics`](crate::bank::QuestionBank::topics).
    pub fn with_topic_order(backend: Arc<dyn KeyValueStore>, topic_order: Vec<Topic>) -> Self {
        Self {
            backend,
            topic_order,
            result: None,
            result_loaded: false,
            modules: HashMap::new(),
        }
    }

    pub fn backend_name(&self) -> &str {
        self.backend.name()
    }

    /// The latest result, loading it from storage on first use.
    ///
    /// Derived fields are never trusted: level, errors and weak topics are
    /// recomputed, and a level disagreement is logged. A read that fails or
    /// finds an invalid record yields `None` with the error as the warning;
    /// only the first load can warn.
    pub async fn load_result(&mut self) -> Persisted<Option<&QuizResult>> {
        let mut warning = None;
        if !self.result_loaded {
            match self.read_result().await {
                Ok(result) => self.result = result,
                Err(e) => warning = Some(e),
            }
            self.result_loaded = true;
        }
        Persisted {
            value: self.result.as_ref(),
            warning,
        }
    }

    /// The in-memory result without touching storage.
    pub fn current_result(&self) -> Option<&QuizResult> {
        self.result.as_ref()
    }

    /// Replace the stored result. The in-memory copy is replaced first.
    pub async fn save_result(&mut self, result: QuizResult) -> Persisted<QuizResult> {
        self.result = Some(result.clone());
        self.result_loaded = true;

        let warning = match serde_json::to_string(&result) {
            Ok(json) => self.write(RESULT_KEY, &json).await,
            Err(e) => Some(EngineError::StorageUnavailable(format!(
                "failed to serialize result: {e}"
            ))),
        };
        Persisted {
            value: result,
            warning,
        }
    }

    /// Completion map for `module_id`, loaded lazily; all-incomplete if the
    /// module was never written.
    pub async fn completion(&mut self, module_id: &str) -> &ModuleCompletion {
        self.load_completion(module_id).await.value
    }

    /// Like [`completion`](Self::completion), but also returns the warning
    /// when the first load of the module could not read stored state.
    pub async fn load_completion(&mut self, module_id: &str) -> Persisted<&ModuleCompletion> {
        let warning = self.ensure_module(module_id).await;
        Persisted {
            value: self.modules.entry(module_id.to_string()).or_default(),
            warning,
        }
    }

    /// Flip one article and write the whole map back.
    pub async fn toggle(&mut self, module_id: &str, title: &str) -> Persisted<ModuleCompletion> {
        if let Some(err) = self.ensure_module(module_id).await {
            tracing::warn!(module = module_id, "toggling over a cold start: {err}");
        }
        let map = self.modules.entry(module_id.to_string()).or_default();
        let now_done = map.toggle(title);
        let snapshot = map.clone();
        tracing::debug!(module = module_id, title, completed = now_done, "toggled article");

        let key = module_key(module_id);
        let warning = match serde_json::to_string(&snapshot) {
            Ok(json) => self.write(&key, &json).await,
            Err(e) => Some(EngineError::StorageUnavailable(format!(
                "failed to serialize completion for '{module_id}': {e}"
            ))),
        };
        Persisted {
            value: snapshot,
            warning,
        }
    }

    /// Rounded completion percentage of `titles` for `module_id`.
    pub async fn percent_complete<S: AsRef<str>>(&mut self, module_id: &str, titles: &[S]) -> u8 {
        self.completion(module_id).await.percent_complete(titles)
    }

    /// Load a module's map into the cache if it is not there yet.
    async fn ensure_module(&mut self, module_id: &str) -> Option<EngineError> {
        if self.modules.contains_key(module_id) {
            return None;
        }
        let (loaded, warning) = match self.read_json::<ModuleCompletion>(&module_key(module_id)).await {
            Ok(map) => (map.unwrap_or_default(), None),
            Err(e) => (ModuleCompletion::default(), Some(e)),
        };
        self.modules.insert(module_id.to_string(), loaded);
        warning
    }

    async fn read_result(&self) -> Result<Option<QuizResult>, EngineError> {
        let Some(mut result) = self.read_json::<QuizResult>(RESULT_KEY).await? else {
            return Ok(None);
        };
        if let Err(message) = result.validate() {
            let err = EngineError::MalformedStoredState {
                key: RESULT_KEY.to_string(),
                message,
            };
            tracing::warn!("discarding stored result: {err}");
            return Err(err);
        }
        if let Some(stored) = result.rederive(&self.topic_order) {
            tracing::warn!(
                stored = %stored,
                derived = %result.user_level(),
                "stored level disagrees with leveling policy, using derived level"
            );
        }
        Ok(Some(result))
    }

    /// Read and decode `key`. Absent is `Ok(None)`; unreadable and
    /// undecodable are logged and returned as soft errors.
    async fn read_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, EngineError> {
        let raw = match self.backend.get(key).await {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                tracing::debug!(key, "no stored state, cold start");
                return Ok(None);
            }
            Err(e) => {
                let err = EngineError::from(e);
                tracing::warn!(key, "{err}; continuing without stored state");
                return Err(err);
            }
        };
        serde_json::from_str(&raw).map(Some).map_err(|e| {
            let err = EngineError::MalformedStoredState {
                key: key.to_string(),
                message: e.to_string(),
            };
            tracing::warn!("{err}; discarding");
            err
        })
    }

    async fn write(&self, key: &str, json: &str) -> Option<EngineError> {
        match self.backend.set(key, json).await {
            Ok(()) => {
                tracing::debug!(key, backend = self.backend.name(), "persisted");
                None
            }
            Err(e) => {
                let err = EngineError::from(e);
                tracing::warn!(key, "{err}; keeping session-only state");
                Some(err)
            }
        }
    }
}
