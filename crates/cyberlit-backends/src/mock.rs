//! Mock assistant for testing.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use cyberlit_core::context::{AssistantService, ChatQuery, ChatReply};

use crate::error::AssistantError;

/// An assistant that answers from a fixed table, without any network.
///
/// Replies are chosen by substring match on the query text.
pub struct MockAssistant {
    /// Map of query substring → answer.
    responses: HashMap<String, String>,
    default_answer: String,
    offline: AtomicBool,
    call_count: AtomicU32,
    last_query: Mutex<Option<ChatQuery>>,
}

impl MockAssistant {
    pub fn new(responses: HashMap<String, String>) -> Self {
        Self {
            responses,
            default_answer: "I'm not sure about that one.".to_string(),
            offline: AtomicBool::new(false),
            call_count: AtomicU32::new(0),
            last_query: Mutex::new(None),
        }
    }

    /// A mock that always gives the same answer.
    pub fn with_fixed_answer(answer: &str) -> Self {
        let mut mock = Self::new(HashMap::new());
        mock.default_answer = answer.to_string();
        mock
    }

    /// Make every subsequent query fail as if the service were unreachable.
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::Relaxed);
    }

    pub fn call_count(&self) -> u32 {
        self.call_count.load(Ordering::Relaxed)
    }

    pub fn last_query(&self) -> Option<ChatQuery> {
        self.last_query
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

#[async_trait]
impl AssistantService for MockAssistant {
    fn name(&self) -> &str {
        "mock"
    }

    async fn query(&self, query: &ChatQuery) -> anyhow::Result<ChatReply> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        *self.last_query.lock().unwrap_or_else(|e| e.into_inner()) = Some(query.clone());

        if self.offline.load(Ordering::Relaxed) {
            return Err(AssistantError::Unreachable {
                url: "mock://assistant".into(),
                message: "offline".into(),
            }
            .into());
        }

        let answer = self
            .responses
            .iter()
            .find(|(key, _)| query.text.contains(key.as_str()))
            .map(|(_, v)| v.clone())
            .unwrap_or_else(|| self.default_answer.clone());

        Ok(ChatReply { answer })
    }
}
