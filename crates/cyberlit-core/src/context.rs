//! Chatbot context: attaching the learner's level to assistant queries.
//!
//! The [`AssistantService`] trait is implemented by the HTTP client in
//! `cyberlit-backends`. The engine never interprets the answer.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::model::Level;
use crate::scoring::QuizResult;

/// Greeting shown before the first exchange.
pub const GREETING: &str = "Hello! I'm your Cyber Hygiene Assistant.";

/// Reply shown when the assistant cannot be reached.
pub const OFFLINE_REPLY: &str =
    "Couldn't connect to the server. Please check your network and API URL.";

/// Reply shown for any other assistant failure.
pub const FAILURE_REPLY: &str = "Sorry, something went wrong. Please try again.";

/// An outgoing assistant query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatQuery {
    pub text: String,
    /// Omitted until the learner has a quiz result.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_level: Option<Level>,
}

impl ChatQuery {
    /// Build a query from user input. Blank input yields `None`.
    pub fn new(text: &str, user_level: Option<Level>) -> Option<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self {
            text: trimmed.to_string(),
            user_level,
        })
    }

    /// Build a query carrying the level from `result`, if any.
    pub fn with_result(text: &str, result: Option<&QuizResult>) -> Option<Self> {
        Self::new(text, result.map(QuizResult::user_level))
    }
}

/// The assistant's answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    pub answer: String,
}

/// Remote assistant that answers learner questions.
#[async_trait]
pub trait AssistantService: Send + Sync {
    /// Service name for logs (e.g. "http").
    fn name(&self) -> &str;

    async fn query(&self, query: &ChatQuery) -> anyhow::Result<ChatReply>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_input_is_no_query() {
        assert!(ChatQuery::new("   \n", Some(Level::Advanced)).is_none());
    }

    #[test]
    fn level_serialized_as_user_level() {
        let q = ChatQuery::new(" what is phishing? ", Some(Level::Intermediate)).unwrap();
        let json = serde_json::to_value(&q).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"text": "what is phishing?", "userLevel": "intermediate"})
        );
    }

    #[test]
    fn level_omitted_without_result() {
        let q = ChatQuery::with_result("hi", None).unwrap();
        let json = serde_json::to_string(&q).unwrap();
        assert_eq!(json, r#"{"text":"hi"}"#);
    }
}
