//! HTTP client for the assistant service.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::instrument;

use cyberlit_core::context::{AssistantService, ChatQuery, ChatReply};

use crate::error::AssistantError;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Assistant reached over HTTP at `{base_url}/api/query`.
pub struct HttpAssistant {
    base_url: String,
    timeout_secs: u64,
    client: reqwest::Client,
}

impl HttpAssistant {
    pub fn new(base_url: &str, timeout_secs: u64) -> anyhow::Result<Self> {
        let base = if base_url.is_empty() {
            DEFAULT_BASE_URL
        } else {
            base_url
        };

        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self {
            base_url: base.trim_end_matches('/').to_string(),
            timeout_secs,
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self) -> String {
        format!("{}/api/query", self.base_url)
    }
}

#[derive(Deserialize)]
struct QueryResponse {
    answer: String,
}

#[async_trait]
impl AssistantService for HttpAssistant {
    fn name(&self) -> &str {
        "http"
    }

    #[instrument(skip(self, query), fields(level = ?query.user_level))]
    async fn query(&self, query: &ChatQuery) -> anyhow::Result<ChatReply> {
        let response = self
            .client
            .post(self.endpoint())
            .json(query)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AssistantError::Timeout(self.timeout_secs)
                } else {
                    // Any transport failure before a response reads as offline.
                    AssistantError::Unreachable {
                        url: self.base_url.clone(),
                        message: e.to_string(),
                    }
                }
            })?;

        let status = response.status().as_u16();
        if status >= 400 {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status, "assistant returned an error status");
            return Err(AssistantError::ApiError {
                status,
                message: body,
            }
            .into());
        }

        let parsed: QueryResponse = response
            .json()
            .await
            .map_err(|e| AssistantError::InvalidResponse(e.to_string()))?;

        Ok(ChatReply {
            answer: parsed.answer,
        })
    }
}
