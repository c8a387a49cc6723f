//! Assistant error types.

use thiserror::Error;

use cyberlit_core::context::{FAILURE_REPLY, OFFLINE_REPLY};

/// Errors that can occur when querying the assistant service.
#[derive(Debug, Error)]
pub enum AssistantError {
    /// The service could not be reached at all.
    #[error("assistant unreachable at {url}: {message}")]
    Unreachable { url: String, message: String },

    /// The request timed out.
    #[error("request timed out after {0}s")]
    Timeout(u64),

    /// The service answered with an error status.
    #[error("assistant error (HTTP {status}): {message}")]
    ApiError { status: u16, message: String },

    /// The response body was not the expected shape.
    #[error("invalid assistant response: {0}")]
    InvalidResponse(String),
}

impl AssistantError {
    /// Returns `true` if the failure is a connectivity problem.
    pub fn is_connectivity(&self) -> bool {
        matches!(
            self,
            AssistantError::Unreachable { .. } | AssistantError::Timeout(_)
        )
    }

    /// The message to show the learner instead of an answer.
    pub fn user_message(&self) -> &'static str {
        if self.is_connectivity() {
            OFFLINE_REPLY
        } else {
            FAILURE_REPLY
        }
    }
}

/// Pick the learner-facing text for a failed query.
///
/// Errors that are not an [`AssistantError`] get the generic reply.
pub fn failure_message(err: &anyhow::Error) -> &'static str {
    err.downcast_ref::<AssistantError>()
        .map(AssistantError::user_message)
        .unwrap_or(FAILURE_REPLY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connectivity_errors_get_offline_reply() {
        let err = AssistantError::Unreachable {
            url: "http://localhost:8000".into(),
            message: "connection refused".into(),
        };
        assert_eq!(err.user_message(), OFFLINE_REPLY);
        assert_eq!(AssistantError::Timeout(30).user_message(), OFFLINE_REPLY);
    }

    #[test]
    fn other_errors_get_generic_reply() {
        let err: anyhow::Error = AssistantError::ApiError {
            status: 500,
            message: "boom".into(),
        }
        .into();
        assert_eq!(failure_message(&err), FAILURE_REPLY);
        assert_eq!(failure_message(&anyhow::anyhow!("other")), FAILURE_REPLY);
    }

    #[test]
    fn downcast_through_anyhow() {
        let err: anyhow::Error = AssistantError::Timeout(5).into();
        assert_eq!(failure_message(&err), OFFLINE_REPLY);
    }
}
