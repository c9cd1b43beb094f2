//! The chat-model seam.
//!
//! `ChatModel` abstracts the hosted generative-language API so that the
//! conversation session can be exercised in tests without a network. The
//! production implementation is [`crate::gemini_api_agent::GeminiApiAgent`].

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

/// Role of a prior turn when replaying history to the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnRole {
    /// The site visitor.
    User,
    /// The model's own previous replies.
    Model,
}

impl TurnRole {
    /// Wire representation used by the Gemini API.
    pub fn as_str(&self) -> &'static str {
        match self {
            TurnRole::User => "user",
            TurnRole::Model => "model",
        }
    }
}

/// One prior turn of conversation history sent alongside a new message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelTurn {
    pub role: TurnRole,
    pub text: String,
}

impl ModelTurn {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: TurnRole::User,
            text: text.into(),
        }
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: TurnRole::Model,
            text: text.into(),
        }
    }
}

/// Errors reported by a chat model implementation.
#[derive(Error, Debug)]
pub enum ModelError {
    /// The request could not be built or the response carried no usable text.
    #[error("Model execution failed: {0}")]
    ExecutionFailed(String),

    /// Transport-level or HTTP-level failure from the remote API.
    #[error("Model API error: {message}")]
    ProcessError {
        status_code: Option<u16>,
        message: String,
        is_retryable: bool,
        retry_after: Option<Duration>,
    },

    /// Anything else (e.g. a malformed response body).
    #[error("Model error: {0}")]
    Other(String),
}

impl ModelError {
    /// Convenience constructor for HTTP errors carrying a `retry-after` hint.
    pub fn process_error_with_retry_after(
        status_code: u16,
        message: impl Into<String>,
        is_retryable: bool,
        retry_after: Duration,
    ) -> Self {
        Self::ProcessError {
            status_code: Some(status_code),
            message: message.into(),
            is_retryable,
            retry_after: Some(retry_after),
        }
    }
}

/// A hosted generative-text model that answers one user message given a
/// system instruction and the prior conversation turns.
#[async_trait]
pub trait ChatModel: Send + Sync {
    /// Generates a reply to `message`.
    ///
    /// # Arguments
    ///
    /// * `system_instruction` - Fixed instruction steering the model
    /// * `history` - Prior turns in order, excluding the new message
    /// * `message` - The new user message text
    async fn generate(
        &self,
        system_instruction: &str,
        history: &[ModelTurn],
        message: &str,
    ) -> Result<String, ModelError>;
}
