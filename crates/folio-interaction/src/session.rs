//! Conversation session management.
//!
//! `ChatSession` owns the visible transcript and the turn-by-turn exchange
//! with the chat model. Sends are strictly sequential: while one request is
//! in flight the session is `Sending` and further sends are rejected. Every
//! accepted user message is answered by exactly one assistant message — a
//! real reply on success, a fixed fallback string on any failure.

use crate::model::{ChatModel, ModelTurn};
use folio_core::message::{ChatMessage, MessageRole};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;
use tracing::{error, warn};

/// Assistant message that seeds every new transcript.
pub const WELCOME_MESSAGE: &str =
    "Hey! 👋 I'm Prince's AI assistant. Ask me anything about his skills, experience, or projects!";

/// Fixed reply when no model credential is configured.
pub const NOT_CONFIGURED_MESSAGE: &str = "⚠️ Gemini API key is not configured. Add it to ~/.config/folio/secret.json or set the GEMINI_API_KEY environment variable.";

/// Fixed reply when the model call fails for any other reason.
pub const FALLBACK_MESSAGE: &str =
    "Sorry, I couldn't get a response right now. Please try again in a moment.";

/// Suggested openers shown before the first user message.
pub const QUICK_REPLIES: [&str; 4] = [
    "What are your skills?",
    "Tell me about your experience",
    "What projects have you built?",
    "How can I contact you?",
];

/// Result of asking the session to send a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendOutcome {
    /// The message was accepted and an assistant message was appended.
    Replied,
    /// A previous send is still in flight; nothing was changed.
    Busy,
    /// The input was empty after trimming; nothing was changed.
    Ignored,
}

/// A single chat session: system prompt, transcript, and send gate.
///
/// The transcript is append-only and strictly ordered by send time; the
/// welcome message is always first and is excluded when reconstructing the
/// history sent to the model. Nothing is persisted beyond this value's
/// lifetime.
pub struct ChatSession {
    /// The model to converse with; `None` when no credential is configured.
    model: Option<Arc<dyn ChatModel>>,
    /// System instruction sent with every request.
    system_prompt: String,
    /// The visible transcript, welcome message first.
    transcript: Arc<RwLock<Vec<ChatMessage>>>,
    /// Send gate: true while a model request is outstanding.
    sending: AtomicBool,
}

impl ChatSession {
    /// Creates a session seeded with the welcome message.
    ///
    /// # Arguments
    ///
    /// * `model` - The chat model, or `None` when no credential is configured
    /// * `system_prompt` - The full system instruction for this session
    pub fn new(model: Option<Arc<dyn ChatModel>>, system_prompt: impl Into<String>) -> Self {
        Self {
            model,
            system_prompt: system_prompt.into(),
            transcript: Arc::new(RwLock::new(vec![ChatMessage::assistant(WELCOME_MESSAGE)])),
            sending: AtomicBool::new(false),
        }
    }

    /// Returns the system prompt in use.
    pub fn system_prompt(&self) -> &str {
        &self.system_prompt
    }

    /// Returns true while a model request is outstanding.
    pub fn is_sending(&self) -> bool {
        self.sending.load(Ordering::SeqCst)
    }

    /// Returns a snapshot of the transcript.
    pub async fn transcript(&self) -> Vec<ChatMessage> {
        self.transcript.read().await.clone()
    }

    /// Sends one user message and appends the assistant's answer.
    ///
    /// The user message is appended immediately (this always succeeds
    /// locally); the assistant message is either the model's reply or a
    /// fixed fallback string. Errors are terminal for the turn — nothing is
    /// retried — and the session always returns to idle.
    pub async fn send_message(&self, text: &str) -> SendOutcome {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return SendOutcome::Ignored;
        }

        // One request in flight at a time.
        if self
            .sending
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return SendOutcome::Busy;
        }

        let history = {
            let mut transcript = self.transcript.write().await;
            // History excludes the welcome message and the message being sent.
            let history = Self::history_turns(&transcript);
            transcript.push(ChatMessage::user(trimmed));
            history
        };

        let reply = match &self.model {
            None => {
                warn!("model credential not configured; returning fixed reply");
                NOT_CONFIGURED_MESSAGE.to_string()
            }
            Some(model) => match model.generate(&self.system_prompt, &history, trimmed).await {
                Ok(reply) => reply,
                Err(err) => {
                    error!(error = %err, "model call failed; returning fallback reply");
                    FALLBACK_MESSAGE.to_string()
                }
            },
        };

        self.transcript.write().await.push(ChatMessage::assistant(reply));
        self.sending.store(false, Ordering::SeqCst);
        SendOutcome::Replied
    }

    /// Converts prior transcript entries (minus the leading welcome message)
    /// into model turns.
    fn history_turns(transcript: &[ChatMessage]) -> Vec<ModelTurn> {
        transcript
            .iter()
            .skip(1)
            .map(|message| match message.role {
                MessageRole::User => ModelTurn::user(message.content.clone()),
                MessageRole::Assistant => ModelTurn::model(message.content.clone()),
            })
            .collect()
    }
}
