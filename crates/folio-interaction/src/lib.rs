pub mod context_loader;
pub mod gemini_api_agent;
pub mod model;
pub mod prompt;
pub mod session;

pub use context_loader::{ContentFetcher, HttpContentFetcher, PromptContextLoader};
pub use gemini_api_agent::GeminiApiAgent;
pub use model::{ChatModel, ModelError, ModelTurn, TurnRole};
pub use prompt::{BASE_PROMPT, build_system_prompt};
pub use session::{
    ChatSession, FALLBACK_MESSAGE, NOT_CONFIGURED_MESSAGE, QUICK_REPLIES, SendOutcome,
    WELCOME_MESSAGE,
};
