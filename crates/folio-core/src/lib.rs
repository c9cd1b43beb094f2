pub mod config;
pub mod content;
pub mod error;
pub mod message;

// Re-export common error type
pub use error::FolioError;

pub use content::PromptContext;
pub use message::{ChatMessage, MessageRole};
