//! Chat-completion provider abstraction
//!
//! The recommendation service only needs "send a system and user message, get the
//! reply text back". Providers wrap a specific API behind that.
use crate::error::AppResult;

pub mod groq;

pub use groq::GroqProvider;

/// A single chat completion request
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub system: String,
    pub user: String,
    pub temperature: f32,
}

/// Trait for chat-completion providers
#[async_trait::async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Return the text of the model's reply
    async fn complete(&self, request: CompletionRequest) -> AppResult<String>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}
