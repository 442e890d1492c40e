//! CompletionProvider trait — the abstraction over the language-model service.
//!
//! A provider takes an ordered conversation, a model identifier, and a
//! temperature, and returns a single text completion. Stateless from the
//! caller's perspective: one request, one response, no streaming.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::ProviderError;
use crate::message::Turn;

/// A single completion request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionRequest {
    /// The model to use (e.g., "llama-3.1-70b-versatile")
    pub model: String,

    /// The conversation: system instruction, transcript, new user turn
    pub messages: Vec<Turn>,

    /// Temperature (0.0 = deterministic, 1.0 = creative)
    #[serde(default = "default_temperature")]
    pub temperature: f32,
}

fn default_temperature() -> f32 {
    0.2
}

/// The language-model collaborator contract.
///
/// Implementations: OpenAI-compatible HTTP endpoints (Groq, OpenAI, Ollama),
/// scripted mocks for tests.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// A human-readable name for this provider (e.g., "groq", "openai").
    fn name(&self) -> &str;

    /// Send a request and get back the completion text.
    async fn complete(&self, request: CompletionRequest)
        -> std::result::Result<String, ProviderError>;
}
