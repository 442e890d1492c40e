//! Language-model provider implementations for Frontdesk.
//!
//! The pipeline talks to any `CompletionProvider`; the only production
//! implementation is the OpenAI-compatible HTTP client, which covers Groq,
//! OpenAI, Ollama, and anything else that serves `/v1/chat/completions`.

mod openai_compat;

pub use openai_compat::OpenAiCompatProvider;
