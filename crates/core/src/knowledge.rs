//! KnowledgeBase trait — the abstraction over the curated answer store.
//!
//! The knowledge base owns storage, search, and ranking; the core only
//! consumes its results. Search scores are probability-like confidences
//! in [0, 1], not guaranteed calibrated.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::KnowledgeError;

/// A candidate answer retrieved from the knowledge base.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnowledgeMatch {
    /// The curated answer text
    pub answer: String,

    /// Relevance confidence in [0, 1], assigned by the knowledge base's ranker
    pub relevance_score: f32,
}

/// A new entry to fold into the knowledge base.
///
/// The supervisor feedback loop writes these with `category = "learned"`,
/// `source = "supervisor"` and a fixed confidence of 0.9.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnowledgeEntry {
    pub question: String,
    pub answer: String,
    pub category: String,
    pub confidence: f32,
    pub source: String,

    /// The help request this entry was learned from, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

/// The knowledge-base collaborator contract.
///
/// Implementations live outside the core; tests use in-memory fakes.
#[async_trait]
pub trait KnowledgeBase: Send + Sync {
    /// Render the whole knowledge base as a business-context string for
    /// prompt injection. Fetched at initialization and after each
    /// supervisor-feedback cycle, never per-message.
    async fn context_string(&self) -> std::result::Result<String, KnowledgeError>;

    /// Search for the best match to a caller question.
    async fn search(&self, query: &str)
        -> std::result::Result<Option<KnowledgeMatch>, KnowledgeError>;

    /// Add a new entry.
    async fn add(&self, entry: KnowledgeEntry) -> std::result::Result<(), KnowledgeError>;
}
