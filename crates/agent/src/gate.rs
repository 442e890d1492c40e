//! KnowledgeGate — the short-circuit in front of generation.
//!
//! Queries the knowledge base and applies the confidence threshold. An
//! accepted match answers the message outright; generation never runs.

use std::sync::Arc;

use frontdesk_core::error::KnowledgeError;
use frontdesk_core::knowledge::{KnowledgeBase, KnowledgeMatch};
use tracing::debug;

/// The fixed cutoff above which a knowledge-base answer is trusted without
/// human review. Comparisons are strict on both sides: `> 0.7` accepts,
/// `< 0.7` counts as low confidence, exactly 0.7 is neither.
pub const CONFIDENCE_THRESHOLD: f32 = 0.7;

/// Decides whether a knowledge-base match short-circuits generation.
pub struct KnowledgeGate {
    knowledge: Arc<dyn KnowledgeBase>,
    threshold: f32,
}

impl KnowledgeGate {
    pub fn new(knowledge: Arc<dyn KnowledgeBase>) -> Self {
        Self {
            knowledge,
            threshold: CONFIDENCE_THRESHOLD,
        }
    }

    /// Search the knowledge base for the best match to a caller question.
    pub async fn lookup(
        &self,
        query: &str,
    ) -> Result<Option<KnowledgeMatch>, KnowledgeError> {
        let result = self.knowledge.search(query).await?;
        if let Some(m) = &result {
            debug!(score = m.relevance_score, "Knowledge base match");
        }
        Ok(result)
    }

    /// Whether a match is strong enough to answer without generation.
    pub fn accepts(&self, m: &KnowledgeMatch) -> bool {
        m.relevance_score > self.threshold
    }
}
