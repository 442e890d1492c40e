//! EscalationDetector — decides when a human must take over.
//!
//! A pure function over the generated response and the knowledge-match
//! result. Escalation fires when the model hedges (trigger phrase in the
//! text) or when no sufficiently strong knowledge match backed the answer —
//! so even a fluent, confident-sounding generation is escalated if the
//! knowledge base could not vouch for it.

use frontdesk_core::knowledge::KnowledgeMatch;

use crate::gate::CONFIDENCE_THRESHOLD;

/// Hedging phrases that force escalation, matched case-insensitively as
/// substrings of the generated response.
pub const TRIGGER_PHRASES: [&str; 5] = [
    "let me check",
    "check with my supervisor",
    "i'm not sure",
    "i don't know",
    "i don't have that information",
];

/// Whether the response must be routed to a human supervisor.
pub fn should_escalate(response: &str, knowledge: Option<&KnowledgeMatch>) -> bool {
    let lower = response.to_lowercase();
    let hedged = TRIGGER_PHRASES.iter().any(|t| lower.contains(t));

    let low_confidence = match knowledge {
        Some(m) => m.relevance_score < CONFIDENCE_THRESHOLD,
        None => true,
    };

    hedged || low_confidence
}
