//! Reply — the outcome of processing one inbound message.
//!
//! Exactly one variant applies per message. The variant is the source
//! discriminant on the wire; each case carries only the fields that apply
//! to it, so "needs help iff escalation" and "confidence 0 iff escalation"
//! hold by construction rather than by convention.

use serde::{Deserialize, Serialize};

/// The result of one `process_message` call.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum Reply {
    /// A curated answer scored above the confidence threshold. Terminal:
    /// generation was skipped entirely.
    KnowledgeBase { answer: String, confidence: f32 },

    /// A generated answer that passed the escalation check.
    #[serde(rename = "ai_generated")]
    Generated { answer: String, confidence: f32 },

    /// Routed to a human. `request_id` is absent only when the pipeline
    /// failed before a help request could be created; `error` carries the
    /// underlying failure for diagnostics in that case.
    Escalation {
        answer: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        request_id: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        error: Option<String>,
    },
}

impl Reply {
    /// Whether a human needs to follow up. True iff this is an escalation.
    pub fn needs_help(&self) -> bool {
        matches!(self, Reply::Escalation { .. })
    }

    /// Confidence in the answer. Zero iff this is an escalation.
    pub fn confidence(&self) -> f32 {
        match self {
            Reply::KnowledgeBase { confidence, .. } => *confidence,
            Reply::Generated { confidence, .. } => *confidence,
            Reply::Escalation { .. } => 0.0,
        }
    }

    /// The text to speak back to the caller.
    pub fn answer(&self) -> &str {
        match self {
            Reply::KnowledgeBase { answer, .. } => answer,
            Reply::Generated { answer, .. } => answer,
            Reply::Escalation { answer, .. } => answer,
        }
    }

    /// The source discriminant as serialized ("knowledge_base",
    /// "ai_generated", "escalation").
    pub fn source(&self) -> &'static str {
        match self {
            Reply::KnowledgeBase { .. } => "knowledge_base",
            Reply::Generated { .. } => "ai_generated",
            Reply::Escalation { .. } => "escalation",
        }
    }
}

/// Acknowledgment returned by the supervisor feedback loop.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resolution {
    pub success: bool,
    pub request_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn needs_help_iff_escalation() {
        let kb = Reply::KnowledgeBase { answer: "9am".into(), confidence: 0.92 };
        let generated = Reply::Generated { answer: "Sure".into(), confidence: 0.5 };
        let escalated = Reply::Escalation {
            answer: "Let me check".into(),
            request_id: Some("req_1".into()),
            error: None,
        };

        assert!(!kb.needs_help());
        assert!(!generated.needs_help());
        assert!(escalated.needs_help());
    }

    #[test]
    fn confidence_zero_iff_escalation() {
        let escalated = Reply::Escalation {
            answer: "Let me check".into(),
            request_id: None,
            error: Some("provider down".into()),
        };
        assert_eq!(escalated.confidence(), 0.0);

        let kb = Reply::KnowledgeBase { answer: "9am".into(), confidence: 0.92 };
        assert!(kb.confidence() > 0.0);
    }

    #[test]
    fn source_tag_on_the_wire() {
        let kb = Reply::KnowledgeBase { answer: "9am".into(), confidence: 0.92 };
        let json = serde_json::to_string(&kb).unwrap();
        assert!(json.contains("\"source\":\"knowledge_base\""));

        let generated = Reply::Generated { answer: "Sure".into(), confidence: 0.5 };
        let json = serde_json::to_string(&generated).unwrap();
        assert!(json.contains("\"source\":\"ai_generated\""));

        let escalated = Reply::Escalation {
            answer: "Let me check".into(),
            request_id: Some("req_1".into()),
            error: None,
        };
        let json = serde_json::to_string(&escalated).unwrap();
        assert!(json.contains("\"source\":\"escalation\""));
        assert!(!json.contains("error"));
    }

    #[test]
    fn reply_roundtrip() {
        let escalated = Reply::Escalation {
            answer: "handoff".into(),
            request_id: None,
            error: Some("timeout".into()),
        };
        let json = serde_json::to_string(&escalated).unwrap();
        let back: Reply = serde_json::from_str(&json).unwrap();
        assert!(back.needs_help());
        assert_eq!(back.source(), "escalation");
    }
}
