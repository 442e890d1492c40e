//! The Frontdesk orchestrator — the decision pipeline behind every answer.
//!
//! Per inbound message the agent chooses exactly one of:
//!
//! 1. **Knowledge-base hit** — a curated answer scored above the confidence
//!    threshold, returned without touching the language model
//! 2. **Generated answer** — a completion grounded in the cached business
//!    context, kept only when the escalation check passes
//! 3. **Escalation** — a help request for a human supervisor, with a fixed
//!    deflection reply to the caller
//!
//! The supervisor feedback loop closes the circle: a resolved help request
//! becomes a new knowledge entry, the customer gets a callback, and the
//! cached business context is refreshed.

pub mod context_cache;
pub mod escalation;
pub mod gate;
pub mod pipeline;
pub mod prompt;

#[cfg(test)]
pub(crate) mod test_support;

pub use context_cache::ContextCache;
pub use escalation::{should_escalate, TRIGGER_PHRASES};
pub use gate::{KnowledgeGate, CONFIDENCE_THRESHOLD};
pub use pipeline::{Agent, DEFLECTION_REPLY, HANDOFF_REPLY};
pub use prompt::{build_system_prompt, DEFLECTION_PHRASE};
