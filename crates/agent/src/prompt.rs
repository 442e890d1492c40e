//! System-instruction assembly.
//!
//! The instruction is a pure function of the business display name and the
//! cached business-context string. The rule set is fixed: answer only from
//! the supplied information, deflect when uncertain, never fabricate, keep
//! answers phone-conversation short, plain text only.

/// The deflection phrase the model is told to use when uncertain. The
/// escalation detector watches for its prefix in generated answers.
pub const DEFLECTION_PHRASE: &str =
    "Let me check with my supervisor and get back to you.";

/// Compose the system instruction for a generation request.
pub fn build_system_prompt(business_name: &str, business_context: &str) -> String {
    format!(
        "You are a helpful AI assistant for {business_name}.\n\
         \n\
         BUSINESS INFORMATION:\n\
         {business_context}\n\
         \n\
         RULES:\n\
         - Answer ONLY using the information above.\n\
         - Be friendly, natural, and professional.\n\
         - If you are not confident or unsure, say:\n\
           \"{DEFLECTION_PHRASE}\"\n\
         - NEVER guess or make up information.\n\
         - Keep answers short like a phone conversation.\n\
         \n\
         Always output plain text."
    )
}
