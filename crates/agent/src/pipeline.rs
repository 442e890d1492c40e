//! The message-processing orchestrator — the heart of Frontdesk.
//!
//! Per inbound message the pipeline runs:
//!
//! 1. **Knowledge lookup** — a match above the confidence threshold answers
//!    the message outright and nothing else runs.
//! 2. **Prompt assembly** — system instruction + transcript + the new turn.
//! 3. **Generation** — one completion at low temperature.
//! 4. **History update** — user then assistant turn, before the escalation
//!    decision, so the transcript reflects what was actually generated.
//! 5. **Escalation decision** — hedging text or weak knowledge backing.
//! 6. **Escalation side effects** — help request, supervisor notice,
//!    notification counter; the caller gets the fixed deflection reply.
//! 7. Otherwise the generated answer is returned as-is.
//!
//! Any failure inside the pipeline degrades to an escalation-shaped handoff
//! reply instead of propagating; side effects already performed stay.

use std::sync::Arc;

use frontdesk_config::AppConfig;
use frontdesk_core::error::{Error, HelpDeskError, Result};
use frontdesk_core::helpdesk::{HelpRequestStore, NewHelpRequest};
use frontdesk_core::knowledge::{KnowledgeBase, KnowledgeEntry};
use frontdesk_core::message::{CallerInfo, Role, SessionId, Turn};
use frontdesk_core::notify::NotificationService;
use frontdesk_core::provider::{CompletionProvider, CompletionRequest};
use frontdesk_core::reply::{Reply, Resolution};
use frontdesk_core::session::SessionStore;
use tracing::{debug, info, warn};

use crate::context_cache::ContextCache;
use crate::escalation::should_escalate;
use crate::gate::KnowledgeGate;
use crate::prompt::build_system_prompt;

/// Spoken to the caller whenever the question is routed to a supervisor.
pub const DEFLECTION_REPLY: &str = "Let me check with my supervisor and get back to \
     you shortly. We'll call you back with the information you need.";

/// Spoken to the caller when the pipeline itself failed.
pub const HANDOFF_REPLY: &str =
    "I'm having trouble right now. Let me connect you with my supervisor.";

/// Confidence reported for a generated answer with no knowledge match.
const DEFAULT_GENERATED_CONFIDENCE: f32 = 0.5;

/// How many trailing transcript turns go into a help request's context.
const CONTEXT_EXCERPT_TURNS: usize = 6;

/// The conversational front-end: answers from the knowledge base when it
/// can, generates when it must, and escalates to a human when confidence
/// is low. One instance serves all sessions.
pub struct Agent {
    provider: Arc<dyn CompletionProvider>,
    knowledge: Arc<dyn KnowledgeBase>,
    help_desk: Arc<dyn HelpRequestStore>,
    notifier: Arc<dyn NotificationService>,
    sessions: Arc<dyn SessionStore>,
    gate: KnowledgeGate,
    context: ContextCache,
    business_name: String,
    model: String,
    temperature: f32,
}

impl Agent {
    pub fn new(
        config: &AppConfig,
        provider: Arc<dyn CompletionProvider>,
        knowledge: Arc<dyn KnowledgeBase>,
        help_desk: Arc<dyn HelpRequestStore>,
        notifier: Arc<dyn NotificationService>,
        sessions: Arc<dyn SessionStore>,
    ) -> Self {
        Self {
            provider,
            gate: KnowledgeGate::new(knowledge.clone()),
            knowledge,
            help_desk,
            notifier,
            sessions,
            context: ContextCache::new(),
            business_name: config.business_name.clone(),
            model: config.model.clone(),
            temperature: config.temperature,
        }
    }

    /// Fetch the business context and swap it into the cache.
    ///
    /// Called once at startup and again after every supervisor-feedback
    /// cycle. A failure here aborts startup; there is no retry.
    pub async fn initialize(&self) -> Result<()> {
        let context = self
            .knowledge
            .context_string()
            .await
            .map_err(|e| Error::Init {
                message: format!("business context fetch failed: {e}"),
            })?;
        self.context.swap(context).await;
        info!("Agent initialized with business context");
        Ok(())
    }

    /// Process one inbound caller message. Never fails: any internal error
    /// is converted to an escalation-shaped handoff reply with the error
    /// attached for diagnostics. Side effects performed before a failing
    /// step (history appends, a created help request) are not rolled back.
    pub async fn process_message(
        &self,
        message: &str,
        session_id: &SessionId,
        caller: &CallerInfo,
    ) -> Reply {
        match self.run_pipeline(message, session_id, caller).await {
            Ok(reply) => reply,
            Err(e) => {
                warn!(error = %e, session = %session_id, "Message processing failed, handing off");
                Reply::Escalation {
                    answer: HANDOFF_REPLY.into(),
                    request_id: None,
                    error: Some(e.to_string()),
                }
            }
        }
    }

    async fn run_pipeline(
        &self,
        message: &str,
        session_id: &SessionId,
        caller: &CallerInfo,
    ) -> Result<Reply> {
        // 1. Knowledge lookup. An accepted match is terminal and leaves the
        // transcript untouched — only the generation path records history.
        let knowledge = self.gate.lookup(message).await?;

        if let Some(m) = &knowledge {
            if self.gate.accepts(m) {
                info!(score = m.relevance_score, "Answering from knowledge base");
                return Ok(Reply::KnowledgeBase {
                    answer: m.answer.clone(),
                    confidence: m.relevance_score,
                });
            }
        }

        // 2. Prompt assembly: system instruction, transcript, new user turn.
        let history = self.sessions.get(session_id).await?;
        let system = build_system_prompt(&self.business_name, &self.context.load().await);
        let user_turn = Turn::user(message);

        let mut messages = Vec::with_capacity(history.len() + 2);
        messages.push(Turn::system(system));
        messages.extend(history);
        messages.push(user_turn.clone());

        // 3. Generation.
        debug!(session = %session_id, turns = messages.len(), "Requesting completion");
        let response = self
            .provider
            .complete(CompletionRequest {
                model: self.model.clone(),
                messages,
                temperature: self.temperature,
            })
            .await?;

        // 4. History update — user then assistant, regardless of whether
        // escalation follows.
        self.sessions.append(session_id, user_turn).await?;
        self.sessions
            .append(session_id, Turn::assistant(response.clone()))
            .await?;

        // 5. Escalation decision.
        if should_escalate(&response, knowledge.as_ref()) {
            info!(session = %session_id, "Escalating to supervisor");
            return self.escalate(message, session_id, caller).await;
        }

        // 7. Generated answer.
        let confidence = knowledge
            .map(|m| m.relevance_score)
            .unwrap_or(DEFAULT_GENERATED_CONFIDENCE);
        Ok(Reply::Generated {
            answer: response,
            confidence,
        })
    }

    /// Step 6: the escalation side-effect sequence, in order:
    ///
    /// 1. create the durable help request,
    /// 2. notify the supervisor,
    /// 3. bump the request's notification counter.
    ///
    /// A failure partway leaves the earlier steps in place (a created
    /// request without a notification, or a notification without a counter
    /// bump); there are no compensating actions.
    async fn escalate(
        &self,
        question: &str,
        session_id: &SessionId,
        caller: &CallerInfo,
    ) -> Result<Reply> {
        let transcript = self.sessions.get(session_id).await?;

        let request = self
            .help_desk
            .create(NewHelpRequest {
                question: question.into(),
                caller_phone: caller.phone_or_unknown().into(),
                caller_name: caller.name_or_unknown().into(),
                session_id: session_id.to_string(),
                context: format_context(&transcript),
                priority: "normal".into(),
            })
            .await?;

        self.notifier.notify_supervisor(&request).await?;
        self.help_desk.increment_notifications(&request.id).await?;

        info!(request = %request.id, "Help request created and supervisor notified");

        Ok(Reply::Escalation {
            answer: DEFLECTION_REPLY.into(),
            request_id: Some(request.id),
            error: None,
        })
    }

    /// Fold a supervisor's answer back into the system: resolve the
    /// request, learn the answer as a knowledge entry, call the customer
    /// back, and refresh the cached business context so future prompts see
    /// the new fact.
    ///
    /// Unlike `process_message`, errors propagate — including NotFound for
    /// an unknown request id, which performs no side effects at all.
    pub async fn handle_supervisor_response(
        &self,
        request_id: &str,
        answer: &str,
    ) -> Result<Resolution> {
        let request = self
            .help_desk
            .get(request_id)
            .await?
            .ok_or_else(|| HelpDeskError::NotFound {
                id: request_id.into(),
            })?;

        self.help_desk.resolve(request_id, answer).await?;

        self.knowledge
            .add(KnowledgeEntry {
                question: request.question.clone(),
                answer: answer.into(),
                category: "learned".into(),
                confidence: 0.9,
                source: "supervisor".into(),
                request_id: Some(request_id.into()),
            })
            .await?;

        self.notifier.callback_customer(&request, answer).await?;

        self.initialize().await?;

        info!(request = request_id, "Supervisor answer learned, customer called back");

        Ok(Resolution {
            success: true,
            request_id: request_id.into(),
        })
    }

    /// Drop a session's transcript. Returns whether it existed.
    pub async fn clear_session(&self, session_id: &SessionId) -> Result<bool> {
        Ok(self.sessions.clear(session_id).await?)
    }

    /// Number of sessions currently tracked.
    pub async fn active_session_count(&self) -> Result<usize> {
        Ok(self.sessions.count().await?)
    }
}

/// Render the last turns of a transcript as "Customer:"/"AI:" lines for a
/// supervisor to skim.
fn format_context(transcript: &[Turn]) -> String {
    let start = transcript.len().saturating_sub(CONTEXT_EXCERPT_TURNS);
    transcript[start..]
        .iter()
        .map(|turn| {
            let speaker = match turn.role {
                Role::User => "Customer",
                Role::Assistant => "AI",
                Role::System => "System",
            };
            format!("{speaker}: {}", turn.content)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
