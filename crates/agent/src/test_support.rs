//! Shared test fakes for pipeline tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use frontdesk_core::error::{HelpDeskError, KnowledgeError, NotifyError, ProviderError};
use frontdesk_core::helpdesk::{HelpRequest, HelpRequestStore, NewHelpRequest, RequestStatus};
use frontdesk_core::knowledge::{KnowledgeBase, KnowledgeEntry, KnowledgeMatch};
use frontdesk_core::notify::NotificationService;
use frontdesk_core::provider::{CompletionProvider, CompletionRequest};

/// A provider that returns a sequence of scripted completions.
///
/// Each call to `complete` returns the next response in the queue.
/// Panics if more calls are made than responses provided.
pub struct ScriptedProvider {
    responses: Mutex<Vec<String>>,
    call_count: Mutex<usize>,
}

impl ScriptedProvider {
    pub fn new(responses: Vec<&str>) -> Self {
        Self {
            responses: Mutex::new(responses.into_iter().map(String::from).collect()),
            call_count: Mutex::new(0),
        }
    }

    /// A provider scripted with a single response.
    pub fn single(text: &str) -> Self {
        Self::new(vec![text])
    }

    /// A provider that must never be called.
    pub fn unreachable() -> Self {
        Self::new(vec![])
    }

    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }
}

#[async_trait]
impl CompletionProvider for ScriptedProvider {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn complete(&self, _request: CompletionRequest) -> Result<String, ProviderError> {
        let mut count = self.call_count.lock().unwrap();
        let responses = self.responses.lock().unwrap();

        if *count >= responses.len() {
            panic!(
                "ScriptedProvider: no more responses (call #{}, have {})",
                *count,
                responses.len()
            );
        }

        let response = responses[*count].clone();
        *count += 1;
        Ok(response)
    }
}

/// A provider that always fails with a network error.
pub struct FailingProvider;

#[async_trait]
impl CompletionProvider for FailingProvider {
    fn name(&self) -> &str {
        "failing"
    }

    async fn complete(&self, _request: CompletionRequest) -> Result<String, ProviderError> {
        Err(ProviderError::Network("connection refused".into()))
    }
}

/// An in-memory knowledge base with a scripted search result and call
/// recording for added entries and context fetches.
pub struct FakeKnowledgeBase {
    pub context: Mutex<String>,
    pub search_result: Mutex<Option<KnowledgeMatch>>,
    pub added: Mutex<Vec<KnowledgeEntry>>,
    pub context_fetches: Mutex<usize>,
    pub fail_context: bool,
}

impl FakeKnowledgeBase {
    pub fn empty() -> Self {
        Self::with_match(None)
    }

    pub fn with_match(search_result: Option<KnowledgeMatch>) -> Self {
        Self {
            context: Mutex::new("Hours: 9am to 5pm".into()),
            search_result: Mutex::new(search_result),
            added: Mutex::new(Vec::new()),
            context_fetches: Mutex::new(0),
            fail_context: false,
        }
    }

    pub fn scored(score: f32) -> Self {
        Self::with_match(Some(KnowledgeMatch {
            answer: "9am to 5pm".into(),
            relevance_score: score,
        }))
    }

    pub fn broken_context() -> Self {
        Self {
            fail_context: true,
            ..Self::empty()
        }
    }
}

#[async_trait]
impl KnowledgeBase for FakeKnowledgeBase {
    async fn context_string(&self) -> Result<String, KnowledgeError> {
        if self.fail_context {
            return Err(KnowledgeError::ContextUnavailable("store offline".into()));
        }
        *self.context_fetches.lock().unwrap() += 1;
        Ok(self.context.lock().unwrap().clone())
    }

    async fn search(&self, _query: &str) -> Result<Option<KnowledgeMatch>, KnowledgeError> {
        Ok(self.search_result.lock().unwrap().clone())
    }

    async fn add(&self, entry: KnowledgeEntry) -> Result<(), KnowledgeError> {
        self.added.lock().unwrap().push(entry);
        Ok(())
    }
}

/// An in-memory help-request store with sequential ids.
pub struct FakeHelpDesk {
    pub requests: Mutex<HashMap<String, HelpRequest>>,
    next_id: Mutex<usize>,
}

impl FakeHelpDesk {
    pub fn new() -> Self {
        Self {
            requests: Mutex::new(HashMap::new()),
            next_id: Mutex::new(1),
        }
    }

    /// Seed a pending request with a known id, for feedback-loop tests.
    pub fn with_pending(question: &str) -> (Self, String) {
        let desk = Self::new();
        let id = "req_1".to_string();
        desk.requests.lock().unwrap().insert(
            id.clone(),
            HelpRequest {
                id: id.clone(),
                question: question.into(),
                caller_phone: "unknown".into(),
                caller_name: "Unknown Caller".into(),
                session_id: "s1".into(),
                context: String::new(),
                priority: "normal".into(),
                status: RequestStatus::Pending,
                notification_count: 0,
                answer: None,
            },
        );
        *desk.next_id.lock().unwrap() = 2;
        (desk, id)
    }
}

#[async_trait]
impl HelpRequestStore for FakeHelpDesk {
    async fn create(&self, fields: NewHelpRequest) -> Result<HelpRequest, HelpDeskError> {
        let mut next = self.next_id.lock().unwrap();
        let id = format!("req_{}", *next);
        *next += 1;

        let request = HelpRequest {
            id: id.clone(),
            question: fields.question,
            caller_phone: fields.caller_phone,
            caller_name: fields.caller_name,
            session_id: fields.session_id,
            context: fields.context,
            priority: fields.priority,
            status: RequestStatus::Pending,
            notification_count: 0,
            answer: None,
        };
        self.requests.lock().unwrap().insert(id, request.clone());
        Ok(request)
    }

    async fn get(&self, id: &str) -> Result<Option<HelpRequest>, HelpDeskError> {
        Ok(self.requests.lock().unwrap().get(id).cloned())
    }

    async fn resolve(&self, id: &str, answer: &str) -> Result<(), HelpDeskError> {
        let mut requests = self.requests.lock().unwrap();
        let request = requests
            .get_mut(id)
            .ok_or_else(|| HelpDeskError::NotFound { id: id.into() })?;
        request.status = RequestStatus::Resolved;
        request.answer = Some(answer.into());
        Ok(())
    }

    async fn increment_notifications(&self, id: &str) -> Result<(), HelpDeskError> {
        let mut requests = self.requests.lock().unwrap();
        let request = requests
            .get_mut(id)
            .ok_or_else(|| HelpDeskError::NotFound { id: id.into() })?;
        request.notification_count += 1;
        Ok(())
    }
}

/// A notifier that records every delivery instead of sending anything.
pub struct RecordingNotifier {
    /// Ids of requests a supervisor was notified about
    pub supervisor_notices: Mutex<Vec<String>>,
    /// (request id, answer) pairs for customer callbacks
    pub callbacks: Mutex<Vec<(String, String)>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self {
            supervisor_notices: Mutex::new(Vec::new()),
            callbacks: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl NotificationService for RecordingNotifier {
    async fn notify_supervisor(&self, request: &HelpRequest) -> Result<(), NotifyError> {
        self.supervisor_notices
            .lock()
            .unwrap()
            .push(request.id.clone());
        Ok(())
    }

    async fn callback_customer(
        &self,
        request: &HelpRequest,
        answer: &str,
    ) -> Result<(), NotifyError> {
        self.callbacks
            .lock()
            .unwrap()
            .push((request.id.clone(), answer.to_string()));
        Ok(())
    }
}
