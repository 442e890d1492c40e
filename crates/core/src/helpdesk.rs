//! HelpRequestStore trait — durable records of escalations.
//!
//! A help request is created when the pipeline escalates, notified to a
//! supervisor, and later resolved with a human answer. The store owns
//! persistence and id generation; the core creates and reads by id.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::HelpDeskError;

/// Lifecycle state of a help request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    Pending,
    Resolved,
}

/// The durable record representing one escalation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HelpRequest {
    /// Store-generated id
    pub id: String,

    /// The caller's original question
    pub question: String,

    /// Number to call back ("unknown" when the caller withheld it)
    pub caller_phone: String,

    /// Caller display name ("Unknown Caller" when absent)
    pub caller_name: String,

    /// The session the question arrived on
    pub session_id: String,

    /// Formatted transcript excerpt for the supervisor
    pub context: String,

    /// Priority label (currently always "normal")
    pub priority: String,

    pub status: RequestStatus,

    /// How many times a supervisor has been notified about this request
    #[serde(default)]
    pub notification_count: u32,

    /// The supervisor's answer, present once resolved
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
}

/// Creation fields for a help request; the store assigns id and status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewHelpRequest {
    pub question: String,
    pub caller_phone: String,
    pub caller_name: String,
    pub session_id: String,
    pub context: String,
    pub priority: String,
}

/// The help-request persistence collaborator contract.
#[async_trait]
pub trait HelpRequestStore: Send + Sync {
    /// Persist a new pending request and return it with a generated id.
    async fn create(&self, fields: NewHelpRequest)
        -> std::result::Result<HelpRequest, HelpDeskError>;

    /// Fetch a request by id.
    async fn get(&self, id: &str)
        -> std::result::Result<Option<HelpRequest>, HelpDeskError>;

    /// Mark a request resolved with the supervisor's answer.
    async fn resolve(&self, id: &str, answer: &str)
        -> std::result::Result<(), HelpDeskError>;

    /// Bump the supervisor-notification counter.
    async fn increment_notifications(&self, id: &str)
        -> std::result::Result<(), HelpDeskError>;
}
