//! Turn and session identity domain types.
//!
//! These are the core value objects that flow through the pipeline:
//! a caller sends a message → the orchestrator decides how to answer →
//! the transcript records what was said.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a caller session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub String);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The author of a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// System instructions (business context, rules). Never stored in a
    /// transcript — only prepended to generation requests.
    System,
    /// The human caller
    User,
    /// The AI assistant
    Assistant,
}

/// A single turn in a conversation. Immutable once appended to a transcript.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Turn {
    /// Unique turn ID
    pub id: String,

    /// Who authored this turn
    pub role: Role,

    /// The text content
    pub content: String,

    /// Timestamp
    pub timestamp: DateTime<Utc>,
}

impl Turn {
    /// Create a new system-instruction turn.
    pub fn system(content: impl Into<String>) -> Self {
        Self::of(Role::System, content)
    }

    /// Create a new caller turn.
    pub fn user(content: impl Into<String>) -> Self {
        Self::of(Role::User, content)
    }

    /// Create a new assistant turn.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::of(Role::Assistant, content)
    }

    fn of(role: Role, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            role,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Optional identity of the caller, attached to an inbound message.
///
/// Missing fields fall back to placeholder values when a help request is
/// created, so a supervisor always sees something to call back.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CallerInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl CallerInfo {
    /// The phone number to call back, or the placeholder.
    pub fn phone_or_unknown(&self) -> &str {
        self.phone.as_deref().unwrap_or("unknown")
    }

    /// The caller's name, or the placeholder.
    pub fn name_or_unknown(&self) -> &str {
        self.name.as_deref().unwrap_or("Unknown Caller")
    }
}
