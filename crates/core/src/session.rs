//! SessionStore trait — per-session conversation transcripts.
//!
//! A session maps an opaque id to an ordered transcript, oldest turn first.
//! Sessions are created on first append and live until cleared or evicted.
//! Eviction policy is an implementation concern; the contract is the same
//! get/append/clear/count regardless of policy.

use async_trait::async_trait;

use crate::error::SessionError;
use crate::message::{SessionId, Turn};

/// The session-transcript store contract.
///
/// Implementations: in-memory (with optional LRU / idle-TTL eviction).
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// The store name (e.g., "in_memory").
    fn name(&self) -> &str;

    /// The transcript for a session, oldest first. Empty if unseen.
    async fn get(&self, session_id: &SessionId)
        -> std::result::Result<Vec<Turn>, SessionError>;

    /// Append one turn to a session, creating it if needed.
    async fn append(&self, session_id: &SessionId, turn: Turn)
        -> std::result::Result<(), SessionError>;

    /// Remove a session's transcript. Returns whether it existed.
    async fn clear(&self, session_id: &SessionId)
        -> std::result::Result<bool, SessionError>;

    /// Number of tracked sessions.
    async fn count(&self) -> std::result::Result<usize, SessionError>;
}
