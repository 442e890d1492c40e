//! In-memory session store — transcripts live for the process lifetime
//! unless cleared or reclaimed by the configured eviction policy.

use std::collections::HashMap;

use async_trait::async_trait;
use frontdesk_core::error::SessionError;
use frontdesk_core::message::{SessionId, Turn};
use frontdesk_core::session::SessionStore;
use tokio::sync::RwLock;
use tokio::time::{Duration, Instant};
use tracing::debug;

/// When a session may be reclaimed. The default reclaims nothing, matching
/// the accumulate-until-cleared contract; deployments that need a memory
/// bound opt in to one or both knobs.
#[derive(Debug, Clone, Copy, Default)]
pub struct EvictionPolicy {
    /// Cap on tracked sessions; beyond it the least-recently-touched
    /// session is reclaimed first. `None` = unbounded.
    pub max_sessions: Option<usize>,

    /// Idle time after which a session may be reclaimed. `None` = never.
    pub idle_ttl: Option<Duration>,
}

impl EvictionPolicy {
    /// No eviction at all.
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Keep at most `n` sessions, reclaiming least-recently-used.
    pub fn max_sessions(n: usize) -> Self {
        Self {
            max_sessions: Some(n),
            idle_ttl: None,
        }
    }

    /// Reclaim sessions idle longer than `ttl`.
    pub fn idle_ttl(ttl: Duration) -> Self {
        Self {
            max_sessions: None,
            idle_ttl: Some(ttl),
        }
    }
}

struct Slot {
    turns: Vec<Turn>,
    last_touched: Instant,
}

/// An in-memory session store guarded by a single `RwLock`.
///
/// Point mutations are atomic, but two concurrent pipeline invocations for
/// the same session can still interleave their read-then-append sequences;
/// the store does not attempt cross-call transactional isolation.
pub struct InMemorySessionStore {
    sessions: RwLock<HashMap<SessionId, Slot>>,
    policy: EvictionPolicy,
}

impl InMemorySessionStore {
    pub fn new(policy: EvictionPolicy) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            policy,
        }
    }

    /// Drop expired sessions, then enforce the session cap (LRU order).
    /// Caller holds the write lock.
    fn reclaim(&self, sessions: &mut HashMap<SessionId, Slot>) {
        if let Some(ttl) = self.policy.idle_ttl {
            let now = Instant::now();
            let before = sessions.len();
            sessions.retain(|_, slot| now.duration_since(slot.last_touched) < ttl);
            if sessions.len() < before {
                debug!(evicted = before - sessions.len(), "Reclaimed idle sessions");
            }
        }

        if let Some(max) = self.policy.max_sessions {
            while sessions.len() > max {
                let oldest = sessions
                    .iter()
                    .min_by_key(|(_, slot)| slot.last_touched)
                    .map(|(id, _)| id.clone());
                match oldest {
                    Some(id) => {
                        sessions.remove(&id);
                        debug!(session = %id, "Reclaimed least-recently-used session");
                    }
                    None => break,
                }
            }
        }
    }
}

impl Default for InMemorySessionStore {
    fn default() -> Self {
        Self::new(EvictionPolicy::unbounded())
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    fn name(&self) -> &str {
        "in_memory"
    }

    async fn get(&self, session_id: &SessionId) -> Result<Vec<Turn>, SessionError> {
        let mut sessions = self.sessions.write().await;
        self.reclaim(&mut sessions);
        match sessions.get_mut(session_id) {
            Some(slot) => {
                slot.last_touched = Instant::now();
                Ok(slot.turns.clone())
            }
            None => Ok(Vec::new()),
        }
    }

    async fn append(&self, session_id: &SessionId, turn: Turn) -> Result<(), SessionError> {
        let mut sessions = self.sessions.write().await;
        let slot = sessions.entry(session_id.clone()).or_insert_with(|| Slot {
            turns: Vec::new(),
            last_touched: Instant::now(),
        });
        slot.turns.push(turn);
        slot.last_touched = Instant::now();
        self.reclaim(&mut sessions);
        Ok(())
    }

    async fn clear(&self, session_id: &SessionId) -> Result<bool, SessionError> {
        let mut sessions = self.sessions.write().await;
        Ok(sessions.remove(session_id).is_some())
    }

    async fn count(&self) -> Result<usize, SessionError> {
        let mut sessions = self.sessions.write().await;
        self.reclaim(&mut sessions);
        Ok(sessions.len())
    }
}
