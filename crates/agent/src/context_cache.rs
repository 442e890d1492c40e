//! Process-wide business-context cache.
//!
//! Single-writer refresh, many-reader access. A refresh swaps the whole
//! string as one `Arc`, so a message processed mid-refresh observes either
//! the old or the new context in full — never a torn read.

use std::sync::Arc;

use tokio::sync::RwLock;

/// Atomically-swappable shared business-context string.
pub struct ContextCache {
    inner: RwLock<Arc<str>>,
}

impl ContextCache {
    /// An empty cache. `initialize` fills it before the first message.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Arc::from("")),
        }
    }

    /// The current context. Cheap: clones the `Arc`, not the string.
    pub async fn load(&self) -> Arc<str> {
        self.inner.read().await.clone()
    }

    /// Replace the context wholesale.
    pub async fn swap(&self, context: String) {
        *self.inner.write().await = Arc::from(context.as_str());
    }
}

impl Default for ContextCache {
    fn default() -> Self {
        Self::new()
    }
}
