//! Session transcript storage for Frontdesk.
//!
//! Implements the `SessionStore` contract from `frontdesk-core`. The only
//! backend today is in-memory; the eviction policy is pluggable so a
//! deployment can cap memory without changing the store contract.

mod in_memory;

pub use in_memory::{EvictionPolicy, InMemorySessionStore};
