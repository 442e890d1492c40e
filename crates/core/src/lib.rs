//! # Frontdesk Core
//!
//! Domain types, traits, and error definitions for the Frontdesk AI
//! receptionist. This crate has **zero framework dependencies** — it defines
//! the domain model that all other crates implement against.
//!
//! ## Design Philosophy
//!
//! Every collaborator (knowledge base, help-request store, notification
//! service, language-model provider, session store) is defined as a trait
//! here. Implementations live in their respective crates. This enables:
//! - Swapping implementations via configuration
//! - Easy testing with scripted fakes
//! - Clean dependency graph (all crates depend inward on core)

pub mod error;
pub mod helpdesk;
pub mod knowledge;
pub mod message;
pub mod notify;
pub mod provider;
pub mod reply;
pub mod session;

// Re-export key types at crate root for ergonomics
pub use error::{Error, Result};
pub use helpdesk::{HelpRequest, HelpRequestStore, NewHelpRequest, RequestStatus};
pub use knowledge::{KnowledgeBase, KnowledgeEntry, KnowledgeMatch};
pub use message::{CallerInfo, Role, SessionId, Turn};
pub use notify::NotificationService;
pub use provider::{CompletionProvider, CompletionRequest};
pub use reply::{Reply, Resolution};
pub use session::SessionStore;
