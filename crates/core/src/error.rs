//! Error types for the Frontdesk domain.
//!
//! Uses `thiserror` for ergonomic error definitions.
//! Each collaborator boundary has its own error variant.

use thiserror::Error;

/// The top-level error type for all Frontdesk operations.
#[derive(Debug, Error)]
pub enum Error {
    // --- Language-model provider errors ---
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    // --- Knowledge-base errors ---
    #[error("Knowledge base error: {0}")]
    Knowledge(#[from] KnowledgeError),

    // --- Help-request store errors ---
    #[error("Help desk error: {0}")]
    HelpDesk(#[from] HelpDeskError),

    // --- Notification errors ---
    #[error("Notification error: {0}")]
    Notify(#[from] NotifyError),

    // --- Session store errors ---
    #[error("Session error: {0}")]
    Session(#[from] SessionError),

    // --- Startup errors ---
    #[error("Initialization failed: {message}")]
    Init { message: String },

    // --- Serialization ---
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    // --- Generic ---
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias using our Error.
pub type Result<T> = std::result::Result<T, Error>;

// --- Collaborator boundary errors ---

#[derive(Debug, Clone, Error)]
pub enum ProviderError {
    #[error("API request failed: {message} (status: {status_code})")]
    ApiError { status_code: u16, message: String },

    #[error("Rate limited by provider, retry after {retry_after_secs}s")]
    RateLimited { retry_after_secs: u64 },

    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("Network error: {0}")]
    Network(String),
}

#[derive(Debug, Error)]
pub enum KnowledgeError {
    #[error("Context fetch failed: {0}")]
    ContextUnavailable(String),

    #[error("Search failed: {0}")]
    SearchFailed(String),

    #[error("Entry write failed: {0}")]
    WriteFailed(String),
}

#[derive(Debug, Error)]
pub enum HelpDeskError {
    #[error("Help request not found: {id}")]
    NotFound { id: String },

    #[error("Storage error: {0}")]
    Storage(String),
}

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("Delivery failed to {channel}: {reason}")]
    DeliveryFailed { channel: String, reason: String },
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Storage error: {0}")]
    Storage(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_error_displays_correctly() {
        let err = Error::Provider(ProviderError::ApiError {
            status_code: 429,
            message: "Too many requests".into(),
        });
        assert!(err.to_string().contains("429"));
        assert!(err.to_string().contains("Too many requests"));
    }

    #[test]
    fn not_found_carries_request_id() {
        let err = Error::HelpDesk(HelpDeskError::NotFound { id: "req_42".into() });
        assert!(err.to_string().contains("req_42"));
    }

    #[test]
    fn init_error_displays_message() {
        let err = Error::Init { message: "context fetch failed".into() };
        assert!(err.to_string().contains("Initialization failed"));
        assert!(err.to_string().contains("context fetch failed"));
    }
}
