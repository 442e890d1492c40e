//! NotificationService trait — outbound human contact.
//!
//! Delivery mechanics (SMS, call, email) and guarantees are owned by the
//! implementation; the core only requests delivery and propagates failures.

use async_trait::async_trait;

use crate::error::NotifyError;
use crate::helpdesk::HelpRequest;

/// The notification collaborator contract.
#[async_trait]
pub trait NotificationService: Send + Sync {
    /// Tell a supervisor a new help request is waiting.
    async fn notify_supervisor(&self, request: &HelpRequest)
        -> std::result::Result<(), NotifyError>;

    /// Call the customer back with the supervisor's answer.
    async fn callback_customer(&self, request: &HelpRequest, answer: &str)
        -> std::result::Result<(), NotifyError>;
}
