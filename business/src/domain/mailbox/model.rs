/// Billing-cycle placeholder used when no structured extraction has run.
pub const UNKNOWN_BILLING_CYCLE: &str = "Unknown";

/// A subscription-like message mined from the user's mailbox.
///
/// Price and billing cycle are placeholders: without the model step no
/// structured extraction happens, so only the subject line carries signal.
/// Candidates live for one request and are never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct MailboxCandidate {
    pub message_id: String,
    pub name: String,
    pub price: f64,
    pub billing_cycle: String,
}

impl MailboxCandidate {
    /// Builds a candidate from a fetched message subject.
    pub fn from_subject(message_id: impl Into<String>, subject: Option<String>) -> Self {
        let name = subject
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| "(no subject)".to_string());

        Self {
            message_id: message_id.into(),
            name,
            price: 0.0,
            billing_cycle: UNKNOWN_BILLING_CYCLE.to_string(),
        }
    }
}
