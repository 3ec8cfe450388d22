use poem_openapi::Object;

use business::domain::mailbox::model::MailboxCandidate;

#[derive(Debug, Clone, Object)]
pub struct ImportMailboxRequest {
    /// Bearer token for the user's mailbox provider (cannot be empty).
    /// Consumed for the provider calls only; never logged or persisted.
    pub oauth_token: String,
}

#[derive(Debug, Clone, Object)]
pub struct MailboxCandidateDto {
    /// Provider message identifier
    pub message_id: String,
    /// Subject-derived service name
    pub name: String,
    /// Placeholder price; no structured extraction happens here
    pub price: f64,
    /// Placeholder billing cycle ("Unknown")
    pub billing_cycle: String,
}

impl From<MailboxCandidate> for MailboxCandidateDto {
    fn from(c: MailboxCandidate) -> Self {
        Self {
            message_id: c.message_id,
            name: c.name,
            price: c.price,
            billing_cycle: c.billing_cycle,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct MailboxImportResponse {
    pub suggestions: Vec<MailboxCandidateDto>,
}

impl MailboxImportResponse {
    pub fn from_domain(candidates: Vec<MailboxCandidate>) -> Self {
        Self {
            suggestions: candidates.into_iter().map(|c| c.into()).collect(),
        }
    }
}
