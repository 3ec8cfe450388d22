#[derive(Debug, thiserror::Error)]
pub enum MailboxError {
    #[error("mailbox.invalid_request: {0}")]
    InvalidRequest(String),
    #[error("mailbox.upstream_unavailable: {details}")]
    UpstreamUnavailable { details: String },
}
