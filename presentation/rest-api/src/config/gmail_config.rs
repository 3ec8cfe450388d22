use std::env;

/// Configuration for the mailbox provider.
///
/// Environment variables:
/// - GMAIL_API_BASE_URL: API base override, mainly for test doubles
///   (default: the public Gmail API)
pub struct GmailConfig {
    pub base_url: Option<String>,
}

impl GmailConfig {
    pub fn from_env() -> Self {
        Self {
            base_url: env::var("GMAIL_API_BASE_URL").ok(),
        }
    }
}
