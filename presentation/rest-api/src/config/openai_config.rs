use std::env;

/// Configuration for OpenAI API access.
///
/// The key is read permissively: an absent OPENAI_API_KEY does not stop the
/// server, it surfaces on each request as a 500 misconfiguration fault
/// before any outbound call is attempted.
pub struct OpenAIConfig {
    pub api_key: String,
}

impl OpenAIConfig {
    pub fn from_env() -> Self {
        let api_key = env::var("OPENAI_API_KEY").unwrap_or_default();
        Self { api_key }
    }
}
