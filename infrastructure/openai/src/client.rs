use reqwest::Client;
use serde_json::json;

use business::domain::suggestion::errors::SuggestionError;

/// Requested output mode for a completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatMode {
    /// Plain text completion; the prompt alone constrains the output format.
    Freeform,
    /// Provider-enforced JSON object output.
    StructuredJson,
}

/// Shared OpenAI HTTP client configuration.
///
/// Issues exactly one completion call per invocation, with no implicit
/// retry: a retried generation call doubles cost and can duplicate
/// persisted rows, so retry policy stays with the caller.
pub struct OpenAIClient {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl OpenAIClient {
    pub fn new(api_key: String) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .unwrap_or_default();

        Self {
            client,
            api_key,
            base_url: "https://api.openai.com/v1".to_string(),
            model: "gpt-4o-mini".to_string(),
        }
    }

    /// Overrides the API base URL. Used to point tests at a local double.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Verifies an API key is present, without any network I/O.
    pub fn ensure_configured(&self) -> Result<(), SuggestionError> {
        if self.api_key.trim().is_empty() {
            return Err(SuggestionError::MissingConfiguration("OPENAI_API_KEY"));
        }
        Ok(())
    }

    /// Builds the authorization header value.
    fn auth_header(&self) -> String {
        format!("Bearer {}", self.api_key)
    }

    /// Returns the chat completions endpoint URL.
    fn chat_completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }

    /// Sends one chat completion request and returns the raw text of the
    /// first choice. The configuration check runs before any network I/O.
    pub async fn chat_completion(
        &self,
        system: &str,
        user: &str,
        temperature: f32,
        mode: ChatMode,
    ) -> Result<String, SuggestionError> {
        self.ensure_configured()?;

        let mut body = json!({
            "model": self.model,
            "messages": [
                {"role": "system", "content": system},
                {"role": "user", "content": user},
            ],
            "temperature": temperature,
            "max_tokens": 2000,
        });
        if mode == ChatMode::StructuredJson {
            body["response_format"] = json!({"type": "json_object"});
        }

        let response = self
            .client
            .post(self.chat_completions_url())
            .header("Content-Type", "application/json")
            .header("Authorization", self.auth_header())
            .json(&body)
            .send()
            .await
            .map_err(|e| SuggestionError::UpstreamUnavailable {
                details: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            let details = response.text().await.unwrap_or_default();
            return Err(SuggestionError::UpstreamUnavailable {
                details: format!("{}: {}", status, details),
            });
        }

        let data: serde_json::Value =
            response
                .json()
                .await
                .map_err(|e| SuggestionError::UpstreamUnavailable {
                    details: e.to_string(),
                })?;

        let content = data["choices"]
            .as_array()
            .and_then(|choices| choices.first())
            .and_then(|choice| choice["message"]["content"].as_str())
            .ok_or_else(|| SuggestionError::UpstreamUnavailable {
                details: "completion contained no message content".to_string(),
            })?;

        Ok(content.trim().to_string())
    }
}
