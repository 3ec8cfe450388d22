use futures::future::join_all;
use reqwest::Client;
use serde::Deserialize;

use business::domain::mailbox::errors::MailboxError;
use business::domain::shared::value_objects::OauthToken;

/// Upper bound on mined messages per request.
pub const MAX_MESSAGES: usize = 5;

/// Keyword filter for subscription-like messages.
pub const SEARCH_QUERY: &str = "subscription OR receipt OR invoice";

#[derive(Debug, Deserialize)]
struct MessageListResponse {
    #[serde(default)]
    messages: Vec<MessageRef>,
}

#[derive(Debug, Deserialize)]
struct MessageRef {
    id: String,
}

#[derive(Debug, Deserialize)]
struct MessageMetadata {
    id: String,
    payload: Option<MessagePayload>,
}

#[derive(Debug, Deserialize)]
struct MessagePayload {
    #[serde(default)]
    headers: Vec<MessageHeader>,
}

#[derive(Debug, Deserialize)]
struct MessageHeader {
    name: String,
    value: String,
}

/// A successfully fetched message. Skipped fetches are represented as
/// `None` at the same index in the fan-out result.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchedMessage {
    pub id: String,
    pub subject: Option<String>,
}

fn subject_of(metadata: &MessageMetadata) -> Option<String> {
    metadata.payload.as_ref().and_then(|payload| {
        payload
            .headers
            .iter()
            .find(|h| h.name.eq_ignore_ascii_case("Subject"))
            .map(|h| h.value.clone())
    })
}

/// Gmail HTTP client authenticated per call with the caller's bearer token.
pub struct GmailClient {
    client: Client,
    base_url: String,
}

impl GmailClient {
    pub fn new() -> Self {
        Self::with_base_url("https://gmail.googleapis.com/gmail/v1")
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(15))
            .build()
            .unwrap_or_default();

        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Lists ids of subscription-like messages, bounded at `MAX_MESSAGES`.
    /// A non-success status fails the whole variant; the provider's body is
    /// captured for diagnostics.
    pub async fn search_message_ids(
        &self,
        token: &OauthToken,
    ) -> Result<Vec<String>, MailboxError> {
        let url = format!("{}/users/me/messages", self.base_url);
        let max_results = MAX_MESSAGES.to_string();

        let response = self
            .client
            .get(&url)
            .query(&[("q", SEARCH_QUERY), ("maxResults", max_results.as_str())])
            .bearer_auth(token.as_str())
            .send()
            .await
            .map_err(|e| MailboxError::UpstreamUnavailable {
                details: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            let details = response.text().await.unwrap_or_default();
            return Err(MailboxError::UpstreamUnavailable {
                details: format!("{}: {}", status, details),
            });
        }

        let list: MessageListResponse =
            response
                .json()
                .await
                .map_err(|e| MailboxError::UpstreamUnavailable {
                    details: e.to_string(),
                })?;

        Ok(list.messages.into_iter().map(|m| m.id).collect())
    }

    /// Fetches Subject metadata for each id concurrently and awaits the
    /// whole fan-out. The result keeps the input order; a failed fetch
    /// degrades its own index to `None` without failing the batch.
    pub async fn fetch_messages(
        &self,
        token: &OauthToken,
        ids: &[String],
    ) -> Vec<Option<FetchedMessage>> {
        let fetches = ids.iter().map(|id| self.fetch_metadata(token, id));
        join_all(fetches).await
    }

    async fn fetch_metadata(&self, token: &OauthToken, id: &str) -> Option<FetchedMessage> {
        let url = format!("{}/users/me/messages/{}", self.base_url, id);

        let response = self
            .client
            .get(&url)
            .query(&[("format", "metadata"), ("metadataHeaders", "Subject")])
            .bearer_auth(token.as_str())
            .send()
            .await
            .ok()?;

        if !response.status().is_success() {
            tracing::warn!(message_id = id, "metadata fetch skipped");
            return None;
        }

        let metadata: MessageMetadata = response.json().await.ok()?;
        let subject = subject_of(&metadata);

        Some(FetchedMessage {
            id: metadata.id,
            subject,
        })
    }
}

impl Default for GmailClient {
    fn default() -> Self {
        Self::new()
    }
}
