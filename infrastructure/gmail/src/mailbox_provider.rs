use async_trait::async_trait;

use business::domain::mailbox::errors::MailboxError;
use business::domain::mailbox::model::MailboxCandidate;
use business::domain::mailbox::services::MailboxService;
use business::domain::shared::value_objects::OauthToken;

use crate::client::{FetchedMessage, GmailClient};

/// Folds the fan-out result into candidates, dropping skipped indices
/// while keeping the original message order.
fn fold_candidates(fetched: Vec<Option<FetchedMessage>>) -> Vec<MailboxCandidate> {
    fetched
        .into_iter()
        .flatten()
        .map(|m| MailboxCandidate::from_subject(m.id, m.subject))
        .collect()
}

pub struct GmailMailboxService {
    client: GmailClient,
}

impl GmailMailboxService {
    pub fn new(client: GmailClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl MailboxService for GmailMailboxService {
    async fn search_candidates(
        &self,
        token: &OauthToken,
    ) -> Result<Vec<MailboxCandidate>, MailboxError> {
        let ids = self.client.search_message_ids(token).await?;
        let fetched = self.client.fetch_messages(token, &ids).await;
        Ok(fold_candidates(fetched))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fetched(id: &str, subject: &str) -> Option<FetchedMessage> {
        Some(FetchedMessage {
            id: id.to_string(),
            subject: Some(subject.to_string()),
        })
    }

    #[test]
    fn should_skip_failed_fetches_and_keep_message_order() {
        let fetched = vec![
            fetched("m1", "Netflix receipt"),
            None, // one of five metadata fetches failed
            fetched("m3", "Spotify invoice"),
            fetched("m4", "Gym subscription"),
            fetched("m5", "Cloud storage invoice"),
        ];

        let candidates = fold_candidates(fetched);

        assert_eq!(candidates.len(), 4);
        let ids: Vec<&str> = candidates.iter().map(|c| c.message_id.as_str()).collect();
        assert_eq!(ids, vec!["m1", "m3", "m4", "m5"]);
    }

    #[test]
    fn should_fold_missing_subject_into_placeholder_name() {
        let fetched = vec![Some(FetchedMessage {
            id: "m1".to_string(),
            subject: None,
        })];

        let candidates = fold_candidates(fetched);

        assert_eq!(candidates[0].name, "(no subject)");
        assert_eq!(candidates[0].price, 0.0);
        assert_eq!(candidates[0].billing_cycle, "Unknown");
    }

    #[test]
    fn should_produce_empty_batch_when_everything_was_skipped() {
        let candidates = fold_candidates(vec![None, None]);
        assert!(candidates.is_empty());
    }
}
