use async_trait::async_trait;

use crate::domain::shared::value_objects::OauthToken;

use super::errors::MailboxError;
use super::model::MailboxCandidate;

/// Service port for mining subscription-like messages from the user's mailbox.
///
/// Implementations must preserve the provider's message order and degrade a
/// single failed metadata fetch to a skipped candidate instead of failing
/// the whole batch.
#[async_trait]
pub trait MailboxService: Send + Sync {
    async fn search_candidates(
        &self,
        token: &OauthToken,
    ) -> Result<Vec<MailboxCandidate>, MailboxError>;
}
