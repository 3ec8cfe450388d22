use async_trait::async_trait;

use crate::domain::mailbox::errors::MailboxError;
use crate::domain::mailbox::model::MailboxCandidate;
use crate::domain::shared::value_objects::OauthToken;

pub struct ImportMailboxParams {
    pub oauth_token: OauthToken,
}

#[async_trait]
pub trait ImportMailboxUseCase: Send + Sync {
    async fn execute(
        &self,
        params: ImportMailboxParams,
    ) -> Result<Vec<MailboxCandidate>, MailboxError>;
}
