use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::mailbox::errors::MailboxError;
use crate::domain::mailbox::model::MailboxCandidate;
use crate::domain::mailbox::services::MailboxService;
use crate::domain::mailbox::use_cases::import::{ImportMailboxParams, ImportMailboxUseCase};

pub struct ImportMailboxUseCaseImpl {
    pub mailbox: Arc<dyn MailboxService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ImportMailboxUseCase for ImportMailboxUseCaseImpl {
    async fn execute(
        &self,
        params: ImportMailboxParams,
    ) -> Result<Vec<MailboxCandidate>, MailboxError> {
        if params.oauth_token.is_empty() {
            return Err(MailboxError::InvalidRequest(
                "mailbox.oauth_token_empty".to_string(),
            ));
        }

        self.logger.info("Searching mailbox for subscription-like messages");

        let candidates = self.mailbox.search_candidates(&params.oauth_token).await?;

        self.logger
            .info(&format!("Found {} mailbox candidates", candidates.len()));

        Ok(candidates)
    }
}
