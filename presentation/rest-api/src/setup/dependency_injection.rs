use std::sync::Arc;

use logger::TracingLogger;
use persistence::subscription::repository::SubscriptionRepositoryPostgres;
use persistence::suggestion::repository::SuggestionRepositoryPostgres;

use gmail::client::GmailClient;
use gmail::mailbox_provider::GmailMailboxService;
use openai::client::OpenAIClient;
use openai::snippet_extractor::SnippetExtractorOpenAI;
use openai::suggestion_generator::SuggestionGeneratorOpenAI;

use business::application::mailbox::import::ImportMailboxUseCaseImpl;
use business::application::suggestion::extract::ExtractSuggestionsUseCaseImpl;
use business::application::suggestion::generate::GenerateSuggestionsUseCaseImpl;

use crate::config::gmail_config::GmailConfig;
use crate::config::openai_config::OpenAIConfig;
use crate::config::suggestion_config::SuggestionConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub suggestion_api: crate::api::suggestion::routes::SuggestionApi,
    pub mailbox_api: crate::api::mailbox::routes::MailboxApi,
}

impl DependencyContainer {
    pub fn new(pool: sqlx::PgPool) -> Self {
        let logger = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new();

        // Infrastructure adapters
        let subscription_repository = Arc::new(SubscriptionRepositoryPostgres::new(pool.clone()));
        let suggestion_repository = Arc::new(SuggestionRepositoryPostgres::new(pool));

        let openai_config = OpenAIConfig::from_env();
        let suggestion_config = SuggestionConfig::from_env();
        let gmail_config = GmailConfig::from_env();

        let generator = Arc::new(SuggestionGeneratorOpenAI::new(
            OpenAIClient::new(openai_config.api_key.clone()),
            suggestion_config.response_shape,
            suggestion_config.validation_mode,
        ));
        let extractor = Arc::new(SnippetExtractorOpenAI::new(
            OpenAIClient::new(openai_config.api_key),
            suggestion_config.validation_mode,
        ));
        let mailbox_service = Arc::new(GmailMailboxService::new(match gmail_config.base_url {
            Some(base_url) => GmailClient::with_base_url(base_url),
            None => GmailClient::new(),
        }));

        // Use cases
        let generate_use_case = Arc::new(GenerateSuggestionsUseCaseImpl {
            subscription_repository,
            suggestion_repository,
            generator,
            logger: logger.clone(),
            persist: suggestion_config.persist,
        });
        let extract_use_case = Arc::new(ExtractSuggestionsUseCaseImpl {
            extractor,
            logger: logger.clone(),
        });
        let import_use_case = Arc::new(ImportMailboxUseCaseImpl {
            mailbox: mailbox_service,
            logger,
        });

        let suggestion_api =
            crate::api::suggestion::routes::SuggestionApi::new(generate_use_case, extract_use_case);
        let mailbox_api = crate::api::mailbox::routes::MailboxApi::new(import_use_case);

        Self {
            health_api,
            suggestion_api,
            mailbox_api,
        }
    }
}
