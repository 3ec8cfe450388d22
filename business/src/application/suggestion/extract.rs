use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::suggestion::errors::SuggestionError;
use crate::domain::suggestion::model::Suggestion;
use crate::domain::suggestion::services::SnippetExtractorService;
use crate::domain::suggestion::use_cases::extract::{
    ExtractSuggestionsParams, ExtractSuggestionsUseCase,
};

pub struct ExtractSuggestionsUseCaseImpl {
    pub extractor: Arc<dyn SnippetExtractorService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ExtractSuggestionsUseCase for ExtractSuggestionsUseCaseImpl {
    async fn execute(
        &self,
        params: ExtractSuggestionsParams,
    ) -> Result<Vec<Suggestion>, SuggestionError> {
        if params.user_id.trim().is_empty() {
            return Err(SuggestionError::InvalidRequest(
                "suggestion.user_id_empty".to_string(),
            ));
        }

        let snippets: Vec<String> = params
            .email_snippets
            .into_iter()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        if snippets.is_empty() {
            return Err(SuggestionError::InvalidRequest(
                "suggestion.email_snippets_empty".to_string(),
            ));
        }

        self.logger
            .info(&format!("Extracting from {} email snippets", snippets.len()));

        let suggestions = self.extractor.extract(&snippets).await?;

        self.logger
            .info(&format!("Extracted {} suggestions", suggestions.len()));

        Ok(suggestions)
    }
}
