use async_trait::async_trait;

use crate::domain::suggestion::errors::SuggestionError;
use crate::domain::suggestion::model::Suggestion;

pub struct ExtractSuggestionsParams {
    pub user_id: String,
    pub email_snippets: Vec<String>,
}

#[async_trait]
pub trait ExtractSuggestionsUseCase: Send + Sync {
    async fn execute(
        &self,
        params: ExtractSuggestionsParams,
    ) -> Result<Vec<Suggestion>, SuggestionError>;
}
