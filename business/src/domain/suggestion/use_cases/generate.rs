use async_trait::async_trait;

use crate::domain::suggestion::errors::SuggestionError;
use crate::domain::suggestion::model::Suggestion;

/// Raw inputs of the interest-based generation variant, as received from
/// the HTTP layer. Field-shape validation happens inside the use case.
pub struct GenerateSuggestionsParams {
    pub user_id: String,
    pub subscriptions: Vec<String>,
    pub interests: Vec<String>,
    pub budget: f64,
    pub country: String,
}

#[async_trait]
pub trait GenerateSuggestionsUseCase: Send + Sync {
    async fn execute(
        &self,
        params: GenerateSuggestionsParams,
    ) -> Result<Vec<Suggestion>, SuggestionError>;
}
