use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::UserId;

use super::model::Suggestion;

/// Persistence port for validated suggestions.
///
/// Writes are independent per-row inserts; there is no batch transaction.
/// A failure partway through a batch leaves earlier rows in place.
#[async_trait]
pub trait SuggestionRepository: Send + Sync {
    async fn save(&self, suggestion: &Suggestion, user_id: &UserId) -> Result<(), RepositoryError>;
}
