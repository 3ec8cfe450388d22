use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::UserId;

/// Read port over the user's existing subscription rows.
#[async_trait]
pub trait SubscriptionRepository: Send + Sync {
    /// Returns the service names the user already subscribes to.
    /// An empty result is valid, not an error.
    async fn get_names(&self, user_id: &UserId) -> Result<Vec<String>, RepositoryError>;
}
