use chrono::{DateTime, Utc};
use uuid::Uuid;

use business::domain::shared::value_objects::UserId;
use business::domain::suggestion::model::Suggestion;

/// Row shape of the `suggestions` table.
#[derive(Debug)]
pub struct SuggestionEntity {
    pub id: Uuid,
    pub user_id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub billing_cycle: String,
    pub created_at: DateTime<Utc>,
}

impl SuggestionEntity {
    /// Stamps a validated suggestion with the requesting user and the
    /// normalized billing cycle text.
    pub fn from_domain(suggestion: &Suggestion, user_id: &UserId) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id: user_id.as_str().to_string(),
            name: suggestion.name.clone(),
            description: suggestion.description.clone(),
            price: suggestion.price,
            billing_cycle: suggestion.billing_cycle.to_string(),
            created_at: Utc::now(),
        }
    }
}
