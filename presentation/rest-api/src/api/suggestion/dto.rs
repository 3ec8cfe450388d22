use poem_openapi::{Enum, Object};
use serde::{Deserialize, Serialize};

use business::domain::suggestion::model::{BillingCycle, Suggestion};

#[derive(Debug, Clone, Serialize, Deserialize, Enum)]
pub enum BillingCycleDto {
    #[oai(rename = "Monthly")]
    Monthly,
    #[oai(rename = "Yearly")]
    Yearly,
}

impl From<BillingCycle> for BillingCycleDto {
    fn from(cycle: BillingCycle) -> Self {
        match cycle {
            BillingCycle::Monthly => BillingCycleDto::Monthly,
            BillingCycle::Yearly => BillingCycleDto::Yearly,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct GenerateSuggestionsRequest {
    /// Requesting user identifier (cannot be empty)
    pub user_id: String,
    /// Service names the user already subscribes to
    #[oai(skip_serializing_if_is_none)]
    pub subscriptions: Option<Vec<String>>,
    /// Free-text interest tags (cannot be empty)
    pub interests: Vec<String>,
    /// Monthly budget in USD (cannot be negative)
    pub budget: f64,
    /// User's country
    pub country: String,
}

#[derive(Debug, Clone, Object)]
pub struct ExtractSuggestionsRequest {
    /// Requesting user identifier (cannot be empty)
    pub user_id: String,
    /// Raw email snippets to mine for subscription details (cannot be empty)
    pub email_snippets: Vec<String>,
}

#[derive(Debug, Clone, Object)]
pub struct SuggestionDto {
    /// Service name
    pub name: String,
    /// One-line explanation of the recommendation
    pub description: String,
    /// Price in USD
    pub price: f64,
    /// Billing cycle, normalized to title case
    pub billing_cycle: BillingCycleDto,
}

impl From<Suggestion> for SuggestionDto {
    fn from(s: Suggestion) -> Self {
        Self {
            name: s.name,
            description: s.description,
            price: s.price,
            billing_cycle: s.billing_cycle.into(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct SuggestionsResponse {
    pub suggestions: Vec<SuggestionDto>,
}

impl SuggestionsResponse {
    pub fn from_domain(suggestions: Vec<Suggestion>) -> Self {
        Self {
            suggestions: suggestions.into_iter().map(|s| s.into()).collect(),
        }
    }
}
