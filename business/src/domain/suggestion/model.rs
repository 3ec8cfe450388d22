use serde::{Deserialize, Serialize};

use crate::domain::shared::value_objects::UserId;

use super::errors::SuggestionError;

/// Contracted number of recommendations per generation request.
pub const RECOMMENDATION_COUNT: usize = 3;

/// Billing cycle of a suggested subscription.
/// Parsing is case-insensitive; rendering is title case, so normalizing
/// an already normalized value is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BillingCycle {
    Monthly,
    Yearly,
}

impl std::fmt::Display for BillingCycle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BillingCycle::Monthly => write!(f, "Monthly"),
            BillingCycle::Yearly => write!(f, "Yearly"),
        }
    }
}

impl std::str::FromStr for BillingCycle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "monthly" => Ok(BillingCycle::Monthly),
            "yearly" => Ok(BillingCycle::Yearly),
            _ => Err(format!("invalid billing cycle: {}", s)),
        }
    }
}

/// A validated subscription recommendation. Prices are implicit USD.
#[derive(Debug, Clone, PartialEq)]
pub struct Suggestion {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub billing_cycle: BillingCycle,
}

/// Creates a new Suggestion with validation. A candidate failing any field
/// constraint never becomes a Suggestion value.
pub fn create_suggestion(
    name: String,
    description: String,
    price: f64,
    billing_cycle: BillingCycle,
) -> Result<Suggestion, SuggestionError> {
    let name = name.trim().to_string();
    if name.is_empty() {
        return Err(SuggestionError::InvalidRequest(
            "suggestion.name_empty".to_string(),
        ));
    }

    let description = description.trim().to_string();
    if description.is_empty() {
        return Err(SuggestionError::InvalidRequest(
            "suggestion.description_empty".to_string(),
        ));
    }

    if !price.is_finite() || price < 0.0 {
        return Err(SuggestionError::InvalidRequest(
            "suggestion.price_negative".to_string(),
        ));
    }

    Ok(Suggestion {
        name,
        description,
        price,
        billing_cycle,
    })
}

/// Validated context for the interest-based generation variant.
#[derive(Debug, Clone)]
pub struct SuggestionProfile {
    pub user_id: UserId,
    pub current_subscriptions: Vec<String>,
    pub interests: Vec<String>,
    pub monthly_budget: f64,
    pub country: String,
}

impl SuggestionProfile {
    pub fn new(
        user_id: impl Into<String>,
        current_subscriptions: Vec<String>,
        interests: Vec<String>,
        monthly_budget: f64,
        country: impl Into<String>,
    ) -> Result<Self, SuggestionError> {
        let user_id: String = user_id.into();
        if user_id.trim().is_empty() {
            return Err(SuggestionError::InvalidRequest(
                "suggestion.user_id_empty".to_string(),
            ));
        }

        let interests: Vec<String> = interests
            .into_iter()
            .map(|i| i.trim().to_string())
            .filter(|i| !i.is_empty())
            .collect();
        if interests.is_empty() {
            return Err(SuggestionError::InvalidRequest(
                "suggestion.interests_empty".to_string(),
            ));
        }

        if !monthly_budget.is_finite() || monthly_budget < 0.0 {
            return Err(SuggestionError::InvalidRequest(
                "suggestion.budget_negative".to_string(),
            ));
        }

        let country: String = country.into();
        let country = country.trim().to_string();
        if country.is_empty() {
            return Err(SuggestionError::InvalidRequest(
                "suggestion.country_empty".to_string(),
            ));
        }

        Ok(Self {
            user_id: UserId::new(user_id),
            current_subscriptions,
            interests,
            monthly_budget,
            country,
        })
    }
}
