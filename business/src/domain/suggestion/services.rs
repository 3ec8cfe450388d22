use async_trait::async_trait;

use super::errors::SuggestionError;
use super::model::{Suggestion, SuggestionProfile};

/// Service port for generating subscription recommendations.
///
/// `current_subscriptions` is the merged view of what the user already pays
/// for (request-supplied names plus stored rows); the profile carries the
/// rest of the generation context.
#[async_trait]
pub trait SuggestionGeneratorService: Send + Sync {
    /// Verifies the provider is usable without performing any I/O.
    /// A misconfigured deployment must fail here, before the pipeline
    /// touches the store or the network.
    fn check_configuration(&self) -> Result<(), SuggestionError>;

    async fn generate(
        &self,
        profile: &SuggestionProfile,
        current_subscriptions: &[String],
    ) -> Result<Vec<Suggestion>, SuggestionError>;
}

/// Service port for extracting subscription details from email snippets.
#[async_trait]
pub trait SnippetExtractorService: Send + Sync {
    async fn extract(&self, snippets: &[String]) -> Result<Vec<Suggestion>, SuggestionError>;
}
