use async_trait::async_trait;

use business::domain::suggestion::errors::SuggestionError;
use business::domain::suggestion::model::Suggestion;
use business::domain::suggestion::services::SnippetExtractorService;

use crate::client::{ChatMode, OpenAIClient};
use crate::interpreter::{ValidationMode, interpret};
use crate::prompt::{EXTRACTION_SYSTEM_PROMPT, ResponseShape, build_extraction_prompt};

/// Extraction wants determinism over variety.
const EXTRACTION_TEMPERATURE: f32 = 0.3;

pub struct SnippetExtractorOpenAI {
    client: OpenAIClient,
    mode: ValidationMode,
}

impl SnippetExtractorOpenAI {
    pub fn new(client: OpenAIClient, mode: ValidationMode) -> Self {
        Self { client, mode }
    }
}

#[async_trait]
impl SnippetExtractorService for SnippetExtractorOpenAI {
    async fn extract(&self, snippets: &[String]) -> Result<Vec<Suggestion>, SuggestionError> {
        // Structured JSON mode only emits objects, so extraction always
        // prompts for the wrapped shape regardless of deployment config.
        let prompt = build_extraction_prompt(snippets, ResponseShape::Wrapped);

        let content = self
            .client
            .chat_completion(
                EXTRACTION_SYSTEM_PROMPT,
                &prompt,
                EXTRACTION_TEMPERATURE,
                ChatMode::StructuredJson,
            )
            .await?;

        let interpreted = interpret(&content, self.mode)?;
        if interpreted.dropped > 0 {
            tracing::warn!(
                dropped = interpreted.dropped,
                "dropped invalid extractions from model output"
            );
        }

        Ok(interpreted.suggestions)
    }
}
