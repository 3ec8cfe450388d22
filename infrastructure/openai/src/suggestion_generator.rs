use async_trait::async_trait;

use business::domain::suggestion::errors::SuggestionError;
use business::domain::suggestion::model::{Suggestion, SuggestionProfile};
use business::domain::suggestion::services::SuggestionGeneratorService;

use crate::client::{ChatMode, OpenAIClient};
use crate::interpreter::{ValidationMode, interpret};
use crate::prompt::{GENERATION_SYSTEM_PROMPT, ResponseShape, build_generation_prompt};

/// Recommendation generation favors variety over determinism.
const GENERATION_TEMPERATURE: f32 = 0.7;

pub struct SuggestionGeneratorOpenAI {
    client: OpenAIClient,
    shape: ResponseShape,
    mode: ValidationMode,
}

impl SuggestionGeneratorOpenAI {
    pub fn new(client: OpenAIClient, shape: ResponseShape, mode: ValidationMode) -> Self {
        Self {
            client,
            shape,
            mode,
        }
    }
}

#[async_trait]
impl SuggestionGeneratorService for SuggestionGeneratorOpenAI {
    fn check_configuration(&self) -> Result<(), SuggestionError> {
        self.client.ensure_configured()
    }

    async fn generate(
        &self,
        profile: &SuggestionProfile,
        current_subscriptions: &[String],
    ) -> Result<Vec<Suggestion>, SuggestionError> {
        let prompt = build_generation_prompt(profile, current_subscriptions, self.shape);

        let content = self
            .client
            .chat_completion(
                GENERATION_SYSTEM_PROMPT,
                &prompt,
                GENERATION_TEMPERATURE,
                ChatMode::Freeform,
            )
            .await?;

        let interpreted = interpret(&content, self.mode)?;
        if interpreted.dropped > 0 {
            tracing::warn!(
                dropped = interpreted.dropped,
                "dropped invalid suggestions from model output"
            );
        }

        Ok(interpreted.suggestions)
    }
}
