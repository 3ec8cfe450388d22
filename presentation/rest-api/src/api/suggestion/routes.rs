use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::suggestion::use_cases::extract::{
    ExtractSuggestionsParams, ExtractSuggestionsUseCase,
};
use business::domain::suggestion::use_cases::generate::{
    GenerateSuggestionsParams, GenerateSuggestionsUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::suggestion::dto::{
    ExtractSuggestionsRequest, GenerateSuggestionsRequest, SuggestionsResponse,
};
use crate::api::tags::ApiTags;

pub struct SuggestionApi {
    generate_use_case: Arc<dyn GenerateSuggestionsUseCase>,
    extract_use_case: Arc<dyn ExtractSuggestionsUseCase>,
}

impl SuggestionApi {
    pub fn new(
        generate_use_case: Arc<dyn GenerateSuggestionsUseCase>,
        extract_use_case: Arc<dyn ExtractSuggestionsUseCase>,
    ) -> Self {
        Self {
            generate_use_case,
            extract_use_case,
        }
    }
}

/// Suggestion API
///
/// Endpoints for generating and extracting subscription recommendations.
#[OpenApi]
impl SuggestionApi {
    /// Generate subscription suggestions
    ///
    /// Returns three AI-generated subscription recommendations based on the
    /// user's interests, budget, country, and current subscriptions.
    #[oai(
        path = "/suggestions/generate",
        method = "post",
        tag = "ApiTags::Suggestions"
    )]
    async fn generate_suggestions(
        &self,
        body: Json<GenerateSuggestionsRequest>,
    ) -> GenerateSuggestionsResponse {
        let params = GenerateSuggestionsParams {
            user_id: body.0.user_id,
            subscriptions: body.0.subscriptions.unwrap_or_default(),
            interests: body.0.interests,
            budget: body.0.budget,
            country: body.0.country,
        };

        match self.generate_use_case.execute(params).await {
            Ok(suggestions) => {
                GenerateSuggestionsResponse::Ok(Json(SuggestionsResponse::from_domain(suggestions)))
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    422 => GenerateSuggestionsResponse::UnprocessableEntity(json),
                    _ => GenerateSuggestionsResponse::InternalError(json),
                }
            }
        }
    }

    /// Extract suggestions from email snippets
    ///
    /// Mines raw email text for subscription details using the model's
    /// extraction mode.
    #[oai(
        path = "/suggestions/extract",
        method = "post",
        tag = "ApiTags::Suggestions"
    )]
    async fn extract_suggestions(
        &self,
        body: Json<ExtractSuggestionsRequest>,
    ) -> GenerateSuggestionsResponse {
        let params = ExtractSuggestionsParams {
            user_id: body.0.user_id,
            email_snippets: body.0.email_snippets,
        };

        match self.extract_use_case.execute(params).await {
            Ok(suggestions) => {
                GenerateSuggestionsResponse::Ok(Json(SuggestionsResponse::from_domain(suggestions)))
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    422 => GenerateSuggestionsResponse::UnprocessableEntity(json),
                    _ => GenerateSuggestionsResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GenerateSuggestionsResponse {
    #[oai(status = 200)]
    Ok(Json<SuggestionsResponse>),
    #[oai(status = 422)]
    UnprocessableEntity(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
