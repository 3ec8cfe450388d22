use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::suggestion::errors::SuggestionError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

/// Raw model output can be arbitrarily long; cap what goes into the envelope.
const MAX_RAW_DIAGNOSTIC: usize = 500;

fn truncate_raw(raw: &str) -> String {
    if raw.len() <= MAX_RAW_DIAGNOSTIC {
        raw.to_string()
    } else {
        let cut = raw
            .char_indices()
            .take_while(|(i, _)| *i < MAX_RAW_DIAGNOSTIC)
            .last()
            .map(|(i, c)| i + c.len_utf8())
            .unwrap_or(0);
        format!("{}…", &raw[..cut])
    }
}

impl IntoErrorResponse for SuggestionError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, error, details) = match self {
            SuggestionError::InvalidRequest(details) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "suggestion.invalid_request",
                Some(details),
            ),
            SuggestionError::MissingConfiguration(name) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "server.misconfigured",
                Some(format!("missing {}", name)),
            ),
            SuggestionError::UpstreamUnavailable { details } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "suggestion.upstream_unavailable",
                Some(details),
            ),
            SuggestionError::MalformedModelOutput { reason, raw } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "suggestion.malformed_model_output",
                Some(format!("{}; raw output: {}", reason, truncate_raw(&raw))),
            ),
            SuggestionError::PersistenceFailed(details) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "suggestion.persistence_failed",
                Some(details),
            ),
            SuggestionError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "repository.database_error",
                None,
            ),
        };

        (
            status,
            Json(ErrorResponse {
                error: error.to_string(),
                details,
            }),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_map_invalid_request_to_422() {
        let (status, body) =
            SuggestionError::InvalidRequest("suggestion.interests_empty".to_string())
                .into_error_response();

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body.0.error, "suggestion.invalid_request");
        assert_eq!(body.0.details.as_deref(), Some("suggestion.interests_empty"));
    }

    #[test]
    fn should_map_missing_configuration_to_500() {
        let (status, body) =
            SuggestionError::MissingConfiguration("OPENAI_API_KEY").into_error_response();

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.0.error, "server.misconfigured");
    }

    #[test]
    fn should_keep_raw_output_in_malformed_details() {
        let (status, body) = SuggestionError::MalformedModelOutput {
            reason: "completion is not valid JSON".to_string(),
            raw: "Sure! Here you go".to_string(),
        }
        .into_error_response();

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body.0.details.unwrap().contains("Sure! Here you go"));
    }

    #[test]
    fn should_truncate_long_raw_output() {
        let raw = "x".repeat(2000);
        let truncated = truncate_raw(&raw);

        assert!(truncated.len() < 600);
        assert!(truncated.ends_with('…'));
    }
}
