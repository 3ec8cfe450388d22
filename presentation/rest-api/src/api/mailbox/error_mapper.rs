use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::mailbox::errors::MailboxError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for MailboxError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, error, details) = match self {
            MailboxError::InvalidRequest(details) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "mailbox.invalid_request",
                Some(details),
            ),
            MailboxError::UpstreamUnavailable { details } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "mailbox.upstream_unavailable",
                Some(details),
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
        let (status, body) = MailboxError::InvalidRequest("mailbox.oauth_token_empty".to_string())
            .into_error_response();

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body.0.error, "mailbox.invalid_request");
    }

    #[test]
    fn should_map_upstream_failure_to_500_with_details() {
        let (status, body) = MailboxError::UpstreamUnavailable {
            details: "401 Unauthorized".to_string(),
        }
        .into_error_response();

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.0.details.as_deref(), Some("401 Unauthorized"));
    }
}
