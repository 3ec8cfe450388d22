use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::mailbox::use_cases::import::{ImportMailboxParams, ImportMailboxUseCase};
use business::domain::shared::value_objects::OauthToken;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::mailbox::dto::{ImportMailboxRequest, MailboxImportResponse};
use crate::api::tags::ApiTags;

pub struct MailboxApi {
    import_use_case: Arc<dyn ImportMailboxUseCase>,
}

impl MailboxApi {
    pub fn new(import_use_case: Arc<dyn ImportMailboxUseCase>) -> Self {
        Self { import_use_case }
    }
}

/// Mailbox API
///
/// Endpoints for mining subscription-like messages from the user's mailbox.
#[OpenApi]
impl MailboxApi {
    /// Import subscription candidates from the mailbox
    ///
    /// Searches the user's mailbox for subscription-like messages and folds
    /// their subjects into candidate entries. No model call is involved.
    #[oai(path = "/mailbox/import", method = "post", tag = "ApiTags::Mailbox")]
    async fn import_mailbox(&self, body: Json<ImportMailboxRequest>) -> ImportMailboxResponse {
        let params = ImportMailboxParams {
            oauth_token: OauthToken::new(body.0.oauth_token),
        };

        match self.import_use_case.execute(params).await {
            Ok(candidates) => {
                ImportMailboxResponse::Ok(Json(MailboxImportResponse::from_domain(candidates)))
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    422 => ImportMailboxResponse::UnprocessableEntity(json),
                    _ => ImportMailboxResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum ImportMailboxResponse {
    #[oai(status = 200)]
    Ok(Json<MailboxImportResponse>),
    #[oai(status = 422)]
    UnprocessableEntity(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use business::domain::mailbox::errors::MailboxError;
    use business::domain::mailbox::model::MailboxCandidate;
    use poem::Route;
    use poem::http::StatusCode;
    use poem::test::TestClient;
    use poem_openapi::OpenApiService;

    struct StubImport;

    #[async_trait]
    impl ImportMailboxUseCase for StubImport {
        async fn execute(
            &self,
            params: ImportMailboxParams,
        ) -> Result<Vec<MailboxCandidate>, MailboxError> {
            if params.oauth_token.is_empty() {
                return Err(MailboxError::InvalidRequest(
                    "mailbox.oauth_token_empty".to_string(),
                ));
            }
            Ok(vec![MailboxCandidate::from_subject(
                "m1",
                Some("Netflix receipt".to_string()),
            )])
        }
    }

    fn test_app() -> TestClient<Route> {
        let api = MailboxApi::new(Arc::new(StubImport));
        let service = OpenApiService::new(api, "test", "0.1.0");
        TestClient::new(Route::new().nest("/", service))
    }

    #[tokio::test]
    async fn should_return_candidates_under_suggestions_key() {
        let cli = test_app();

        let resp = cli
            .post("/mailbox/import")
            .content_type("application/json")
            .body(r#"{"oauth_token":"ya29.token"}"#)
            .send()
            .await;

        resp.assert_status_is_ok();
        let json = resp.json().await;
        let suggestions = json.value().object().get("suggestions").array();
        suggestions.assert_len(1);
    }

    #[tokio::test]
    async fn should_reject_empty_token_with_422() {
        let cli = test_app();

        let resp = cli
            .post("/mailbox/import")
            .content_type("application/json")
            .body(r#"{"oauth_token":""}"#)
            .send()
            .await;

        resp.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    }
}
