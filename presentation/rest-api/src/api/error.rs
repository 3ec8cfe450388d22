use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

/// JSON error envelope returned on every failure path.
/// `details` carries diagnostics (provider bodies, parse reasons); secrets
/// never reach either field.
#[derive(Object, Debug)]
pub struct ErrorResponse {
    pub error: String,
    #[oai(skip_serializing_if_is_none)]
    pub details: Option<String>,
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}
