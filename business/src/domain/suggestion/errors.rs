/// Errors raised by the suggestion pipeline.
/// Variants carry the diagnostics the caller needs to reconstruct a failure;
/// secrets (bearer tokens, API keys) must never be placed in these fields.
#[derive(Debug, thiserror::Error)]
pub enum SuggestionError {
    #[error("suggestion.invalid_request: {0}")]
    InvalidRequest(String),
    #[error("server.misconfigured: missing {0}")]
    MissingConfiguration(&'static str),
    #[error("suggestion.upstream_unavailable: {details}")]
    UpstreamUnavailable { details: String },
    /// The model answered but the text failed parsing or schema validation.
    /// The raw completion is preserved for diagnostics, never trusted downstream.
    #[error("suggestion.malformed_model_output: {reason}")]
    MalformedModelOutput { reason: String, raw: String },
    #[error("suggestion.persistence_failed: {0}")]
    PersistenceFailed(String),
    #[error("repository.database_error")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
