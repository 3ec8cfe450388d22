use std::env;

use openai::interpreter::ValidationMode;
use openai::prompt::ResponseShape;

/// Deployment knobs of the suggestion pipeline.
///
/// Environment variables:
/// - SUGGESTION_RESPONSE_SHAPE: "bare_array" | "wrapped" (default: "wrapped")
/// - SUGGESTION_VALIDATION: "strict" | "lenient" (default: "strict")
/// - PERSIST_SUGGESTIONS: "true" | "false" (default: "true")
///
/// The response shape is resolved here, once, so the prompt builder and
/// the interpreter can never disagree within a deployment.
pub struct SuggestionConfig {
    pub response_shape: ResponseShape,
    pub validation_mode: ValidationMode,
    pub persist: bool,
}

impl SuggestionConfig {
    pub fn from_env() -> Self {
        Self {
            response_shape: parse_shape(env::var("SUGGESTION_RESPONSE_SHAPE").ok().as_deref()),
            validation_mode: parse_mode(env::var("SUGGESTION_VALIDATION").ok().as_deref()),
            persist: parse_bool(env::var("PERSIST_SUGGESTIONS").ok().as_deref()),
        }
    }
}

// Values parse case-insensitively; an unrecognized value falls back to the
// default with a startup warning so a deployment knob typo is visible.
fn parse_shape(value: Option<&str>) -> ResponseShape {
    match value.map(str::to_ascii_lowercase).as_deref() {
        Some("bare_array") => ResponseShape::BareArray,
        Some("wrapped") | None => ResponseShape::Wrapped,
        Some(other) => {
            tracing::warn!(
                value = other,
                "unrecognized SUGGESTION_RESPONSE_SHAPE, using wrapped"
            );
            ResponseShape::Wrapped
        }
    }
}

fn parse_mode(value: Option<&str>) -> ValidationMode {
    match value.map(str::to_ascii_lowercase).as_deref() {
        Some("lenient") => ValidationMode::Lenient,
        Some("strict") | None => ValidationMode::Strict,
        Some(other) => {
            tracing::warn!(
                value = other,
                "unrecognized SUGGESTION_VALIDATION, using strict"
            );
            ValidationMode::Strict
        }
    }
}

fn parse_bool(value: Option<&str>) -> bool {
    match value.map(str::to_ascii_lowercase).as_deref() {
        Some("false") => false,
        Some("true") | None => true,
        Some(other) => {
            tracing::warn!(
                value = other,
                "unrecognized PERSIST_SUGGESTIONS, persisting"
            );
            true
        }
    }
}
