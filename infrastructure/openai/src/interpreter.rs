use serde_json::Value;

use business::domain::suggestion::errors::SuggestionError;
use business::domain::suggestion::model::{BillingCycle, Suggestion, create_suggestion};

/// Policy for a batch containing invalid elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationMode {
    /// Any invalid element fails the whole request. Default contract:
    /// a request yields a fully valid sequence or nothing.
    Strict,
    /// Invalid elements are dropped; valid ones proceed.
    Lenient,
}

/// Outcome of interpreting one completion.
#[derive(Debug)]
pub struct Interpreted {
    pub suggestions: Vec<Suggestion>,
    /// Elements dropped in lenient mode. Always zero in strict mode.
    pub dropped: usize,
}

fn malformed(reason: impl Into<String>, raw: &str) -> SuggestionError {
    SuggestionError::MalformedModelOutput {
        reason: reason.into(),
        raw: raw.to_string(),
    }
}

/// Removes markdown code fences some models wrap around JSON output.
fn strip_markdown_fences(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.starts_with("```json") {
        trimmed
            .replace("```json", "")
            .replace("```", "")
            .trim()
            .to_string()
    } else if trimmed.starts_with("```") {
        trimmed.replace("```", "").trim().to_string()
    } else {
        trimmed.to_string()
    }
}

fn interpret_element(item: &Value) -> Result<Suggestion, String> {
    let obj = item.as_object().ok_or("element is not an object")?;

    let name = obj
        .get("name")
        .and_then(Value::as_str)
        .ok_or("missing string field `name`")?;
    let description = obj
        .get("description")
        .and_then(Value::as_str)
        .ok_or("missing string field `description`")?;
    let price = obj
        .get("price")
        .and_then(Value::as_f64)
        .ok_or("missing numeric field `price`")?;
    let billing_cycle = obj
        .get("billing_cycle")
        .and_then(Value::as_str)
        .ok_or("missing string field `billing_cycle`")?
        .parse::<BillingCycle>()?;

    create_suggestion(name.to_string(), description.to_string(), price, billing_cycle)
        .map_err(|e| e.to_string())
}

/// Parses a raw completion into validated suggestions.
///
/// Accepts a bare array or an object wrapping the array under a
/// `suggestions` key; any other top-level shape is malformed output.
/// The raw completion text travels inside the error for diagnostics.
pub fn interpret(raw: &str, mode: ValidationMode) -> Result<Interpreted, SuggestionError> {
    let json_text = strip_markdown_fences(raw);

    let parsed: Value = serde_json::from_str(&json_text)
        .map_err(|e| malformed(format!("completion is not valid JSON: {}", e), raw))?;

    let items: &Vec<Value> = match &parsed {
        Value::Array(items) => items,
        Value::Object(map) => map
            .get("suggestions")
            .and_then(Value::as_array)
            .ok_or_else(|| malformed("object has no `suggestions` array", raw))?,
        _ => {
            return Err(malformed(
                "top-level value is neither an array nor an object",
                raw,
            ));
        }
    };

    let mut suggestions = Vec::with_capacity(items.len());
    let mut dropped = 0;

    for (index, item) in items.iter().enumerate() {
        match interpret_element(item) {
            Ok(suggestion) => suggestions.push(suggestion),
            Err(reason) => match mode {
                ValidationMode::Strict => {
                    return Err(malformed(format!("element {}: {}", index, reason), raw));
                }
                ValidationMode::Lenient => dropped += 1,
            },
        }
    }

    Ok(Interpreted {
        suggestions,
        dropped,
    })
}
