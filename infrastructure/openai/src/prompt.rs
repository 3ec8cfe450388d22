use business::domain::suggestion::model::{RECOMMENDATION_COUNT, SuggestionProfile};

/// Top-level JSON shape the model is instructed to return.
///
/// Resolved once at configuration time; the prompt example and the
/// interpreter's expectation must come from the same configured value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseShape {
    /// `[{...}, {...}]`
    BareArray,
    /// `{"suggestions": [{...}, {...}]}`
    Wrapped,
}

pub const GENERATION_SYSTEM_PROMPT: &str = "You are a recommendation engine that returns subscription suggestions in JSON only. Do not include any explanation, headers, or notes.";

pub const EXTRACTION_SYSTEM_PROMPT: &str = "You are a smart assistant that extracts subscription details from email text. Respond with JSON only, no prose.";

const BARE_ARRAY_EXAMPLE: &str = r#"[
  {
    "name": "Example Subscription",
    "description": "Short one-line explanation of why this is recommended.",
    "price": 9.99,
    "billing_cycle": "Monthly"
  }
]"#;

const WRAPPED_EXAMPLE: &str = r#"{
  "suggestions": [
    {
      "name": "Example Subscription",
      "description": "Short one-line explanation of why this is recommended.",
      "price": 9.99,
      "billing_cycle": "Monthly"
    }
  ]
}"#;

fn schema_example(shape: ResponseShape) -> &'static str {
    match shape {
        ResponseShape::BareArray => BARE_ARRAY_EXAMPLE,
        ResponseShape::Wrapped => WRAPPED_EXAMPLE,
    }
}

fn shape_name(shape: ResponseShape) -> &'static str {
    match shape {
        ResponseShape::BareArray => "JSON array",
        ResponseShape::Wrapped => "JSON object",
    }
}

fn join_or_none(values: &[String]) -> String {
    if values.is_empty() {
        "none".to_string()
    } else {
        values.join(", ")
    }
}

/// Renders the user instruction for the interest-based generation variant.
/// Pure and deterministic: the same profile always yields the same text.
pub fn build_generation_prompt(
    profile: &SuggestionProfile,
    current_subscriptions: &[String],
    shape: ResponseShape,
) -> String {
    format!(
        "Current subscriptions: {}\n\
         Interests: {}\n\
         Budget: ${}\n\
         Country: {}\n\n\
         Based on this info, return {} subscription suggestions that complement what the user already pays for, in the following format as a {} only:\n\n\
         {}\n\n\
         Only respond with a {}.",
        join_or_none(current_subscriptions),
        profile.interests.join(", "),
        profile.monthly_budget,
        profile.country,
        RECOMMENDATION_COUNT,
        shape_name(shape),
        schema_example(shape),
        shape_name(shape),
    )
}

/// Renders the user instruction for snippet extraction.
pub fn build_extraction_prompt(snippets: &[String], shape: ResponseShape) -> String {
    let snippet_list = snippets
        .iter()
        .enumerate()
        .map(|(i, text)| format!("Email {}: {}", i + 1, text))
        .collect::<Vec<_>>()
        .join("\n\n");

    format!(
        "For each email snippet below that describes a subscription, return an entry with:\n\
         - name: name of the service\n\
         - description: a short summary\n\
         - price: number (USD)\n\
         - billing_cycle: \"Monthly\" | \"Yearly\"\n\n\
         Skip snippets that are not about a subscription.\n\n\
         Here are the email snippets:\n\
         {}\n\n\
         Respond with a {} in this format:\n\n\
         {}",
        snippet_list,
        shape_name(shape),
        schema_example(shape),
    )
}
