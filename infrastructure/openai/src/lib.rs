pub mod client;
pub mod interpreter;
pub mod prompt;
pub mod snippet_extractor;
pub mod suggestion_generator;
