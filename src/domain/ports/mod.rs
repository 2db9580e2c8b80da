mod llm;

pub use llm::{CompletionRequest, LlmService};
