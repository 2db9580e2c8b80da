use crate::domain::{errors::DomainError, Message};
use async_trait::async_trait;

#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub system: String,
    pub history: Vec<Message>,
    pub prompt: String,
    pub temperature: f64,
    pub max_tokens: u64,
}

impl CompletionRequest {
    pub fn new(system: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            system: system.into(),
            history: Vec::new(),
            prompt: prompt.into(),
            temperature: 0.7,
            max_tokens: 1000,
        }
    }

    pub fn with_history(mut self, history: Vec<Message>) -> Self {
        self.history = history;
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u64) -> Self {
        self.max_tokens = max_tokens;
        self
    }
}

/// A hosted completion API addressed by model identifier.
#[async_trait]
pub trait LlmService: Send + Sync {
    async fn complete(&self, model: &str, request: &CompletionRequest)
        -> Result<String, DomainError>;
}
