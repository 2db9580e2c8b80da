use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{info, instrument, warn};

use crate::application::services::retriever::{KeywordRetriever, NO_MATCH_CONTEXT};
use crate::domain::{
    ports::{CompletionRequest, LlmService},
    ChatReply, DomainError, Message,
};

pub const DEFAULT_MODELS: [&str; 3] = [
    "qwen/qwen-2.5-7b-instruct:free",
    "mistralai/mistral-7b-instruct:free",
    "microsoft/phi-3-medium-128k-instruct:free",
];
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(20);
pub const DEFAULT_HISTORY_WINDOW: usize = 5;
pub const KNOWLEDGE_BASE_SOURCE: &str = "MNRE Knowledge Base";

/// Placeholder in the system prompt template replaced by retrieved context.
pub const CONTEXT_PLACEHOLDER: &str = "{context}";

const DEFAULT_SYSTEM_PROMPT: &str = "You are RenewAI, a helpful assistant for rural renewable energy adoption.\n\nKnowledge Base Context:\n{context}";

/// Answers user messages through a hosted model, grounded in the knowledge base.
pub struct ChatService {
    llm: Arc<dyn LlmService>,
    retriever: Arc<KeywordRetriever>,
    models: Vec<String>,
    system_prompt: String,
    timeout: Duration,
    temperature: f64,
    max_tokens: u64,
    history_window: usize,
    top_k: usize,
}

impl ChatService {
    pub fn new(llm: Arc<dyn LlmService>, retriever: Arc<KeywordRetriever>) -> Self {
        let top_k = retriever.default_top_k();
        Self {
            llm,
            retriever,
            models: DEFAULT_MODELS.iter().map(|m| m.to_string()).collect(),
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
            timeout: DEFAULT_TIMEOUT,
            temperature: 0.7,
            max_tokens: 1000,
            history_window: DEFAULT_HISTORY_WINDOW,
            top_k,
        }
    }

    pub fn with_models(mut self, models: Vec<String>) -> Self {
        self.models = models;
        self
    }

    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = prompt.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
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

    pub fn with_history_window(mut self, window: usize) -> Self {
        self.history_window = window;
        self
    }

    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    pub fn models(&self) -> &[String] {
        &self.models
    }

    #[instrument(skip(self, message, history), fields(history = history.len()))]
    pub async fn reply(&self, message: &str, history: &[Message]) -> Result<ChatReply, DomainError> {
        let message = message.trim();
        if message.is_empty() {
            return Err(DomainError::validation("Message must not be empty"));
        }

        let started = Instant::now();
        let context = self.retriever.generate_context(message, self.top_k);
        let confidence = self.retriever.confidence(message);

        let recent = &history[history.len().saturating_sub(self.history_window)..];
        let request = CompletionRequest::new(self.render_system_prompt(&context), message)
            .with_history(recent.to_vec())
            .with_temperature(self.temperature)
            .with_max_tokens(self.max_tokens);

        let (model, content) = self.complete_with_fallback(&request).await?;

        let sources = if context == NO_MATCH_CONTEXT {
            Vec::new()
        } else {
            vec![KNOWLEDGE_BASE_SOURCE.to_string()]
        };
        let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

        info!(model = %model, confidence, elapsed_ms, "chat reply generated");
        Ok(ChatReply::new(content, model)
            .with_confidence(confidence)
            .with_response_time(elapsed_ms)
            .with_sources(sources))
    }

    fn render_system_prompt(&self, context: &str) -> String {
        if self.system_prompt.contains(CONTEXT_PLACEHOLDER) {
            self.system_prompt.replace(CONTEXT_PLACEHOLDER, context)
        } else {
            format!("{}\n\n{}", self.system_prompt, context)
        }
    }

    /// Tries each model in order; the first non-empty answer wins.
    async fn complete_with_fallback(
        &self,
        request: &CompletionRequest,
    ) -> Result<(String, String), DomainError> {
        if self.models.is_empty() {
            return Err(DomainError::internal("No chat models configured"));
        }

        let mut errors = Vec::with_capacity(self.models.len());
        for model in &self.models {
            let outcome = tokio::time::timeout(self.timeout, self.llm.complete(model, request)).await;

            let error = match outcome {
                Ok(Ok(text)) if !text.trim().is_empty() => return Ok((model.clone(), text)),
                Ok(Ok(_)) => "Empty response".to_string(),
                Ok(Err(e)) => e.to_string(),
                Err(_) => DomainError::timeout(self.timeout).to_string(),
            };

            warn!(model = %model, error = %error, "model attempt failed");
            errors.push(format!("{model}: {error}"));
        }

        Err(DomainError::ModelsExhausted(errors))
    }
}
