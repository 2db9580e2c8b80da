use async_trait::async_trait;
use rig::client::{CompletionClient, ProviderClient};
use rig::completion::{Chat, Message as RigMessage};
use rig::providers::openrouter;

use crate::domain::{
    ports::{CompletionRequest, LlmService},
    DomainError, Message, MessageRole,
};

pub const API_KEY_VAR: &str = "OPENROUTER_API_KEY";

/// Hosted chat models reached through OpenRouter.
#[derive(Default)]
pub struct OpenRouterLlm;

impl OpenRouterLlm {
    pub fn new() -> Self {
        Self
    }

    pub fn is_configured() -> bool {
        std::env::var(API_KEY_VAR).is_ok_and(|key| !key.trim().is_empty())
    }
}

/// Prior turns as role-tagged chat messages. System turns are dropped since
/// the preamble already carries the system prompt.
fn chat_history(history: &[Message]) -> Vec<RigMessage> {
    history
        .iter()
        .filter_map(|m| match m.role {
            MessageRole::User => Some(RigMessage::user(m.content.clone())),
            MessageRole::Assistant => Some(RigMessage::assistant(m.content.clone())),
            MessageRole::System => None,
        })
        .collect()
}

#[async_trait]
impl LlmService for OpenRouterLlm {
    async fn complete(
        &self,
        model: &str,
        request: &CompletionRequest,
    ) -> Result<String, DomainError> {
        if !Self::is_configured() {
            return Err(DomainError::external(format!("{API_KEY_VAR} is not set")));
        }

        let client = openrouter::Client::from_env();
        let agent = client
            .agent(model)
            .preamble(&request.system)
            .temperature(request.temperature)
            .max_tokens(request.max_tokens)
            .build();

        agent
            .chat(request.prompt.as_str(), chat_history(&request.history))
            .await
            .map_err(|e| DomainError::external(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_history_keeps_roles_and_order() {
        let history = vec![
            Message::new(MessageRole::System, "ignored"),
            Message::user("Cost of 3kW rooftop solar?"),
            Message::assistant("About 1.9 lakh before subsidy."),
            Message::user("And for 5kW?"),
        ];

        let converted = chat_history(&history);

        assert_eq!(converted.len(), 3);
        assert!(matches!(converted[0], RigMessage::User { .. }));
        assert!(matches!(converted[1], RigMessage::Assistant { .. }));
        assert!(matches!(converted[2], RigMessage::User { .. }));
    }

    #[test]
    fn test_empty_history() {
        assert!(chat_history(&[]).is_empty());
    }
}
