use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: MessageRole,
    pub content: String,
}

impl Message {
    pub fn new(role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(MessageRole::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(MessageRole::Assistant, content)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    System,
    User,
    Assistant,
}

/// Assistant answer annotated with how much the knowledge base backed it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatReply {
    pub id: Uuid,
    pub content: String,
    pub model: String,
    pub confidence: f64,
    pub response_time_ms: u64,
    pub sources: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl ChatReply {
    pub fn new(content: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            content: content.into(),
            model: model.into(),
            confidence: 0.0,
            response_time_ms: 0,
            sources: Vec::new(),
            created_at: Utc::now(),
        }
    }

    pub fn with_confidence(mut self, confidence: f64) -> Self {
        self.confidence = confidence;
        self
    }

    pub fn with_response_time(mut self, millis: u64) -> Self {
        self.response_time_ms = millis;
        self
    }

    pub fn with_sources(mut self, sources: Vec<String>) -> Self {
        self.sources = sources;
        self
    }
}
