use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("External service error: {0}")]
    ExternalService(String),

    #[error("Timed out after {0}ms")]
    Timeout(u128),

    /// Every candidate model failed; one `"{model}: {error}"` entry per attempt.
    #[error("All models failed -> {}", .0.join(" | "))]
    ModelsExhausted(Vec<String>),
}

impl DomainError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    pub fn external(msg: impl Into<String>) -> Self {
        Self::ExternalService(msg.into())
    }

    pub fn timeout(after: Duration) -> Self {
        Self::Timeout(after.as_millis())
    }

    /// True when the failure came from a hosted model rather than the caller.
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            Self::ExternalService(_) | Self::Timeout(_) | Self::ModelsExhausted(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, DomainError>;
