pub mod config;
pub mod llm;
pub mod seed;

pub use config::{AppConfig, Config, ConfigError, PromptsConfig};
pub use llm::OpenRouterLlm;
pub use seed::{
    default_documents, default_energy_stats, default_myths, default_news, default_schemes,
};
