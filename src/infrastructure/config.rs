use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::application::services::chat::DEFAULT_MODELS;
use crate::application::services::retriever::DEFAULT_TOP_K;
use crate::domain::DEFAULT_CHUNK_SIZE;

pub const DEFAULT_CONFIG_PATH: &str = "config/config.yaml";
pub const DEFAULT_PROMPTS_PATH: &str = "config/prompts.yaml";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },
    #[error("Invalid value for {key}: {value}")]
    InvalidEnv { key: String, value: String },
}

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub config: Config,
    pub prompts: PromptsConfig,
}

impl AppConfig {
    /// Reads the YAML files named by `CONFIG_PATH` and `PROMPTS_PATH` (or the
    /// defaults), then applies environment overrides. Missing files fall back
    /// to built-in defaults.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path =
            std::env::var("CONFIG_PATH").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.into());
        let prompts_path =
            std::env::var("PROMPTS_PATH").unwrap_or_else(|_| DEFAULT_PROMPTS_PATH.into());

        let mut app = Self {
            config: load_yaml_or_default(Path::new(&config_path))?,
            prompts: load_yaml_or_default(Path::new(&prompts_path))?,
        };
        app.config.apply_overrides(|key| std::env::var(key).ok())?;
        Ok(app)
    }
}

fn load_yaml_or_default<T: DeserializeOwned + Default>(path: &Path) -> Result<T, ConfigError> {
    match std::fs::read_to_string(path) {
        Ok(raw) => {
            tracing::debug!(path = %path.display(), "loaded config file");
            serde_yaml::from_str(&raw).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::info!(path = %path.display(), "config file not found, using defaults");
            Ok(T::default())
        }
        Err(source) => Err(ConfigError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub cors: CorsConfig,
    pub llm: LlmConfig,
    pub retrieval: RetrievalConfig,
}

impl Config {
    pub fn from_yaml(raw: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(raw)
    }

    /// Applies `SERVER_HOST`, `SERVER_PORT`, `LLM_MODELS` (comma separated)
    /// and `LLM_TIMEOUT_SECONDS` from `lookup`.
    pub fn apply_overrides(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(host) = lookup("SERVER_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("SERVER_PORT") {
            self.server.port = parse_env("SERVER_PORT", port)?;
        }
        if let Some(models) = lookup("LLM_MODELS") {
            let models: Vec<String> = models
                .split(',')
                .map(str::trim)
                .filter(|m| !m.is_empty())
                .map(String::from)
                .collect();
            if !models.is_empty() {
                self.llm.models = models;
            }
        }
        if let Some(timeout) = lookup("LLM_TIMEOUT_SECONDS") {
            self.llm.timeout_seconds = parse_env("LLM_TIMEOUT_SECONDS", timeout)?;
        }
        Ok(())
    }
}

fn parse_env<T: std::str::FromStr>(key: &str, value: String) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidEnv {
        key: key.to_string(),
        value,
    })
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    pub models: Vec<String>,
    pub timeout_seconds: u64,
    pub temperature: f64,
    pub max_tokens: u64,
    pub history_window: usize,
}

impl LlmConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            models: DEFAULT_MODELS.iter().map(|m| m.to_string()).collect(),
            timeout_seconds: 20,
            temperature: 0.7,
            max_tokens: 1000,
            history_window: 5,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    pub top_k: usize,
    pub chunk_size: usize,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            top_k: DEFAULT_TOP_K,
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PromptsConfig {
    pub chat: ChatPrompts,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ChatPrompts {
    /// Template for the system prompt; `{context}` receives retrieved text.
    pub system: String,
}

impl Default for ChatPrompts {
    fn default() -> Self {
        Self {
            system: "You are RenewAI, a helpful chatbot that assists users in adopting renewable \
                     energy, especially rooftop solar. Use simple language, explain assumptions \
                     such as cost per kW, subsidy rate and tariff, and stay within the renewable \
                     energy domain.\n\nKnowledge Base Context:\n{context}"
                .to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.llm.models.len(), 3);
        assert_eq!(config.llm.timeout(), Duration::from_secs(20));
        assert_eq!(config.retrieval.top_k, 3);
        assert_eq!(config.retrieval.chunk_size, 300);
        assert!(PromptsConfig::default().chat.system.contains("{context}"));
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = Config::from_yaml(
            "server:\n  port: 9000\nllm:\n  models:\n    - only/model\n",
        )
        .unwrap();

        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.llm.models, vec!["only/model"]);
        assert_eq!(config.llm.max_tokens, 1000);
        assert_eq!(config.retrieval.chunk_size, 300);
    }

    #[test]
    fn test_unknown_llm_keys_are_ignored() {
        let config =
            Config::from_yaml("llm:\n  provider: openrouter\n  timeout_seconds: 5\n").unwrap();
        assert_eq!(config.llm.timeout_seconds, 5);
        assert_eq!(config.llm.models.len(), 3);
    }

    #[test]
    fn test_env_overrides() {
        let mut config = Config::default();
        config
            .apply_overrides(lookup(&[
                ("SERVER_HOST", "127.0.0.1"),
                ("SERVER_PORT", "3000"),
                ("LLM_MODELS", "a/one, b/two ,"),
                ("LLM_TIMEOUT_SECONDS", "5"),
            ]))
            .unwrap();

        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.llm.models, vec!["a/one", "b/two"]);
        assert_eq!(config.llm.timeout_seconds, 5);
    }

    #[test]
    fn test_invalid_env_override() {
        let mut config = Config::default();
        let err = config
            .apply_overrides(lookup(&[("SERVER_PORT", "eighty")]))
            .unwrap_err();

        assert!(matches!(err, ConfigError::InvalidEnv { ref key, .. } if key == "SERVER_PORT"));
    }

    #[test]
    fn test_missing_file_falls_back_to_default() {
        let config: Config =
            load_yaml_or_default(Path::new("does/not/exist/config.yaml")).unwrap();
        assert_eq!(config.server.port, 8080);
    }
}
