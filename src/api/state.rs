use std::sync::Arc;

use crate::application::{CatalogService, ChatService, KeywordRetriever};
use crate::infrastructure::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub retriever: Arc<KeywordRetriever>,
    pub chat: Arc<ChatService>,
    pub catalog: Arc<CatalogService>,
    pub llm_configured: bool,
}

impl AppState {
    pub fn new(
        config: AppConfig,
        retriever: Arc<KeywordRetriever>,
        chat: Arc<ChatService>,
        catalog: Arc<CatalogService>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            retriever,
            chat,
            catalog,
            llm_configured: false,
        }
    }

    pub fn with_llm_configured(mut self, configured: bool) -> Self {
        self.llm_configured = configured;
        self
    }
}
