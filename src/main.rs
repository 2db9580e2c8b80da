use renew_assist::api::{create_router, AppState};
use renew_assist::application::{CatalogService, ChatService, KeywordRetriever};
use renew_assist::infrastructure::{seed, AppConfig, OpenRouterLlm};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=debug,renew_assist=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;
    let settings = &config.config;

    let retriever = Arc::new(
        KeywordRetriever::new(seed::default_documents())
            .with_chunk_size(settings.retrieval.chunk_size)
            .with_default_top_k(settings.retrieval.top_k),
    );
    info!(documents = retriever.len(), "Knowledge base loaded");

    let llm_configured = OpenRouterLlm::is_configured();
    if !llm_configured {
        warn!("OPENROUTER_API_KEY is not set, chat requests will fail");
    }

    let chat = Arc::new(
        ChatService::new(Arc::new(OpenRouterLlm::new()), retriever.clone())
            .with_models(settings.llm.models.clone())
            .with_system_prompt(config.prompts.chat.system.clone())
            .with_timeout(settings.llm.timeout())
            .with_temperature(settings.llm.temperature)
            .with_max_tokens(settings.llm.max_tokens)
            .with_history_window(settings.llm.history_window),
    );
    info!(models = ?chat.models(), "Chat service initialized");

    let catalog = Arc::new(
        CatalogService::new(
            seed::default_schemes(),
            seed::default_energy_stats(),
            seed::default_myths(),
        )
        .with_news(seed::default_news()),
    );

    let addr = SocketAddr::new(settings.server.host.parse()?, settings.server.port);
    let state =
        AppState::new(config, retriever, chat, catalog).with_llm_configured(llm_configured);
    let app = create_router(state);

    info!("API server listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
