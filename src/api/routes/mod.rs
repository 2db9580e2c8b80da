pub mod calculators;
pub mod catalog;
pub mod chat;
pub mod health;
pub mod knowledge;

use axum::http::{header, Method, StatusCode};
use axum::{middleware, routing::get, routing::post, Router};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::api::middleware::request_logger;
use crate::api::state::AppState;
use crate::domain::DomainError;

pub fn create_router(state: AppState) -> Router {
    let cors = build_cors(&state.config.config.cors.allowed_origins);

    Router::new()
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        .nest("/api/v1", api_v1_routes())
        .layer(middleware::from_fn(request_logger))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors)
        .with_state(state)
}

fn build_cors(origins: &[String]) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    if origins.is_empty() || origins.iter().any(|o| o == "*") {
        cors.allow_origin(Any)
    } else {
        let origins: Vec<_> = origins.iter().filter_map(|o| o.parse().ok()).collect();
        cors.allow_origin(origins)
    }
}

fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .route("/knowledge/search", post(knowledge::search))
        .route("/knowledge/context", post(knowledge::context))
        .route("/knowledge/stats", get(knowledge::stats))
        .route("/chat", post(chat::chat_handler))
        .route("/calculators/co2", post(calculators::co2))
        .route("/calculators/savings", post(calculators::savings))
        .route("/calculators/cost", post(calculators::cost))
        .route("/calculators/appliances", get(calculators::appliances))
        .route("/schemes", get(catalog::list_schemes))
        .route("/dashboard", get(catalog::dashboard))
        .route("/myths", get(catalog::list_myths))
        .route("/myths/categories", get(catalog::myth_categories))
        .route("/news", get(catalog::list_news))
}

pub(crate) fn error_status(error: DomainError) -> StatusCode {
    let status = match &error {
        DomainError::Validation(_) => StatusCode::BAD_REQUEST,
        DomainError::NotFound(_) => StatusCode::NOT_FOUND,
        e if e.is_upstream() => StatusCode::BAD_GATEWAY,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };

    if status.is_server_error() {
        tracing::error!(error = %error, "Request failed");
    } else {
        tracing::debug!(error = %error, "Request rejected");
    }
    status
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{CatalogService, ChatService, KeywordRetriever};
    use crate::domain::ports::{CompletionRequest, LlmService};
    use crate::infrastructure::{seed, AppConfig};
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::Request;
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::ServiceExt;

    struct StubLlm;

    #[async_trait]
    impl LlmService for StubLlm {
        async fn complete(
            &self,
            model: &str,
            request: &CompletionRequest,
        ) -> Result<String, DomainError> {
            if request.prompt.contains("unreachable") {
                return Err(DomainError::external("connection refused"));
            }
            Ok(format!("{model} says hi"))
        }
    }

    fn app() -> Router {
        let retriever = Arc::new(KeywordRetriever::new(seed::default_documents()));
        let chat = Arc::new(
            ChatService::new(Arc::new(StubLlm), retriever.clone())
                .with_models(vec!["stub/model".into()]),
        );
        let catalog = Arc::new(
            CatalogService::new(
                seed::default_schemes(),
                seed::default_energy_stats(),
                seed::default_myths(),
            )
            .with_news(seed::default_news()),
        );
        create_router(AppState::new(AppConfig::default(), retriever, chat, catalog))
    }

    async fn send(request: Request<Body>) -> (StatusCode, Value) {
        let response = app().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    async fn get_json(uri: &str) -> (StatusCode, Value) {
        send(Request::get(uri).body(Body::empty()).unwrap()).await
    }

    async fn post_json(uri: &str, body: Value) -> (StatusCode, Value) {
        send(
            Request::post(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    #[tokio::test]
    async fn test_health_and_ready() {
        let (status, body) = get_json("/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");

        let (status, body) = get_json("/ready").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["documents"], 6);
        assert_eq!(body["llm"], "missing_api_key");
    }

    #[tokio::test]
    async fn test_knowledge_search() {
        let (status, body) = post_json(
            "/api/v1/knowledge/search",
            json!({"query": "solar subsidy for farmers", "top_k": 2}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let results = body["results"].as_array().unwrap();
        assert!(!results.is_empty() && results.len() <= 2);
        assert!(results[0]["score"].as_f64().unwrap() > 0.1);
    }

    #[tokio::test]
    async fn test_knowledge_context_for_unrelated_query() {
        let (status, body) =
            post_json("/api/v1/knowledge/context", json!({"query": "xyzzy"})).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body["context"],
            crate::application::services::retriever::NO_MATCH_CONTEXT
        );
        assert_eq!(body["confidence"], 0.0);
    }

    #[tokio::test]
    async fn test_knowledge_stats() {
        let (status, body) = get_json("/api/v1/knowledge/stats").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["document_count"], 6);
        assert_eq!(body["categories"][0], "solar");
    }

    #[tokio::test]
    async fn test_chat_reply() {
        let (status, body) = post_json(
            "/api/v1/chat",
            json!({
                "message": "How much subsidy for rooftop solar?",
                "history": [{"role": "user", "content": "hello"}]
            }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["model"], "stub/model");
        assert_eq!(body["content"], "stub/model says hi");
        assert_eq!(body["sources"][0], "MNRE Knowledge Base");
    }

    #[tokio::test]
    async fn test_chat_errors_map_to_status() {
        let (status, _) = post_json("/api/v1/chat", json!({"message": "  "})).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) =
            post_json("/api/v1/chat", json!({"message": "unreachable model"})).await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
    }

    #[tokio::test]
    async fn test_co2_calculator() {
        let (status, body) = post_json(
            "/api/v1/calculators/co2",
            json!({"type": "monthly_bill", "value": 1200}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["monthly_units"], 200.0);
        assert_eq!(body["trees_equivalent"], 84);

        let (status, _) = post_json(
            "/api/v1/calculators/co2",
            json!({"type": "monthly_units", "value": -5}),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_appliances_listed() {
        let (status, body) = get_json("/api/v1/calculators/appliances").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 5);
        assert_eq!(body[0]["name"], "Fan");
    }

    #[tokio::test]
    async fn test_schemes_filter() {
        let (status, body) = get_json("/api/v1/schemes?type=wind").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 1);
        assert_eq!(body[0]["name"], "Small Wind Energy");

        let (_, body) = get_json("/api/v1/schemes?type=all").await;
        assert_eq!(body.as_array().unwrap().len(), 5);

        let (status, _) = get_json("/api/v1/schemes?type=nuclear").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_dashboard() {
        let (status, body) = get_json("/api/v1/dashboard").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["stats"]["total_capacity"], "175 GW");
        assert_eq!(body["schemes"].as_array().unwrap().len(), 5);
    }

    #[tokio::test]
    async fn test_myths_search_and_categories() {
        let (status, body) = get_json("/api/v1/myths?search=monsoon&category=solar").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 2);

        let (_, body) = get_json("/api/v1/myths").await;
        assert_eq!(body.as_array().unwrap().len(), 10);

        let (_, body) = get_json("/api/v1/myths/categories").await;
        assert_eq!(body[1]["id"], "cost");
        assert_eq!(body[1]["label"], "Cost & Money");
    }

    #[tokio::test]
    async fn test_news_search_and_category() {
        let (status, body) = get_json("/api/v1/news").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 5);
        assert_eq!(body[0]["published_on"], "2024-03-15");
        assert_eq!(body[0]["category"], "solar");

        let (_, body) = get_json("/api/v1/news?search=Solar&category=all").await;
        assert_eq!(body.as_array().unwrap().len(), 4);

        let (_, body) = get_json("/api/v1/news?search=solar&category=policy").await;
        assert_eq!(body.as_array().unwrap().len(), 1);
        assert_eq!(body[0]["source"], "Power Ministry");

        let (status, _) = get_json("/api/v1/news?category=biogas").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_model_failures_map_to_bad_gateway() {
        let timeout = DomainError::timeout(std::time::Duration::from_secs(20));
        assert_eq!(error_status(timeout), StatusCode::BAD_GATEWAY);
        assert_eq!(
            error_status(DomainError::ModelsExhausted(vec!["a: Empty response".into()])),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            error_status(DomainError::internal("no models")),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
