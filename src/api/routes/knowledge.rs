use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::api::state::AppState;
use crate::domain::{KnowledgeBaseStats, SearchResult};

#[derive(Debug, Deserialize)]
pub struct KnowledgeQuery {
    pub query: String,
    pub top_k: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct SearchResultResponse {
    pub document_id: String,
    pub title: String,
    pub category: String,
    pub score: f64,
    pub chunk: String,
}

impl From<SearchResult> for SearchResultResponse {
    fn from(result: SearchResult) -> Self {
        Self {
            document_id: result.document.id.clone(),
            title: result.document.title.clone(),
            category: result.document.category.clone(),
            score: result.score,
            chunk: result.chunk,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub query: String,
    pub results: Vec<SearchResultResponse>,
}

#[derive(Debug, Serialize)]
pub struct ContextResponse {
    pub context: String,
    pub confidence: f64,
}

pub async fn search(
    State(state): State<AppState>,
    Json(request): Json<KnowledgeQuery>,
) -> Json<SearchResponse> {
    let top_k = request.top_k.unwrap_or(state.retriever.default_top_k());
    let results = state
        .retriever
        .search(&request.query, top_k)
        .into_iter()
        .map(SearchResultResponse::from)
        .collect();

    Json(SearchResponse {
        query: request.query,
        results,
    })
}

pub async fn context(
    State(state): State<AppState>,
    Json(request): Json<KnowledgeQuery>,
) -> Json<ContextResponse> {
    let top_k = request.top_k.unwrap_or(state.retriever.default_top_k());
    Json(ContextResponse {
        context: state.retriever.generate_context(&request.query, top_k),
        confidence: state.retriever.confidence(&request.query),
    })
}

pub async fn stats(State(state): State<AppState>) -> Json<KnowledgeBaseStats> {
    Json(state.retriever.stats())
}
