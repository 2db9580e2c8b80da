use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;

use super::error_status;
use crate::api::state::AppState;
use crate::domain::{ChatReply, Message};

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default)]
    pub history: Vec<Message>,
}

pub async fn chat_handler(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatReply>, StatusCode> {
    state
        .chat
        .reply(&request.message, &request.history)
        .await
        .map(Json)
        .map_err(error_status)
}
