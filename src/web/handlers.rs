//! # HTTP Handlers
//!
//! | Handler | Route | Response |
//! |---------|-------|----------|
//! | [`index`] | `GET /` | HTML landing page |
//! | [`health`] | `GET /health` | `{"status": "ok"}` |
//! | [`chat`] | `POST /api/chat` | `{"response": "..."}` |
//! | [`classify`] | `POST /api/classify` | `{"intent", "confidence", "threshold_passed"}` |
//!
//! Body extraction failures are turned into [`ApiError::BadRequest`], so a
//! client always receives JSON, never axum's plain-text rejection.
//!
//! Classification runs on the blocking pool: it is CPU-only regex work and
//! a very long message should not stall the async workers.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::Html;
use axum::Json;
use serde::{Deserialize, Serialize};

use super::error::ApiError;
use super::state::AppState;
use super::templates;
use crate::nlu::Intent;
use crate::orchestrator::BotReply;

/// Body of `/api/chat` and `/api/classify`. A missing or `null`
/// `message` is treated as an empty one.
#[derive(Deserialize, Debug, Default)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<String>,
}

impl ChatRequest {
    fn into_message(self) -> String {
        self.message.unwrap_or_default()
    }
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct ChatResponse {
    pub response: String,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct ClassifyResponse {
    pub intent: Intent,
    pub confidence: f64,
    pub threshold_passed: bool,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct HealthResponse {
    pub status: String,
}

/// GET `/`
pub async fn index(State(state): State<AppState>) -> Html<String> {
    Html(templates::landing_page(state.bot.threshold()).into_string())
}

/// GET `/health`
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

async fn respond(state: &AppState, message: String) -> Result<BotReply, ApiError> {
    let bot = state.bot.clone();
    let reply = tokio::task::spawn_blocking(move || bot.respond(&message)).await?;
    Ok(reply)
}

/// POST `/api/chat` — answer one message.
pub async fn chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, ApiError> {
    let Json(request) = payload?;
    let reply = respond(&state, request.into_message()).await?;

    tracing::info!(
        intent = %reply.classification.intent,
        confidence = %format!("{:.2}", reply.classification.confidence),
        "Chat answered"
    );

    Ok(Json(ChatResponse {
        response: reply.text.to_string(),
    }))
}

/// POST `/api/classify` — classification only, for diagnostics.
pub async fn classify(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ClassifyResponse>, ApiError> {
    let Json(request) = payload?;
    let message = request.into_message();
    let bot = state.bot.clone();
    let (classification, passed) = tokio::task::spawn_blocking(move || {
        let c = bot.classify(&message);
        (c, bot.passes_threshold(&c))
    })
    .await?;

    Ok(Json(ClassifyResponse {
        intent: classification.intent,
        confidence: classification.confidence,
        threshold_passed: passed,
    }))
}
