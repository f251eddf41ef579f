//! # Web Module — EcoBuddy HTTP API
//!
//! JSON API built with **Axum**, plus a **Maud** landing page.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │ Chat front end (any origin, CORS permissive)         │
//! ├──────────────────────────────────────────────────────┤
//! │ Axum Router (this module)                            │
//! │  ├── GET  /              → landing page (HTML)       │
//! │  ├── GET  /health        → {"status": "ok"}          │
//! │  ├── POST /api/chat      → {"response": ...}         │
//! │  └── POST /api/classify  → intent + confidence       │
//! ├──────────────────────────────────────────────────────┤
//! │ TraceLayer (request spans) · CorsLayer::permissive   │
//! └──────────────────────────────────────────────────────┘
//! ```
//!
//! | Module | Responsibility |
//! |--------|----------------|
//! | [`state`] | Shared state (`AppState`) |
//! | [`handlers`] | One handler per route |
//! | [`error`] | `ApiError` → JSON error responses |
//! | [`templates`] | Maud landing page |

pub mod error;
pub mod handlers;
pub mod state;
pub mod templates;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use state::AppState;

/// Builds the router with every route and layer.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health))
        .route("/api/chat", post(handlers::chat))
        .route("/api/classify", post(handlers::classify))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
