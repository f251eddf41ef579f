//! # Web Application State
//!
//! ```text
//! main()
//!   └── Arc<IntentClassifier> ──► Orchestrator ──► Arc<Orchestrator>
//!                                                      │
//!                              AppState { bot } ◄──────┘  (cloned per request)
//! ```
//!
//! The orchestrator is immutable after startup, so handlers share it
//! through an `Arc` without any lock.

use std::sync::Arc;

use crate::orchestrator::Orchestrator;

/// Shared state of the axum application.
#[derive(Clone)]
pub struct AppState {
    /// Bot answering every request.
    pub bot: Arc<Orchestrator>,
}

impl AppState {
    pub fn new(bot: Orchestrator) -> Self {
        Self { bot: Arc::new(bot) }
    }
}
