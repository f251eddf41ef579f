//! # EcoBuddy — Circular Economy Education Bot
//!
//! Rule-based chatbot answering Indonesian (and some English) questions
//! about circular economy and sustainability.
//!
//! ```text
//! message ──► nlu::IntentClassifier ──► (intent, confidence)
//!                                             │
//!                    orchestrator::Orchestrator (threshold 0.3)
//!                        ├── core::KnowledgeBase answer
//!                        └── topic-hint fallback
//! ```
//!
//! Two binaries are built on this library: `ecobuddy` (the axum HTTP API in
//! [`web`]) and `intent-analyzer` (the diagnostics CLI over [`analyzer`]).

/// Classification diagnostics: batch statistics, comparisons, export.
pub mod analyzer;

/// Command line and environment configuration.
pub mod config;

/// Static answer bank.
pub mod core;

/// Library error type.
pub mod error;

/// Intent enum, rule table and classifier.
pub mod nlu;

/// Turns classifications into replies.
pub mod orchestrator;

/// axum router, handlers and templates.
pub mod web;

/// Installs the global `tracing` subscriber. `RUST_LOG` wins over
/// `default_filter`.
pub fn init_tracing(default_filter: &str) {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();
}
