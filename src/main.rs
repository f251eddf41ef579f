//! # EcoBuddy — HTTP API server
//!
//! ```text
//! main()
//!   ├── Parses ServerArgs (flags + ECOBUDDY_* env)
//!   ├── Configures tracing
//!   ├── Compiles the rule table (IntentClassifier)
//!   ├── Builds Orchestrator with the configured threshold
//!   ├── Mounts AppState and Router
//!   └── Serves on --addr (default 0.0.0.0:5000)
//! ```
//!
//! ```bash
//! cargo run --bin ecobuddy
//! RUST_LOG=debug cargo run --bin ecobuddy -- --addr 127.0.0.1:8080
//! ```

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use ecobuddy::config::ServerArgs;
use ecobuddy::core::KnowledgeBase;
use ecobuddy::nlu::IntentClassifier;
use ecobuddy::orchestrator::Orchestrator;
use ecobuddy::web::{self, state::AppState};

#[tokio::main]
async fn main() -> Result<()> {
    let args = ServerArgs::parse();
    ecobuddy::init_tracing(&args.log);

    tracing::info!("🌱 EcoBuddy — Starting...");

    let classifier =
        Arc::new(IntentClassifier::new().context("failed to compile intent rule table")?);
    tracing::info!(
        intents = classifier.intents().count(),
        "Intent rules compiled"
    );

    let bot = Orchestrator::new(classifier, KnowledgeBase::new()).with_threshold(args.threshold)?;
    tracing::info!(threshold = bot.threshold(), "Orchestrator ready");

    let app = web::create_router(AppState::new(bot));

    let listener = tokio::net::TcpListener::bind(args.addr)
        .await
        .with_context(|| format!("failed to bind {}", args.addr))?;
    tracing::info!("🚀 Server running at http://{}", args.addr);

    axum::serve(listener, app).await?;

    Ok(())
}
