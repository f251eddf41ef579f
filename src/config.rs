//! Command line and environment configuration for both binaries.
//!
//! | Flag | Env | Default | Binary |
//! |------|-----|---------|--------|
//! | `--addr` | `ECOBUDDY_ADDR` | `0.0.0.0:5000` | `ecobuddy` |
//! | `--threshold` | `ECOBUDDY_THRESHOLD` | `0.3` | both |
//! | `--log` | `ECOBUDDY_LOG` | `info` / `warn` | both |
//! | `--export-path` | — | `intent_analysis.json` | `intent-analyzer` |
//!
//! `RUST_LOG`, when set, takes precedence over `--log`.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;

use crate::orchestrator::validate_threshold;

/// EcoBuddy chat API server
#[derive(Parser, Debug, Clone)]
#[command(name = "ecobuddy")]
#[command(about = "Circular-economy education chatbot HTTP API")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct ServerArgs {
    /// Address to bind the HTTP server to
    #[arg(long, env = "ECOBUDDY_ADDR", default_value = "0.0.0.0:5000")]
    pub addr: SocketAddr,

    /// Minimum confidence for answering from the knowledge base
    #[arg(long, env = "ECOBUDDY_THRESHOLD", default_value = "0.3", value_parser = parse_threshold)]
    pub threshold: f64,

    /// Default log filter when RUST_LOG is not set
    #[arg(long, env = "ECOBUDDY_LOG", default_value = "info")]
    pub log: String,
}

/// EcoBuddy intent analyzer
///
/// Without MESSAGES an interactive menu is started; with MESSAGES they are
/// analyzed as one batch and the summary is printed.
#[derive(Parser, Debug, Clone)]
#[command(name = "intent-analyzer")]
#[command(about = "Inspect and debug EcoBuddy intent classification")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct AnalyzerArgs {
    /// Messages to analyze non-interactively
    #[arg(value_name = "MESSAGES")]
    pub messages: Vec<String>,

    /// Confidence threshold used for the pass/fail columns
    #[arg(long, env = "ECOBUDDY_THRESHOLD", default_value = "0.3", value_parser = parse_threshold)]
    pub threshold: f64,

    /// Where "export to JSON" writes its report
    #[arg(long, default_value = "intent_analysis.json")]
    pub export_path: PathBuf,

    /// Default log filter when RUST_LOG is not set
    #[arg(long, env = "ECOBUDDY_LOG", default_value = "warn")]
    pub log: String,
}

/// clap value parser for confidence thresholds.
pub fn parse_threshold(raw: &str) -> Result<f64, String> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|e| format!("not a number: {e}"))?;
    validate_threshold(value).map_err(|e| e.to_string())
}
