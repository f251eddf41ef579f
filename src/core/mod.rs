//! # Core — Answer Bank
//!
//! Holds the [`KnowledgeBase`], the static intent → answer mapping consumed
//! by the [`Orchestrator`](crate::orchestrator::Orchestrator).

pub mod knowledge_base;

pub use knowledge_base::{KnowledgeBase, DEFAULT_RESPONSE};
