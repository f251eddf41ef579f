//! # Error Types
//!
//! The classifier itself is infallible once built: every string yields a
//! well-defined [`ClassificationResult`](crate::nlu::ClassificationResult).
//! The failures that remain live at the edges of the crate:
//!
//! | Variant | Source | When |
//! |---------|--------|------|
//! | [`Pattern`](EcoBuddyError::Pattern) | `regex` | a static rule pattern fails to compile at startup |
//! | [`Io`](EcoBuddyError::Io) | `std::io` | analyzer export cannot write its report |
//! | [`Json`](EcoBuddyError::Json) | `serde_json` | analyzer report cannot be (de)serialized |
//! | [`InvalidThreshold`](EcoBuddyError::InvalidThreshold) | config | threshold outside `[0, 1]` |

use thiserror::Error;

use crate::nlu::Intent;

/// Library error type.
#[derive(Error, Debug)]
pub enum EcoBuddyError {
    /// A rule pattern failed to compile.
    #[error("invalid pattern for intent {intent}: {source}")]
    Pattern {
        intent: Intent,
        #[source]
        source: regex::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Confidence thresholds are compared against values in `[0, 1]`.
    #[error("confidence threshold must be within [0, 1], got {0}")]
    InvalidThreshold(f64),
}

/// Shorthand for results carrying [`EcoBuddyError`].
pub type Result<T> = std::result::Result<T, EcoBuddyError>;
