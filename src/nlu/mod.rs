//! # NLU — Question Understanding
//!
//! Everything needed to turn a raw user message into an
//! ([`Intent`], confidence) pair.
//!
//! ```text
//! "Apa itu ekonomi sirkular?"
//!   ├── normalize      → "apa itu ekonomi sirkular?"
//!   ├── score rules    → ce_definition 45.0, ce_general 16.0, ...
//!   └── best + scale   → (ce_definition, 1.0)
//! ```
//!
//! | Module | Responsibility |
//! |--------|----------------|
//! | [`intent`] | `Intent` enum, scoring and the `IntentClassifier` |
//! | [`rules`] | Static pattern/keyword/weight table |

pub mod intent;
pub mod rules;

pub use intent::{ClassificationResult, Intent, IntentClassifier, IntentScore};
