//! # Orchestrator — From Classification to Answer
//!
//! The [`Orchestrator`] turns a user message into the text the bot sends
//! back. It owns no conversational state: every call is independent.
//!
//! ```text
//! message
//!   ├── blank?                          → EMPTY_PROMPT
//!   ├── classify → (intent, confidence)
//!   ├── confidence ≥ threshold
//!   │   and intent ≠ unknown            → KnowledgeBase answer
//!   └── otherwise                       → fallback by topic hint
//!       ├── ekonomi / economy / sirkular / circular        → circular-economy hint
//!       ├── lingkungan / environment / sustainability /
//!       │   hijau / green                                  → environment hint
//!       └── anything else                                  → generic "not understood"
//! ```
//!
//! The classifier is shared through an `Arc` so the web layer, the
//! analyzer and tests can all hold the same compiled rule table.

use std::sync::Arc;

use serde::Serialize;

use crate::core::KnowledgeBase;
use crate::error::{EcoBuddyError, Result};
use crate::nlu::{ClassificationResult, Intent, IntentClassifier};

/// Minimum confidence for answering from the knowledge base.
pub const DEFAULT_CONFIDENCE_THRESHOLD: f64 = 0.3;

/// Reply for blank messages.
pub const EMPTY_PROMPT: &str =
    "Silakan ketik pertanyaan Anda tentang ekonomi sirkular atau sustainability. 😊";

const CIRCULAR_ECONOMY_HINT_WORDS: &[&str] = &["ekonomi", "economy", "sirkular", "circular"];
const ENVIRONMENT_HINT_WORDS: &[&str] =
    &["lingkungan", "environment", "sustainability", "hijau", "green"];

const CIRCULAR_ECONOMY_FALLBACK: &str = "Sepertinya Anda ingin tahu tentang ekonomi sirkular! 🔄

Coba tanyakan:
• \"Apa itu ekonomi sirkular?\"
• \"Jelaskan prinsip ekonomi sirkular\"
• \"Contoh penerapan ekonomi sirkular\"
• \"Manfaat ekonomi sirkular\"

Atau ketik \"bisa apa\" untuk melihat topik yang bisa saya jelaskan! 💡";

const ENVIRONMENT_FALLBACK: &str = "Tertarik dengan topik lingkungan? 🌍

Saya bisa jelaskan tentang:
• Sustainability dan keberlanjutan
• Masalah sampah plastik & solusinya
• Energi terbarukan
• Perubahan iklim
• Tips hidup ramah lingkungan

Silakan tanyakan yang Anda ingin ketahui! 😊";

const GENERAL_FALLBACK: &str = "Maaf, saya belum memahami pertanyaan Anda. 🤔

Saya adalah EcoBuddy, asisten edukatif tentang:
✓ Ekonomi Sirkular
✓ Sustainability & Lingkungan
✓ Tips Hidup Ramah Lingkungan

Coba tanyakan:
• \"Apa itu ekonomi sirkular?\"
• \"Bagaimana cara hidup lebih ramah lingkungan?\"
• \"Jelaskan tentang sampah plastik\"

Atau ketik \"bisa apa\" untuk melihat kemampuan lengkap saya! 💡";

/// Coarse topic detected in a message that did not clear the threshold.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackHint {
    CircularEconomy,
    Environment,
    General,
}

impl FallbackHint {
    /// Substring search over the lower-cased message; circular economy wins
    /// over environment when both appear.
    pub fn detect(message: &str) -> Self {
        let lower = message.to_lowercase();
        let mentions = |words: &[&str]| words.iter().any(|w| lower.contains(w));

        if mentions(CIRCULAR_ECONOMY_HINT_WORDS) {
            FallbackHint::CircularEconomy
        } else if mentions(ENVIRONMENT_HINT_WORDS) {
            FallbackHint::Environment
        } else {
            FallbackHint::General
        }
    }

    pub fn response(&self) -> &'static str {
        match self {
            FallbackHint::CircularEconomy => CIRCULAR_ECONOMY_FALLBACK,
            FallbackHint::Environment => ENVIRONMENT_FALLBACK,
            FallbackHint::General => GENERAL_FALLBACK,
        }
    }
}

/// Why a reply has the text it has.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum ReplySource {
    /// Blank input, nothing was classified.
    EmptyPrompt,
    /// Answered from the knowledge base.
    Intent(Intent),
    /// Below threshold or unknown.
    Fallback(FallbackHint),
}

/// One bot answer plus the evidence behind it.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BotReply {
    pub text: &'static str,
    pub classification: ClassificationResult,
    pub source: ReplySource,
}

/// Rejects thresholds outside `[0, 1]` (and NaN).
pub fn validate_threshold(threshold: f64) -> Result<f64> {
    if (0.0..=1.0).contains(&threshold) {
        Ok(threshold)
    } else {
        Err(EcoBuddyError::InvalidThreshold(threshold))
    }
}

/// Stateless bot: classifier + answer bank + confidence threshold.
pub struct Orchestrator {
    classifier: Arc<IntentClassifier>,
    kb: KnowledgeBase,
    threshold: f64,
}

impl Orchestrator {
    /// Orchestrator with [`DEFAULT_CONFIDENCE_THRESHOLD`].
    pub fn new(classifier: Arc<IntentClassifier>, kb: KnowledgeBase) -> Self {
        Self {
            classifier,
            kb,
            threshold: DEFAULT_CONFIDENCE_THRESHOLD,
        }
    }

    /// Replaces the threshold.
    ///
    /// # Errors
    ///
    /// [`EcoBuddyError::InvalidThreshold`] outside `[0, 1]`.
    pub fn with_threshold(mut self, threshold: f64) -> Result<Self> {
        self.threshold = validate_threshold(threshold)?;
        Ok(self)
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn classifier(&self) -> &IntentClassifier {
        &self.classifier
    }

    pub fn knowledge_base(&self) -> &KnowledgeBase {
        &self.kb
    }

    pub fn classify(&self, message: &str) -> ClassificationResult {
        self.classifier.classify(message)
    }

    /// Whether a classification is trusted enough to answer directly.
    pub fn passes_threshold(&self, result: &ClassificationResult) -> bool {
        result.confidence >= self.threshold && result.intent != Intent::Unknown
    }

    /// Full decision for one message.
    pub fn respond(&self, message: &str) -> BotReply {
        if message.trim().is_empty() {
            return BotReply {
                text: EMPTY_PROMPT,
                classification: ClassificationResult::unknown(),
                source: ReplySource::EmptyPrompt,
            };
        }

        let classification = self.classifier.classify(message);
        let source = if self.passes_threshold(&classification) {
            ReplySource::Intent(classification.intent)
        } else {
            ReplySource::Fallback(FallbackHint::detect(message))
        };

        let text = match source {
            ReplySource::Intent(intent) => self.kb.get_response(intent),
            ReplySource::Fallback(hint) => hint.response(),
            ReplySource::EmptyPrompt => EMPTY_PROMPT,
        };

        tracing::debug!(
            intent = %classification.intent,
            confidence = %format!("{:.2}", classification.confidence),
            source = ?source,
            "Reply selected"
        );

        BotReply {
            text,
            classification,
            source,
        }
    }

    /// Text-only shorthand for [`respond`](Self::respond).
    pub fn get_response(&self, message: &str) -> &'static str {
        self.respond(message).text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bot() -> Orchestrator {
        let classifier = Arc::new(IntentClassifier::new().unwrap());
        Orchestrator::new(classifier, KnowledgeBase::new())
    }

    #[test]
    fn blank_message_gets_prompt() {
        let bot = bot();
        for msg in ["", "   ", "\n"] {
            let reply = bot.respond(msg);
            assert_eq!(reply.text, EMPTY_PROMPT);
            assert_eq!(reply.source, ReplySource::EmptyPrompt);
        }
    }

    #[test]
    fn confident_intent_answers_from_knowledge_base() {
        let bot = bot();
        let reply = bot.respond("Halo");
        assert_eq!(reply.source, ReplySource::Intent(Intent::Greeting));
        assert_eq!(reply.text, KnowledgeBase::new().get_response(Intent::Greeting));

        let reply = bot.respond("Apa itu ekonomi sirkular?");
        assert_eq!(reply.source, ReplySource::Intent(Intent::CeDefinition));
    }

    #[test]
    fn weak_economy_mention_falls_back_with_hint() {
        // "ekonomi" alone only earns partial keyword credit.
        let reply = bot().respond("ekonomi");
        assert!(reply.classification.confidence < DEFAULT_CONFIDENCE_THRESHOLD);
        assert_eq!(
            reply.source,
            ReplySource::Fallback(FallbackHint::CircularEconomy)
        );
        assert_eq!(reply.text, CIRCULAR_ECONOMY_FALLBACK);
    }

    #[test]
    fn environment_mention_falls_back_with_hint() {
        let reply = bot().respond("lingkungan");
        assert_eq!(reply.source, ReplySource::Fallback(FallbackHint::Environment));
        assert_eq!(reply.text, ENVIRONMENT_FALLBACK);
    }

    #[test]
    fn gibberish_gets_generic_fallback() {
        let reply = bot().respond("asdkjaslkdj");
        assert_eq!(reply.classification, ClassificationResult::unknown());
        assert_eq!(reply.source, ReplySource::Fallback(FallbackHint::General));
        assert_eq!(reply.text, GENERAL_FALLBACK);
    }

    #[test]
    fn hint_detection_prefers_circular_economy() {
        assert_eq!(
            FallbackHint::detect("Circular economy dan lingkungan"),
            FallbackHint::CircularEconomy
        );
        assert_eq!(FallbackHint::detect("GREEN"), FallbackHint::Environment);
        assert_eq!(FallbackHint::detect("kucing"), FallbackHint::General);
    }

    #[test]
    fn threshold_is_configurable() {
        // "tips dong" scores 3.0 raw → confidence 0.15
        let strict = bot();
        assert!(matches!(
            strict.respond("tips dong").source,
            ReplySource::Fallback(_)
        ));

        let lenient = bot().with_threshold(0.1).unwrap();
        assert_eq!(
            lenient.respond("tips dong").source,
            ReplySource::Intent(Intent::Tips)
        );
    }

    #[test]
    fn confidence_equal_to_threshold_passes() {
        // "tips" + "cara" → (2.0 + 2.0) × 1.5 = 6.0 → exactly 0.3
        let bot = bot();
        let reply = bot.respond("tips cara");
        assert_eq!(reply.classification.intent, Intent::Tips);
        assert_eq!(reply.classification.confidence, DEFAULT_CONFIDENCE_THRESHOLD);
        assert!(bot.passes_threshold(&reply.classification));
        assert_eq!(reply.source, ReplySource::Intent(Intent::Tips));
    }

    #[test]
    fn get_response_returns_reply_text() {
        let bot = bot();
        assert_eq!(
            bot.get_response("Halo"),
            KnowledgeBase::new().get_response(Intent::Greeting)
        );
        assert_eq!(bot.get_response("lingkungan"), ENVIRONMENT_FALLBACK);
        assert_eq!(bot.get_response("  "), EMPTY_PROMPT);
    }

    #[test]
    fn unknown_never_passes_even_at_zero_threshold() {
        let bot = bot().with_threshold(0.0).unwrap();
        assert!(!bot.passes_threshold(&ClassificationResult::unknown()));
    }

    #[test]
    fn invalid_thresholds_are_rejected() {
        assert!(validate_threshold(-0.1).is_err());
        assert!(validate_threshold(1.5).is_err());
        assert!(validate_threshold(f64::NAN).is_err());
        assert_eq!(validate_threshold(0.3).unwrap(), 0.3);
    }
}
