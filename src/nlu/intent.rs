//! # Intent Classifier
//!
//! The [`IntentClassifier`] maps a free-text question to one of the closed
//! set of [`Intent`]s plus a confidence in `[0, 1]`.
//!
//! | Group | Intents |
//! |-------|---------|
//! | General | `greeting`, `identity`, `capability`, `thanks`, `tips` |
//! | Circular economy | `ce_definition`, `ce_principles`, `ce_examples`, `ce_benefits`, `ce_general` |
//! | Sustainability | `sustainability_general`, `plastic_waste`, `renewable_energy`, `climate_change` |
//! | Fallback | `unknown` |
//!
//! ## Scoring
//!
//! ```text
//! message
//!   ├── lowercase, trim
//!   │   └── empty → (unknown, 0.0)
//!   ├── for every rule (declaration order):
//!   │   ├── pattern hit?       + 10.0 × weight
//!   │   └── keyword evidence   + Σ keyword_score × weight
//!   ├── best = strictly highest score (ties keep the earlier intent)
//!   │   └── no score > 0 → (unknown, 0.0)
//!   └── confidence = min(best / 20.0, 1.0)
//! ```
//!
//! The divisor `20.0` is calibrated against the weights in
//! [`rules::RULES`](super::rules::RULES): a single pattern hit on a rule of
//! weight 2.0 saturates the confidence at 1.0, and the orchestrator's 0.3
//! threshold requires a raw score of 6.0.
//!
//! ## Concurrency
//!
//! The classifier is immutable after [`IntentClassifier::new`]. `classify`
//! takes `&self`, so one instance behind an `Arc` serves every request
//! without locking.

use std::fmt;
use std::str::FromStr;

use regex::{RegexSet, RegexSetBuilder};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::rules::{RuleSpec, RULES};
use crate::error::{EcoBuddyError, Result};

/// Added once per rule when any of its patterns matches.
pub const PATTERN_BONUS: f64 = 10.0;
/// Per word of a keyword phrase found verbatim in the message.
pub const EXACT_KEYWORD_WORD_SCORE: f64 = 2.0;
/// Per keyword word that equals a whitespace token of the message.
pub const PARTIAL_KEYWORD_WORD_SCORE: f64 = 0.5;
/// Raw score that maps to confidence 1.0.
pub const CONFIDENCE_DIVISOR: f64 = 20.0;

/// Category of user question the bot recognizes.
///
/// Declaration order is significant: it is the rule-table order and the
/// tie-break order when two intents reach the same score.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Greeting,
    Identity,
    Capability,
    Thanks,
    CeDefinition,
    CePrinciples,
    CeExamples,
    CeBenefits,
    CeGeneral,
    SustainabilityGeneral,
    PlasticWaste,
    RenewableEnergy,
    ClimateChange,
    Tips,
    /// Produced only when nothing scores above zero.
    Unknown,
}

impl Intent {
    /// Every intent, in declaration order.
    pub const ALL: &'static [Intent] = &[
        Intent::Greeting,
        Intent::Identity,
        Intent::Capability,
        Intent::Thanks,
        Intent::CeDefinition,
        Intent::CePrinciples,
        Intent::CeExamples,
        Intent::CeBenefits,
        Intent::CeGeneral,
        Intent::SustainabilityGeneral,
        Intent::PlasticWaste,
        Intent::RenewableEnergy,
        Intent::ClimateChange,
        Intent::Tips,
        Intent::Unknown,
    ];

    /// Stable snake_case name, identical to the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Greeting => "greeting",
            Intent::Identity => "identity",
            Intent::Capability => "capability",
            Intent::Thanks => "thanks",
            Intent::CeDefinition => "ce_definition",
            Intent::CePrinciples => "ce_principles",
            Intent::CeExamples => "ce_examples",
            Intent::CeBenefits => "ce_benefits",
            Intent::CeGeneral => "ce_general",
            Intent::SustainabilityGeneral => "sustainability_general",
            Intent::PlasticWaste => "plastic_waste",
            Intent::RenewableEnergy => "renewable_energy",
            Intent::ClimateChange => "climate_change",
            Intent::Tips => "tips",
            Intent::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned by [`Intent::from_str`] for names outside the closed set.
#[derive(Error, Debug, PartialEq, Eq)]
#[error("unknown intent name: {0}")]
pub struct ParseIntentError(pub String);

impl FromStr for Intent {
    type Err = ParseIntentError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Intent::ALL
            .iter()
            .copied()
            .find(|i| i.as_str() == s)
            .ok_or_else(|| ParseIntentError(s.to_string()))
    }
}

/// Outcome of a single classification. Owned by the caller, never cached.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ClassificationResult {
    pub intent: Intent,
    /// Always within `[0.0, 1.0]`.
    pub confidence: f64,
}

impl ClassificationResult {
    pub fn unknown() -> Self {
        Self {
            intent: Intent::Unknown,
            confidence: 0.0,
        }
    }
}

/// Raw and normalized score of one rule, used by diagnostics.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct IntentScore {
    pub intent: Intent,
    pub score: f64,
    pub confidence: f64,
}

/// Keyword phrase with its words split once at build time.
struct Keyword {
    phrase: &'static str,
    words: Vec<&'static str>,
}

/// Compiled form of a [`RuleSpec`].
struct IntentRule {
    intent: Intent,
    /// All patterns in one set; only "any matched" matters.
    patterns: RegexSet,
    keywords: Vec<Keyword>,
    weight: f64,
}

impl IntentRule {
    fn compile(spec: &RuleSpec) -> Result<Self> {
        let patterns = RegexSetBuilder::new(spec.patterns)
            .case_insensitive(true)
            .build()
            .map_err(|source| EcoBuddyError::Pattern {
                intent: spec.intent,
                source,
            })?;

        let keywords = spec
            .keywords
            .iter()
            .map(|&phrase| Keyword {
                phrase,
                words: phrase.split_whitespace().collect(),
            })
            .collect();

        Ok(Self {
            intent: spec.intent,
            patterns,
            keywords,
            weight: spec.weight,
        })
    }

    /// Scores an already-normalized message.
    fn score(&self, message: &str, tokens: &[&str]) -> f64 {
        let mut score = 0.0;
        if self.patterns.is_match(message) {
            score += PATTERN_BONUS * self.weight;
        }
        score + keyword_score(message, tokens, &self.keywords) * self.weight
    }
}

/// Unweighted keyword evidence.
///
/// A phrase found verbatim (substring, word-boundary agnostic) is worth
/// `2.0` per word. Otherwise each of its words that equals a token of the
/// message is worth `0.5`. Every keyword contributes; there is no early exit.
fn keyword_score(message: &str, tokens: &[&str], keywords: &[Keyword]) -> f64 {
    keywords
        .iter()
        .map(|kw| {
            if message.contains(kw.phrase) {
                kw.words.len() as f64 * EXACT_KEYWORD_WORD_SCORE
            } else {
                kw.words.iter().filter(|w| tokens.contains(*w)).count() as f64
                    * PARTIAL_KEYWORD_WORD_SCORE
            }
        })
        .sum()
}

/// Canonical form used for all matching: lowercase, trimmed.
///
/// No Unicode recomposition: a combining mark stays a separate code point,
/// so the ASCII letters before it still match keywords.
pub fn normalize(message: &str) -> String {
    message.to_lowercase().trim().to_string()
}

/// Maps a raw score onto `[0, 1]`.
pub fn score_to_confidence(score: f64) -> f64 {
    (score / CONFIDENCE_DIVISOR).min(1.0)
}

/// Picks the first strictly-highest score above zero.
fn best_of(scores: &[IntentScore]) -> ClassificationResult {
    let mut best: Option<&IntentScore> = None;
    for candidate in scores {
        if candidate.score > best.map_or(0.0, |b| b.score) {
            best = Some(candidate);
        }
    }
    best.map_or_else(ClassificationResult::unknown, |b| ClassificationResult {
        intent: b.intent,
        confidence: b.confidence,
    })
}

/// Rule-based classifier over the static [`RULES`] table.
pub struct IntentClassifier {
    rules: Vec<IntentRule>,
}

impl IntentClassifier {
    /// Compiles the built-in rule table.
    ///
    /// # Errors
    ///
    /// [`EcoBuddyError::Pattern`] if a static pattern does not compile.
    pub fn new() -> Result<Self> {
        Self::from_rules(RULES)
    }

    fn from_rules(specs: &[RuleSpec]) -> Result<Self> {
        let rules = specs
            .iter()
            .map(IntentRule::compile)
            .collect::<Result<Vec<_>>>()?;
        tracing::debug!(rules = rules.len(), "Intent rule table compiled");
        Ok(Self { rules })
    }

    /// Intents that have a rule, in tie-break order.
    pub fn intents(&self) -> impl Iterator<Item = Intent> + '_ {
        self.rules.iter().map(|r| r.intent)
    }

    /// Classifies a message. Never fails; see the module docs for scoring.
    pub fn classify(&self, message: &str) -> ClassificationResult {
        let normalized = normalize(message);
        if normalized.is_empty() {
            return ClassificationResult::unknown();
        }

        let result = best_of(&self.score_normalized(&normalized));
        tracing::trace!(
            intent = %result.intent,
            confidence = result.confidence,
            "Intent classified"
        );
        result
    }

    /// Score of every rule, in table order.
    ///
    /// `classify` is the first maximum of this list when that maximum is
    /// above zero. Empty input scores zero everywhere.
    pub fn score_all(&self, message: &str) -> Vec<IntentScore> {
        let normalized = normalize(message);
        if normalized.is_empty() {
            return self
                .rules
                .iter()
                .map(|r| IntentScore {
                    intent: r.intent,
                    score: 0.0,
                    confidence: 0.0,
                })
                .collect();
        }
        self.score_normalized(&normalized)
    }

    fn score_normalized(&self, message: &str) -> Vec<IntentScore> {
        let tokens: Vec<&str> = message.split_whitespace().collect();
        self.rules
            .iter()
            .map(|rule| {
                let score = rule.score(message, &tokens);
                IntentScore {
                    intent: rule.intent,
                    score,
                    confidence: score_to_confidence(score),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier() -> IntentClassifier {
        IntentClassifier::new().expect("built-in rules compile")
    }

    fn score_for(c: &IntentClassifier, message: &str, intent: Intent) -> f64 {
        c.score_all(message)
            .into_iter()
            .find(|s| s.intent == intent)
            .map(|s| s.score)
            .unwrap_or_default()
    }

    // ─── scenarios ─────────────────────────────────────────────

    #[test]
    fn greeting() {
        let r = classifier().classify("halo");
        assert_eq!(r.intent, Intent::Greeting);
        assert!(r.confidence >= 0.3);
    }

    #[test]
    fn ce_definition_pattern_fires() {
        let r = classifier().classify("apa itu ekonomi sirkular?");
        assert_eq!(r.intent, Intent::CeDefinition);
        assert!(r.confidence >= 0.7);
    }

    #[test]
    fn thanks() {
        let r = classifier().classify("terima kasih banyak");
        assert_eq!(r.intent, Intent::Thanks);
        assert!(r.confidence >= 0.3);
    }

    #[test]
    fn gibberish_is_unknown() {
        assert_eq!(
            classifier().classify("asdkjaslkdj"),
            ClassificationResult::unknown()
        );
    }

    #[test]
    fn plastic_next_to_waste() {
        let r = classifier().classify("sampah plastik di laut");
        assert_eq!(r.intent, Intent::PlasticWaste);
        assert!(r.confidence >= 0.5);

        let r = classifier().classify("Kenapa plastik sampah berbahaya?");
        assert_eq!(r.intent, Intent::PlasticWaste);
        assert!(r.confidence >= 0.5);
    }

    #[test]
    fn other_topics() {
        let c = classifier();
        assert_eq!(c.classify("Siapa kamu?").intent, Intent::Identity);
        assert_eq!(c.classify("Jelaskan prinsip 5R").intent, Intent::CePrinciples);
        assert_eq!(c.classify("Bahaya plastik").intent, Intent::PlasticWaste);
        assert_eq!(
            c.classify("apa dampak perubahan iklim?").intent,
            Intent::ClimateChange
        );
        assert_eq!(
            c.classify("energi terbarukan itu apa").intent,
            Intent::RenewableEnergy
        );
    }

    #[test]
    fn case_and_surrounding_whitespace_are_ignored() {
        let c = classifier();
        assert_eq!(c.classify("  HALO  "), c.classify("halo"));
    }

    // ─── edge cases ────────────────────────────────────────────

    #[test]
    fn empty_and_whitespace_are_unknown() {
        let c = classifier();
        for input in ["", "   ", "\n\t  \r\n"] {
            assert_eq!(c.classify(input), ClassificationResult::unknown());
        }
    }

    #[test]
    fn punctuation_and_digits_score_zero() {
        let c = classifier();
        assert_eq!(c.classify("?!... ,,, 12345"), ClassificationResult::unknown());
    }

    #[test]
    fn confidence_stays_in_unit_interval_on_long_input() {
        let c = classifier();
        let long = "siapa kamu bot ekonomi sirkular plastik sampah ".repeat(2_000);
        let r = c.classify(&long);
        assert!((0.0..=1.0).contains(&r.confidence));

        let unicode = "ñ€😊 ".repeat(5_000);
        let r = c.classify(&unicode);
        assert!((0.0..=1.0).contains(&r.confidence));
    }

    #[test]
    fn classification_is_deterministic() {
        let c = classifier();
        let msg = "Bagaimana cara memulai hidup ramah lingkungan?";
        assert_eq!(c.classify(msg), c.classify(msg));
    }

    #[test]
    fn full_phrase_outscores_single_word() {
        let c = classifier();
        let full = score_for(&c, "energi terbarukan", Intent::RenewableEnergy);
        let partial = score_for(&c, "energi", Intent::RenewableEnergy);
        assert!(full >= partial);

        let full = score_for(&c, "tolong bahas sampah plastik", Intent::PlasticWaste);
        let partial = score_for(&c, "tolong bahas sampah", Intent::PlasticWaste);
        assert!(full >= partial);
    }

    #[test]
    fn multiple_patterns_do_not_stack() {
        // Both greeting patterns match; the bonus is applied once.
        let c = classifier();
        let score = score_for(&c, "halo selamat pagi", Intent::Greeting);
        // pattern 10 + keywords halo(2) selamat(2) pagi(2) = 16, × 2.0
        assert!((score - 32.0).abs() < 1e-9);
    }

    // ─── scoring helpers ───────────────────────────────────────

    #[test]
    fn keyword_score_exact_and_partial() {
        let keywords = vec![
            Keyword {
                phrase: "sampah plastik",
                words: vec!["sampah", "plastik"],
            },
            Keyword {
                phrase: "plastik",
                words: vec!["plastik"],
            },
        ];
        // verbatim phrase: 2 × 2.0, plus "plastik" verbatim: 2.0
        let msg = "sampah plastik";
        let tokens: Vec<&str> = msg.split_whitespace().collect();
        assert_eq!(keyword_score(msg, &tokens, &keywords), 6.0);

        // phrase absent; "sampah" is a token → 0.5
        let msg = "sampah organik";
        let tokens: Vec<&str> = msg.split_whitespace().collect();
        assert_eq!(keyword_score(msg, &tokens, &keywords), 0.5);

        // substring match is word-boundary agnostic, token match is not
        let msg = "plastiknya";
        let tokens: Vec<&str> = msg.split_whitespace().collect();
        assert_eq!(keyword_score(msg, &tokens, &keywords), 2.0);
    }

    #[test]
    fn ties_keep_the_earlier_intent() {
        let scores = [
            IntentScore {
                intent: Intent::Greeting,
                score: 0.0,
                confidence: 0.0,
            },
            IntentScore {
                intent: Intent::Identity,
                score: 7.0,
                confidence: 0.35,
            },
            IntentScore {
                intent: Intent::Capability,
                score: 7.0,
                confidence: 0.35,
            },
        ];
        assert_eq!(best_of(&scores).intent, Intent::Identity);
    }

    #[test]
    fn real_tie_resolves_to_declaration_order() {
        // "contoh" and "manfaat" each earn 2.0 × 1.8 for their own rule
        let c = classifier();
        for msg in ["contoh manfaat", "manfaat contoh"] {
            assert_eq!(
                score_for(&c, msg, Intent::CeExamples),
                score_for(&c, msg, Intent::CeBenefits)
            );
            assert_eq!(c.classify(msg).intent, Intent::CeExamples);
        }
    }

    #[test]
    fn combining_mark_keeps_ascii_prefix_matchable() {
        let c = classifier();
        let msg = "plastik\u{0301}";
        assert_eq!(normalize(msg).chars().count(), 8);
        let r = c.classify(msg);
        assert_eq!(r.intent, Intent::PlasticWaste);
        assert!((score_for(&c, msg, Intent::PlasticWaste) - 3.6).abs() < 1e-9);
        assert!((r.confidence - 0.18).abs() < 1e-9);
    }

    #[test]
    fn all_zero_scores_are_unknown() {
        let scores = [IntentScore {
            intent: Intent::Tips,
            score: 0.0,
            confidence: 0.0,
        }];
        assert_eq!(best_of(&scores), ClassificationResult::unknown());
    }

    #[test]
    fn confidence_saturates() {
        assert_eq!(score_to_confidence(0.0), 0.0);
        assert_eq!(score_to_confidence(6.0), 0.3);
        assert_eq!(score_to_confidence(20.0), 1.0);
        assert_eq!(score_to_confidence(45.0), 1.0);
    }

    #[test]
    fn score_all_covers_every_rule_in_order() {
        let c = classifier();
        let intents: Vec<Intent> = c.score_all("").into_iter().map(|s| s.intent).collect();
        assert_eq!(intents, c.intents().collect::<Vec<_>>());
        assert!(!intents.contains(&Intent::Unknown));
    }

    #[test]
    fn classify_agrees_with_score_all() {
        let c = classifier();
        let msg = "contoh penerapan ekonomi sirkular di industri";
        let scores = c.score_all(msg);
        let max = scores.iter().map(|s| s.score).fold(0.0, f64::max);
        let first_max = scores.iter().find(|s| s.score == max).map(|s| s.intent);
        assert_eq!(Some(c.classify(msg).intent), first_max);
    }

    #[test]
    fn intent_names_round_trip() {
        for intent in Intent::ALL {
            assert_eq!(intent.as_str().parse::<Intent>(), Ok(*intent));
            let json = serde_json::to_string(intent).unwrap();
            assert_eq!(json, format!("\"{}\"", intent.as_str()));
        }
        assert!("nope".parse::<Intent>().is_err());
    }
}
