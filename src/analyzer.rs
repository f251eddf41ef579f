//! # Intent Analyzer — Classification Diagnostics
//!
//! Tooling for checking how well the rule table covers real questions.
//! The `intent-analyzer` binary is a thin menu over these operations:
//!
//! | Operation | Returns | Shows |
//! |-----------|---------|-------|
//! | [`analyze_single`](IntentAnalyzer::analyze_single) | [`SingleAnalysis`] | intent, confidence, level, answer preview |
//! | [`analyze_batch`](IntentAnalyzer::analyze_batch) | `Vec<AnalysisResult>` | feed for [`BatchSummary`] |
//! | [`find_low_confidence`](IntentAnalyzer::find_low_confidence) | [`LowConfidenceReport`] | messages under a threshold, weakest first |
//! | [`compare_intents`](IntentAnalyzer::compare_intents) | [`IntentComparison`] | every rule's score, best first |
//! | [`export_results`](IntentAnalyzer::export_results) | JSON file | [`ExportReport`] |
//!
//! Every report type implements `Display` with the console layout used by
//! the binary, so the rendering is testable without a terminal.
//!
//! ## Confidence levels
//!
//! ```text
//! 0.0 ─────────── 0.3 ─────────── 0.7 ─────────── 1.0
//!       LOW ❌         MEDIUM ⚠️         HIGH ✅
//! ```

use std::collections::HashMap;
use std::fmt;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use chrono::{DateTime, Utc};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::nlu::{Intent, IntentScore};
use crate::orchestrator::Orchestrator;

/// Lower bound of the HIGH level.
pub const HIGH_CONFIDENCE: f64 = 0.7;
/// Lower bound of the MEDIUM level.
pub const MEDIUM_CONFIDENCE: f64 = 0.3;
/// Answer preview length, in characters.
pub const PREVIEW_CHARS: usize = 200;
/// Width of a full comparison bar.
const BAR_WIDTH: f64 = 30.0;

/// Questions used by the "sample analysis" menu entry.
pub const SAMPLE_MESSAGES: &[&str] = &[
    "Halo",
    "Apa itu ekonomi sirkular?",
    "Jelaskan prinsip 5R",
    "Contoh penerapan",
    "Manfaatnya apa?",
    "Tips dong",
    "Bahaya plastik",
    "Terima kasih",
    "Siapa kamu?",
    "ekonomi",
    "sustainability itu apa?",
    "gimana caranya?",
];

fn separator() -> String {
    "=".repeat(70)
}

fn percent(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64 * 100.0
    }
}

/// Coarse bucket of a confidence value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceLevel {
    High,
    Medium,
    Low,
}

impl ConfidenceLevel {
    pub fn of(confidence: f64) -> Self {
        if confidence >= HIGH_CONFIDENCE {
            ConfidenceLevel::High
        } else if confidence >= MEDIUM_CONFIDENCE {
            ConfidenceLevel::Medium
        } else {
            ConfidenceLevel::Low
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ConfidenceLevel::High => "HIGH ✅",
            ConfidenceLevel::Medium => "MEDIUM ⚠️",
            ConfidenceLevel::Low => "LOW ❌",
        }
    }
}

/// Classification of one message, as exported.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub message: String,
    pub intent: Intent,
    pub confidence: f64,
    pub threshold_passed: bool,
}

/// Detailed view of one message.
#[derive(Clone, Debug)]
pub struct SingleAnalysis {
    pub result: AnalysisResult,
    pub level: ConfidenceLevel,
    /// First [`PREVIEW_CHARS`] characters of the answer; `None` when the
    /// fallback path would be taken.
    pub preview: Option<String>,
}

impl fmt::Display for SingleAnalysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "{}", separator())?;
        writeln!(f, "📝 INPUT: {}", self.result.message)?;
        writeln!(f, "{}", separator())?;
        writeln!(f, "🎯 Intent     : {}", self.result.intent)?;
        writeln!(f, "📊 Confidence : {:.4}", self.result.confidence)?;
        writeln!(f, "📈 Level      : {}", self.level.label())?;
        match &self.preview {
            Some(preview) => {
                writeln!(f)?;
                writeln!(f, "💬 Response Preview:")?;
                writeln!(f, "{preview}...")?;
            }
            None => {
                writeln!(f)?;
                writeln!(f, "💬 Response: fallback will be used")?;
            }
        }
        write!(f, "{}", separator())
    }
}

/// Aggregate statistics over a batch.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BatchSummary {
    pub total: usize,
    /// Most frequent first; equal counts keep intent declaration order.
    pub intent_distribution: Vec<(Intent, usize)>,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
    pub average_confidence: f64,
    pub passed: usize,
}

impl BatchSummary {
    pub fn from_results(results: &[AnalysisResult]) -> Self {
        let mut counts: HashMap<Intent, usize> = HashMap::new();
        let (mut high, mut medium, mut low) = (0, 0, 0);
        for r in results {
            *counts.entry(r.intent).or_default() += 1;
            match ConfidenceLevel::of(r.confidence) {
                ConfidenceLevel::High => high += 1,
                ConfidenceLevel::Medium => medium += 1,
                ConfidenceLevel::Low => low += 1,
            }
        }

        let mut intent_distribution: Vec<(Intent, usize)> = Intent::ALL
            .iter()
            .filter_map(|i| counts.get(i).map(|&n| (*i, n)))
            .collect();
        intent_distribution.sort_by(|a, b| b.1.cmp(&a.1));

        let total = results.len();
        let average_confidence = if total == 0 {
            0.0
        } else {
            results.iter().map(|r| r.confidence).sum::<f64>() / total as f64
        };

        Self {
            total,
            intent_distribution,
            high,
            medium,
            low,
            average_confidence,
            passed: results.iter().filter(|r| r.threshold_passed).count(),
        }
    }
}

impl fmt::Display for BatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = self.total;
        writeln!(f)?;
        writeln!(f, "{}", separator())?;
        writeln!(f, "📊 ANALYSIS SUMMARY")?;
        writeln!(f, "{}", separator())?;
        writeln!(f)?;
        writeln!(f, "📈 Total Messages: {total}")?;
        writeln!(f)?;
        writeln!(f, "🎯 Intent Distribution:")?;
        for (intent, count) in &self.intent_distribution {
            writeln!(
                f,
                "  • {:30} : {:3} ({:5.1}%)",
                intent.as_str(),
                count,
                percent(*count, total)
            )?;
        }
        writeln!(f)?;
        writeln!(f, "📊 Confidence Distribution:")?;
        writeln!(
            f,
            "  • HIGH   (≥0.7) : {:3} ({:5.1}%)",
            self.high,
            percent(self.high, total)
        )?;
        writeln!(
            f,
            "  • MEDIUM (≥0.3) : {:3} ({:5.1}%)",
            self.medium,
            percent(self.medium, total)
        )?;
        writeln!(
            f,
            "  • LOW    (<0.3) : {:3} ({:5.1}%)",
            self.low,
            percent(self.low, total)
        )?;
        writeln!(f)?;
        writeln!(f, "📉 Average Confidence: {:.4}", self.average_confidence)?;
        writeln!(f)?;
        writeln!(
            f,
            "✅ Passed Threshold: {}/{} ({:.1}%)",
            self.passed,
            total,
            percent(self.passed, total)
        )?;
        write!(f, "{}", separator())
    }
}

/// A message that did not reach the requested confidence.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LowConfidenceMessage {
    pub message: String,
    pub intent: Intent,
    pub confidence: f64,
}

/// Result of [`IntentAnalyzer::find_low_confidence`], weakest first.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LowConfidenceReport {
    pub threshold: f64,
    pub items: Vec<LowConfidenceMessage>,
}

impl fmt::Display for LowConfidenceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "{}", separator())?;
        writeln!(
            f,
            "🔍 FINDING LOW CONFIDENCE MESSAGES (< {})",
            self.threshold
        )?;
        writeln!(f, "{}", separator())?;
        if self.items.is_empty() {
            writeln!(f)?;
            writeln!(f, "✅ No low confidence messages found!")?;
        } else {
            writeln!(f)?;
            writeln!(
                f,
                "❌ Found {} low confidence messages:",
                self.items.len()
            )?;
            writeln!(f)?;
            for item in &self.items {
                writeln!(
                    f,
                    "  {:.4} | {:20} | {}",
                    item.confidence,
                    item.intent.as_str(),
                    item.message
                )?;
            }
        }
        write!(f, "{}", separator())
    }
}

/// Every rule's score for one message, best first.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct IntentComparison {
    pub message: String,
    pub scores: Vec<IntentScore>,
    pub top_n: usize,
}

impl IntentComparison {
    /// The `top_n` best candidates.
    pub fn top(&self) -> &[IntentScore] {
        &self.scores[..self.top_n.min(self.scores.len())]
    }
}

impl fmt::Display for IntentComparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "{}", separator())?;
        writeln!(f, "📝 COMPARING ALL INTENTS FOR: {}", self.message)?;
        writeln!(f, "{}", separator())?;
        writeln!(f)?;
        writeln!(f, "🏆 Top {} Intent Candidates:", self.top_n)?;
        writeln!(f)?;
        for (rank, s) in self.top().iter().enumerate() {
            let bar = "█".repeat((s.confidence * BAR_WIDTH) as usize);
            writeln!(
                f,
                "  {}. {:25} | {:6.2} | {}",
                rank + 1,
                s.intent.as_str(),
                s.score,
                bar
            )?;
        }
        write!(f, "{}", separator())
    }
}

/// On-disk export format.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ExportReport {
    pub generated_at: DateTime<Utc>,
    pub threshold: f64,
    pub total: usize,
    pub results: Vec<AnalysisResult>,
}

/// Diagnostics front end over an [`Orchestrator`].
pub struct IntentAnalyzer {
    bot: Orchestrator,
}

impl IntentAnalyzer {
    pub fn new(bot: Orchestrator) -> Self {
        Self { bot }
    }

    fn analyze(&self, message: &str) -> AnalysisResult {
        let classification = self.bot.classify(message);
        AnalysisResult {
            message: message.to_string(),
            intent: classification.intent,
            confidence: classification.confidence,
            threshold_passed: self.bot.passes_threshold(&classification),
        }
    }

    pub fn analyze_single(&self, message: &str) -> SingleAnalysis {
        let result = self.analyze(message);
        let preview = result.threshold_passed.then(|| {
            self.bot
                .knowledge_base()
                .get_response(result.intent)
                .chars()
                .take(PREVIEW_CHARS)
                .collect()
        });
        SingleAnalysis {
            level: ConfidenceLevel::of(result.confidence),
            result,
            preview,
        }
    }

    /// Classifies messages in parallel; output order matches input order.
    pub fn analyze_batch<S: AsRef<str> + Sync>(&self, messages: &[S]) -> Vec<AnalysisResult> {
        let results: Vec<AnalysisResult> = messages
            .par_iter()
            .map(|m| self.analyze(m.as_ref()))
            .collect();
        tracing::info!(count = results.len(), "Batch analyzed");
        results
    }

    pub fn find_low_confidence<S: AsRef<str> + Sync>(
        &self,
        messages: &[S],
        threshold: f64,
    ) -> LowConfidenceReport {
        let mut items: Vec<LowConfidenceMessage> = self
            .analyze_batch(messages)
            .into_iter()
            .filter(|r| r.confidence < threshold)
            .map(|r| LowConfidenceMessage {
                message: r.message,
                intent: r.intent,
                confidence: r.confidence,
            })
            .collect();
        items.sort_by(|a, b| a.confidence.total_cmp(&b.confidence));
        LowConfidenceReport { threshold, items }
    }

    pub fn compare_intents(&self, message: &str, top_n: usize) -> IntentComparison {
        let mut scores = self.bot.classifier().score_all(message);
        // stable: equal scores keep rule-table order
        scores.sort_by(|a, b| b.score.total_cmp(&a.score));
        IntentComparison {
            message: message.to_string(),
            scores,
            top_n,
        }
    }

    /// Writes results as pretty JSON; non-ASCII text is kept verbatim.
    pub fn export_results(&self, results: &[AnalysisResult], path: &Path) -> Result<()> {
        let report = ExportReport {
            generated_at: Utc::now(),
            threshold: self.bot.threshold(),
            total: results.len(),
            results: results.to_vec(),
        };
        let writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(writer, &report)?;
        tracing::info!(path = %path.display(), count = results.len(), "Analysis exported");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::core::KnowledgeBase;
    use crate::nlu::IntentClassifier;

    fn analyzer() -> IntentAnalyzer {
        let classifier = Arc::new(IntentClassifier::new().unwrap());
        IntentAnalyzer::new(Orchestrator::new(classifier, KnowledgeBase::new()))
    }

    fn result(intent: Intent, confidence: f64, passed: bool) -> AnalysisResult {
        AnalysisResult {
            message: String::new(),
            intent,
            confidence,
            threshold_passed: passed,
        }
    }

    #[test]
    fn levels() {
        assert_eq!(ConfidenceLevel::of(1.0), ConfidenceLevel::High);
        assert_eq!(ConfidenceLevel::of(0.7), ConfidenceLevel::High);
        assert_eq!(ConfidenceLevel::of(0.3), ConfidenceLevel::Medium);
        assert_eq!(ConfidenceLevel::of(0.29), ConfidenceLevel::Low);
    }

    #[test]
    fn single_with_preview() {
        let a = analyzer().analyze_single("Halo");
        assert_eq!(a.result.intent, Intent::Greeting);
        assert_eq!(a.level, ConfidenceLevel::High);
        let preview = a.preview.as_deref().unwrap();
        assert!(preview.starts_with("Halo!"));
        assert!(preview.chars().count() <= PREVIEW_CHARS);

        let rendered = a.to_string();
        assert!(rendered.contains("🎯 Intent     : greeting"));
        assert!(rendered.contains("Response Preview"));
    }

    #[test]
    fn single_without_preview_uses_fallback() {
        let a = analyzer().analyze_single("asdkjaslkdj");
        assert!(a.preview.is_none());
        assert!(!a.result.threshold_passed);
        assert!(a.to_string().contains("fallback will be used"));
    }

    #[test]
    fn batch_preserves_order() {
        let msgs = ["Halo", "Terima kasih", "asdkjaslkdj"];
        let results = analyzer().analyze_batch(&msgs);
        let intents: Vec<Intent> = results.iter().map(|r| r.intent).collect();
        assert_eq!(intents, vec![Intent::Greeting, Intent::Thanks, Intent::Unknown]);
        assert_eq!(results[0].message, "Halo");
    }

    #[test]
    fn summary_counts() {
        let results = vec![
            result(Intent::Greeting, 1.0, true),
            result(Intent::Thanks, 0.5, true),
            result(Intent::Thanks, 0.4, true),
            result(Intent::Unknown, 0.0, false),
        ];
        let s = BatchSummary::from_results(&results);
        assert_eq!(s.total, 4);
        assert_eq!(s.intent_distribution[0], (Intent::Thanks, 2));
        // equal counts keep declaration order
        assert_eq!(s.intent_distribution[1], (Intent::Greeting, 1));
        assert_eq!(s.intent_distribution[2], (Intent::Unknown, 1));
        assert_eq!((s.high, s.medium, s.low), (1, 2, 1));
        assert!((s.average_confidence - 0.475).abs() < 1e-9);
        assert_eq!(s.passed, 3);
        assert!(s.to_string().contains("Passed Threshold: 3/4 (75.0%)"));
    }

    #[test]
    fn empty_summary() {
        let s = BatchSummary::from_results(&[]);
        assert_eq!(s.total, 0);
        assert_eq!(s.average_confidence, 0.0);
        assert!(s.to_string().contains("Total Messages: 0"));
    }

    #[test]
    fn low_confidence_sorted_ascending() {
        let msgs = ["Halo", "Tips dong", "asdkjaslkdj", "ekonomi"];
        let report = analyzer().find_low_confidence(&msgs, 0.3);
        let found: Vec<&str> = report.items.iter().map(|i| i.message.as_str()).collect();
        assert!(!found.contains(&"Halo"));
        assert_eq!(found.first(), Some(&"asdkjaslkdj"));
        assert!(report
            .items
            .windows(2)
            .all(|w| w[0].confidence <= w[1].confidence));
    }

    #[test]
    fn low_confidence_none_found() {
        let report = analyzer().find_low_confidence(&["Halo"], 0.3);
        assert!(report.items.is_empty());
        assert!(report.to_string().contains("No low confidence messages found"));
    }

    #[test]
    fn comparison_is_sorted_and_truncated() {
        let cmp = analyzer().compare_intents("apa itu ekonomi sirkular?", 3);
        assert_eq!(cmp.top().len(), 3);
        assert_eq!(cmp.top()[0].intent, Intent::CeDefinition);
        assert!(cmp.scores.windows(2).all(|w| w[0].score >= w[1].score));
        assert_eq!(cmp.scores.len(), Intent::ALL.len() - 1);

        let cmp = analyzer().compare_intents("halo", 100);
        assert_eq!(cmp.top().len(), cmp.scores.len());
        // full confidence → 30 bar cells
        assert!(cmp.to_string().contains(&"█".repeat(30)));
    }

    #[test]
    fn export_round_trip() {
        let analyzer = analyzer();
        let results = analyzer.analyze_batch(SAMPLE_MESSAGES);
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("intent_analysis.json");
        analyzer.export_results(&results, &path).unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.contains("Apa itu ekonomi sirkular?"));
        let report: ExportReport = serde_json::from_str(&raw).unwrap();
        assert_eq!(report.total, SAMPLE_MESSAGES.len());
        assert_eq!(report.results, results);
        assert_eq!(report.threshold, 0.3);
    }
}
