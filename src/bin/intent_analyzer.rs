//! # intent-analyzer — classification debugging CLI
//!
//! ```text
//! intent-analyzer                      interactive menu
//! intent-analyzer "halo" "tips dong"   one batch + summary, then exit
//! ```
//!
//! Menu:
//!
//! ```text
//! 1. Analyze single message
//! 2. Analyze batch messages      (lines until "done")
//! 3. Find low confidence messages
//! 4. Compare all intents
//! 5. Run sample analysis         (optional JSON export)
//! 6. Exit
//! ```

use std::io::{self, BufRead, Write};
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use ecobuddy::analyzer::{BatchSummary, IntentAnalyzer, SAMPLE_MESSAGES};
use ecobuddy::config::{parse_threshold, AnalyzerArgs};
use ecobuddy::core::KnowledgeBase;
use ecobuddy::nlu::IntentClassifier;
use ecobuddy::orchestrator::{Orchestrator, DEFAULT_CONFIDENCE_THRESHOLD};

const DEFAULT_TOP_N: usize = 5;

/// Line-oriented prompt over stdin; `None` on end of input.
struct Console<R> {
    input: R,
}

impl<R: BufRead> Console<R> {
    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        print!("{prompt}");
        io::stdout().flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Single message; blank lines are skipped like end of input.
    fn ask_message(&mut self, prompt: &str) -> Result<Option<String>> {
        Ok(self.ask(prompt)?.filter(|m| !m.is_empty()))
    }

    /// Reads messages until `done` (any case) or end of input.
    fn ask_lines(&mut self) -> Result<Vec<String>> {
        let mut messages = Vec::new();
        while let Some(line) = self.ask("")? {
            if line.eq_ignore_ascii_case("done") {
                break;
            }
            if !line.is_empty() {
                messages.push(line);
            }
        }
        Ok(messages)
    }
}

fn print_menu() {
    let rule = "=".repeat(70);
    println!("\n{rule}");
    println!("🔍 ECOBUDDY INTENT ANALYZER");
    println!("{rule}");
    println!("1. Analyze single message");
    println!("2. Analyze batch messages");
    println!("3. Find low confidence messages");
    println!("4. Compare all intents");
    println!("5. Run sample analysis");
    println!("6. Exit");
    println!("{rule}");
}

fn run_interactive(analyzer: &IntentAnalyzer, export_path: &Path) -> Result<()> {
    let stdin = io::stdin();
    let mut console = Console {
        input: stdin.lock(),
    };

    loop {
        print_menu();
        let Some(choice) = console.ask("\nSelect option (1-6): ")? else {
            break;
        };

        match choice.as_str() {
            "1" => {
                match console.ask_message("\nEnter message: ")? {
                    Some(message) => println!("{}", analyzer.analyze_single(&message)),
                    None => println!("⚠️ No message entered."),
                }
            }
            "2" => {
                println!("\nEnter messages (one per line, type 'done' to finish):");
                let messages = console.ask_lines()?;
                if messages.is_empty() {
                    println!("⚠️ No messages entered.");
                } else {
                    let results = analyzer.analyze_batch(&messages);
                    println!("{}", BatchSummary::from_results(&results));
                }
            }
            "3" => {
                println!("\nEnter messages (one per line, type 'done' to finish):");
                let messages = console.ask_lines()?;
                let raw = console
                    .ask(&format!("Threshold (default {DEFAULT_CONFIDENCE_THRESHOLD}): "))?
                    .unwrap_or_default();
                let threshold = if raw.is_empty() {
                    DEFAULT_CONFIDENCE_THRESHOLD
                } else {
                    match parse_threshold(&raw) {
                        Ok(t) => t,
                        Err(e) => {
                            println!("❌ Invalid threshold: {e}");
                            continue;
                        }
                    }
                };
                println!("{}", analyzer.find_low_confidence(&messages, threshold));
            }
            "4" => {
                let Some(message) = console.ask("\nEnter message: ")? else {
                    break;
                };
                let raw = console
                    .ask(&format!("Top N (default {DEFAULT_TOP_N}): "))?
                    .unwrap_or_default();
                let top_n = raw.parse().unwrap_or(DEFAULT_TOP_N);
                println!("{}", analyzer.compare_intents(&message, top_n));
            }
            "5" => {
                println!("\n🧪 Running sample analysis...");
                let results = analyzer.analyze_batch(SAMPLE_MESSAGES);
                println!("{}", BatchSummary::from_results(&results));

                let answer = console
                    .ask("\nExport results to JSON? (y/n): ")?
                    .unwrap_or_default();
                if answer.eq_ignore_ascii_case("y") {
                    analyzer
                        .export_results(&results, export_path)
                        .with_context(|| format!("failed to export to {}", export_path.display()))?;
                    println!("✅ Results exported to: {}", export_path.display());
                }
            }
            "6" => {
                println!("\n👋 Goodbye!");
                break;
            }
            other => println!("❌ Invalid option: {other}"),
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = AnalyzerArgs::parse();
    ecobuddy::init_tracing(&args.log);

    let classifier =
        Arc::new(IntentClassifier::new().context("failed to compile intent rule table")?);
    let bot = Orchestrator::new(classifier, KnowledgeBase::new()).with_threshold(args.threshold)?;
    let analyzer = IntentAnalyzer::new(bot);

    if args.messages.is_empty() {
        run_interactive(&analyzer, &args.export_path)
    } else {
        let results = analyzer.analyze_batch(&args.messages);
        for result in &results {
            println!(
                "{:.4} | {:25} | {}",
                result.confidence,
                result.intent.as_str(),
                result.message
            );
        }
        println!("{}", BatchSummary::from_results(&results));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>> {
        Console {
            input: Cursor::new(input.as_bytes().to_vec()),
        }
    }

    #[test]
    fn blank_single_message_is_skipped() {
        assert_eq!(console("   \n").ask_message("").unwrap(), None);
        assert_eq!(console("").ask_message("").unwrap(), None);
        assert_eq!(
            console(" Halo \n").ask_message("").unwrap(),
            Some("Halo".to_string())
        );
    }

    #[test]
    fn batch_input_stops_at_done_and_drops_blanks() {
        let mut c = console("Halo\n\nTips dong\nDONE\nignored\n");
        assert_eq!(c.ask_lines().unwrap(), vec!["Halo", "Tips dong"]);
    }
}
