//! Output formatting for CLI commands.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, SentiscopeArgs};
use crate::corpus::loader::LoadStats;
use crate::error::Result;
use crate::ml::grid::PipelineConfig;
use crate::ml::metrics::EvaluationReport;
use crate::ml::selector::{TrialOutcome, TrialResult};

/// Results that know how to print themselves for a terminal.
pub trait HumanReadable {
    fn to_human(&self) -> String;
}

/// Result structure for a training run; also written as `report.json`.
#[derive(Debug, Serialize, Deserialize)]
pub struct TrainingReport {
    pub corpus_root: String,
    pub train_stats: LoadStats,
    pub test_stats: LoadStats,
    pub k_folds: usize,
    pub best_config: PipelineConfig,
    pub best_cv_score: f64,
    pub trials: Vec<TrialResult>,
    pub test: EvaluationReport,
    pub top_positive_terms: Vec<(String, f64)>,
    pub top_negative_terms: Vec<(String, f64)>,
    pub model_path: String,
    pub duration_ms: u64,
}

/// Result structure for evaluating a saved model.
#[derive(Debug, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub model_path: String,
    pub config: PipelineConfig,
    pub test_stats: LoadStats,
    pub report: EvaluationReport,
}

/// One classified text.
#[derive(Debug, Serialize, Deserialize)]
pub struct Prediction {
    pub text: String,
    pub label: String,
    pub probability_positive: f64,
}

/// Result structure for predictions.
#[derive(Debug, Serialize, Deserialize)]
pub struct PredictionResults {
    pub predictions: Vec<Prediction>,
}

/// Result structure for tokenization.
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenizationResult {
    pub kind: String,
    pub stop_words_removed: bool,
    pub tokens: Vec<String>,
}

impl HumanReadable for TrainingReport {
    fn to_human(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Corpus: {}", self.corpus_root);
        let _ = writeln!(
            out,
            "Documents: {} train ({} skipped), {} test ({} skipped)",
            self.train_stats.loaded,
            self.train_stats.skipped,
            self.test_stats.loaded,
            self.test_stats.skipped
        );
        let _ = writeln!(out);
        let _ = writeln!(out, "Cross-validation ({} folds):", self.k_folds);
        out.push_str(&format_trials(&self.trials));
        let _ = writeln!(out);
        let _ = writeln!(out, "Best configuration: {}", self.best_config);
        let _ = writeln!(out, "Mean CV accuracy: {:.4}", self.best_cv_score);
        let _ = writeln!(out);
        let _ = writeln!(out, "Test split:");
        out.push_str(&self.test.render());
        if !self.top_positive_terms.is_empty() || !self.top_negative_terms.is_empty() {
            let _ = writeln!(out);
            let _ = writeln!(out, "Most positive terms: {}", format_terms(&self.top_positive_terms));
            let _ = writeln!(out, "Most negative terms: {}", format_terms(&self.top_negative_terms));
        }
        let _ = writeln!(out);
        let _ = writeln!(out, "Model written to {}", self.model_path);
        let _ = write!(out, "Total time: {}", format_duration(self.duration_ms));
        out
    }
}

impl HumanReadable for EvaluationResult {
    fn to_human(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Model: {}", self.model_path);
        let _ = writeln!(out, "Configuration: {}", self.config);
        let _ = writeln!(
            out,
            "Test documents: {} ({} skipped)",
            self.test_stats.loaded, self.test_stats.skipped
        );
        let _ = writeln!(out);
        out.push_str(self.report.render().trim_end());
        out
    }
}

impl HumanReadable for PredictionResults {
    fn to_human(&self) -> String {
        self.predictions
            .iter()
            .map(|p| {
                format!(
                    "{:<8} {:.4}  {}",
                    p.label,
                    p.probability_positive,
                    truncate(&p.text, 60)
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl HumanReadable for TokenizationResult {
    fn to_human(&self) -> String {
        format!("{} ({} tokens)", self.tokens.join(" "), self.tokens.len())
    }
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize + HumanReadable>(
    message: &str,
    result: &T,
    args: &SentiscopeArgs,
) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: HumanReadable>(message: &str, result: &T, args: &SentiscopeArgs) -> Result<()> {
    if args.verbosity() > 0 && !message.is_empty() {
        println!("{message}");
        println!();
    }
    println!("{}", result.to_human());
    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &SentiscopeArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

/// One line per trial: index, mean ± std, configuration.
fn format_trials(trials: &[TrialResult]) -> String {
    let mut out = String::new();
    for trial in trials {
        let _ = match &trial.outcome {
            TrialOutcome::Completed { mean, std, .. } => writeln!(
                out,
                "  #{:<3} {:.4} ± {:.4}  {}",
                trial.index, mean, std, trial.config
            ),
            TrialOutcome::Failed { reason } => writeln!(
                out,
                "  #{:<3} failed           {}  ({})",
                trial.index, trial.config, reason
            ),
        };
    }
    out
}

fn format_terms(terms: &[(String, f64)]) -> String {
    terms
        .iter()
        .map(|(term, weight)| format!("{term} ({weight:+.3})"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Format milliseconds as `850ms`, `12.3s` or `4m 05s`.
fn format_duration(ms: u64) -> String {
    if ms < 1000 {
        format!("{ms}ms")
    } else if ms < 60_000 {
        format!("{:.1}s", ms as f64 / 1000.0)
    } else {
        let secs = ms / 1000;
        format!("{}m {:02}s", secs / 60, secs % 60)
    }
}

/// Shorten `text` to at most `max` characters, marking the cut with `...`.
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let kept: String = text.chars().take(max.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}
