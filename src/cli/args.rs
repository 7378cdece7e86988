//! Command line argument parsing for Sentiscope CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::strategy::TokenizerKind;

/// Sentiscope - movie-review sentiment classification
#[derive(Parser, Debug, Clone)]
#[command(name = "sentiscope")]
#[command(about = "Train and apply TF-IDF + logistic regression sentiment models")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct SentiscopeArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl SentiscopeArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1,
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Select a model by cross-validation and evaluate it on the test split
    Train(TrainArgs),

    /// Evaluate a saved model on a corpus test split
    Evaluate(EvaluateArgs),

    /// Classify texts with a saved model
    Predict(PredictArgs),

    /// Show the tokens a tokenizer produces for a text
    Tokenize(TokenizeArgs),
}

/// Arguments for training
#[derive(Parser, Debug, Clone)]
pub struct TrainArgs {
    /// Corpus root holding train/ and test/ (overrides the config file)
    #[arg(value_name = "CORPUS_ROOT")]
    pub corpus_root: Option<PathBuf>,

    /// Experiment configuration file (JSON)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Directory for model.bin and report.json
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Number of cross-validation folds
    #[arg(short = 'k', long)]
    pub folds: Option<usize>,

    /// Shuffle seed; enables shuffling of the folds
    #[arg(long)]
    pub seed: Option<u64>,

    /// Worker threads for cross-validation
    #[arg(short, long)]
    pub threads: Option<usize>,

    /// Read at most this many reviews per class and split
    #[arg(long)]
    pub max_per_class: Option<usize>,
}

/// Arguments for evaluation
#[derive(Parser, Debug, Clone)]
pub struct EvaluateArgs {
    /// Saved model file
    #[arg(value_name = "MODEL")]
    pub model: PathBuf,

    /// Corpus root holding train/ and test/
    #[arg(value_name = "CORPUS_ROOT")]
    pub corpus_root: PathBuf,

    /// Read at most this many reviews per class
    #[arg(long)]
    pub max_per_class: Option<usize>,
}

/// Arguments for prediction
#[derive(Parser, Debug, Clone)]
pub struct PredictArgs {
    /// Saved model file
    #[arg(value_name = "MODEL")]
    pub model: PathBuf,

    /// Texts to classify; read from stdin, one per line, when omitted
    #[arg(value_name = "TEXT")]
    pub texts: Vec<String>,
}

/// Arguments for tokenization
#[derive(Parser, Debug, Clone)]
pub struct TokenizeArgs {
    /// Text to tokenize
    #[arg(value_name = "TEXT")]
    pub text: String,

    /// Tokenizer variant (plain, stem or lemmatize)
    #[arg(long, default_value = "plain")]
    pub kind: TokenizerKind,

    /// Keep English stop words
    #[arg(long)]
    pub keep_stop_words: bool,
}

/// Output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
