//! # Sentiscope
//!
//! Movie-review sentiment classification: text normalization, three
//! tokenizer variants, a TF-IDF + logistic regression pipeline chosen by
//! cross-validated grid search, and evaluation reports.
//!
//! ## Features
//!
//! - Review normalization (HTML line breaks, lowercasing, punctuation)
//! - Plain, Porter-stemmed and lemmatized tokenization
//! - Deterministic corpus loading from a `train/` + `test/` tree
//! - Parallel k-fold grid search with a deterministic reduction
//! - Accuracy, per-class precision/recall/F1 and a confusion matrix
//! - Checksummed model files

pub mod analysis;
pub mod cli;
pub mod config;
pub mod corpus;
pub mod error;
pub mod ml;

pub mod prelude {
    pub use crate::analysis::{
        TokenizerKind, normalize, tokenize, tokenize_and_lemmatize, tokenize_and_stem,
    };
    pub use crate::corpus::{CorpusLoader, LabeledDataset, Sentiment};
    pub use crate::error::{Result, SentiscopeError};
    pub use crate::ml::{
        EvaluationReport, HyperparameterGrid, ModelSelector, PipelineConfig, SelectorConfig,
        SentimentModel, evaluate,
    };
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
