//! Sentiment model training for Sentiscope.
//!
//! The pieces fit together as follows:
//!
//! ```text
//! texts → TfIdfVectorizer → SparseVector rows → LogisticRegression → Sentiment
//! ```
//!
//! [`selector::ModelSelector`] searches a [`grid::HyperparameterGrid`] with
//! stratified k-fold cross-validation and refits the best configuration as a
//! [`model::SentimentModel`], which [`metrics::evaluate`] scores on held-out
//! data.

pub mod cross_validation;
pub mod grid;
pub mod logistic;
pub mod metrics;
pub mod model;
pub mod persistence;
pub mod selector;
pub mod sparse;
pub mod tfidf;

pub use grid::{HyperparameterGrid, PipelineConfig};
pub use logistic::{LogisticConfig, LogisticRegression, Penalty};
pub use metrics::{ClassMetrics, ConfusionMatrix, EvaluationReport, evaluate};
pub use model::{ModelMetadata, SentimentModel};
pub use selector::{ModelSelector, SelectionResult, SelectorConfig, TrialOutcome, TrialResult};
pub use sparse::SparseVector;
pub use tfidf::{DocumentFrequency, TfIdfVectorizer, VectorizerConfig};
