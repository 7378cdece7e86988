//! Labeled review corpora.
//!
//! - [`document::ReviewDocument`] - one review with its label
//! - [`dataset::LabeledDataset`] - texts and labels in lock-step
//! - [`loader::CorpusLoader`] - reads the `train/` and `test/` directory tree

pub mod dataset;
pub mod document;
pub mod loader;

pub use dataset::LabeledDataset;
pub use document::{ReviewDocument, Sentiment};
pub use loader::{Corpus, CorpusLoader, LoadStats};
