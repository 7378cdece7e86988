//! Text analysis module for Sentiscope.
//!
//! This module turns raw review text into the token sequences the TF-IDF
//! vectorizer counts:
//!
//! ```text
//! Raw review → Normalizer (char filters) → Tokenizer → Token Filters → tokens
//! ```
//!
//! The [`analyzer::strategy::TokenizerKind`] enum selects one of the three
//! tokenizer variants (plain, stem, lemmatize) by configuration key.

pub mod analyzer;
pub mod char_filter;
pub mod normalizer;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

pub use analyzer::strategy::{TokenizerKind, tokenize, tokenize_and_lemmatize, tokenize_and_stem};
pub use normalizer::{TextNormalizer, normalize};
