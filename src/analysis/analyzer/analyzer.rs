//! Core analyzer trait definition.
//!
//! Analyzers are the complete text processing pipeline between a raw review
//! and the terms counted by the vectorizer:
//!
//! ```text
//! Raw Text → Analyzer → Token Stream → Vectorizer
//!             ↓
//!         Char Filters
//!             ↓
//!         Tokenizer
//!             ↓
//!         Filter 1 … Filter N
//! ```
//!
//! # Examples
//!
//! ```
//! use sentiscope::analysis::analyzer::analyzer::Analyzer;
//! use sentiscope::analysis::token::TokenStream;
//! use sentiscope::error::Result;
//!
//! struct EmptyAnalyzer;
//!
//! impl Analyzer for EmptyAnalyzer {
//!     fn analyze(&self, _text: &str) -> Result<TokenStream> {
//!         Ok(Box::new(std::iter::empty()))
//!     }
//!
//!     fn name(&self) -> &'static str {
//!         "empty"
//!     }
//! }
//!
//! assert_eq!(EmptyAnalyzer.analyze("anything").unwrap().count(), 0);
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for analyzers that convert text into processed tokens.
///
/// The trait requires `Send + Sync` so one analyzer can be shared by every
/// worker of a grid search.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text and return a stream of tokens.
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &'static str;

    /// Analyze the text and collect the surviving terms.
    ///
    /// Stopped tokens are not terms and are left out.
    fn terms(&self, text: &str) -> Result<Vec<String>> {
        Ok(self
            .analyze(text)?
            .filter(|token| !token.is_stopped())
            .map(|token| token.text)
            .collect())
    }
}
