//! The three tokenizer variants compared by the grid search.
//!
//! | kind        | pipeline                                           |
//! |-------------|----------------------------------------------------|
//! | `plain`     | whitespace split                                   |
//! | `stem`      | whitespace split → Porter stemmer                  |
//! | `lemmatize` | whitespace split → dictionary lemmatizer           |
//!
//! Each variant optionally removes English stop words between the split and
//! the morphological step.
//!
//! # Examples
//!
//! ```
//! use sentiscope::analysis::{TokenizerKind, tokenize, tokenize_and_stem};
//!
//! assert_eq!(tokenize("good effects"), vec!["good", "effects"]);
//! assert_eq!(tokenize_and_stem("good effects"), vec!["good", "effect"]);
//!
//! let kind: TokenizerKind = "lemmatize".parse().unwrap();
//! assert_eq!(kind.tokenize("children"), vec!["child"]);
//! ```

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::analyzer::Analyzer;
use crate::analysis::analyzer::pipeline::PipelineAnalyzer;
use crate::analysis::normalizer::TextNormalizer;
use crate::analysis::token_filter::lemma::LemmaFilter;
use crate::analysis::token_filter::stem::StemFilter;
use crate::analysis::token_filter::stop::StopFilter;
use crate::analysis::tokenizer::whitespace::WhitespaceTokenizer;
use crate::error::{Result, SentiscopeError};

/// Which morphological treatment follows the whitespace split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenizerKind {
    /// Split on whitespace only.
    Plain,
    /// Split, then Porter-stem each token.
    Stem,
    /// Split, then map each token to its dictionary lemma.
    Lemmatize,
}

impl TokenizerKind {
    /// All variants in enumeration order.
    pub const ALL: [TokenizerKind; 3] = [
        TokenizerKind::Plain,
        TokenizerKind::Stem,
        TokenizerKind::Lemmatize,
    ];

    /// Configuration key of this variant.
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenizerKind::Plain => "plain",
            TokenizerKind::Stem => "stem",
            TokenizerKind::Lemmatize => "lemmatize",
        }
    }

    /// Build the token pipeline for already normalized text.
    pub fn analyzer(self, stop_words: bool) -> PipelineAnalyzer {
        let mut analyzer = PipelineAnalyzer::new(Arc::new(WhitespaceTokenizer::new()));
        if stop_words {
            analyzer = analyzer.add_filter(Arc::new(StopFilter::new()));
        }
        analyzer = match self {
            TokenizerKind::Plain => analyzer,
            TokenizerKind::Stem => analyzer.add_filter(Arc::new(StemFilter::new())),
            TokenizerKind::Lemmatize => analyzer.add_filter(Arc::new(LemmaFilter::new())),
        };
        analyzer.with_name(self.as_str())
    }

    /// Build the full pipeline for raw review text, normalization included.
    pub fn review_analyzer(self, stop_words: bool) -> PipelineAnalyzer {
        let normalizer = TextNormalizer::shared();
        PipelineAnalyzer::new(Arc::new(WhitespaceTokenizer::new()))
            .add_char_filters(normalizer.char_filters().iter().cloned())
            .add_filters(self.analyzer(stop_words).filters().iter().cloned())
            .with_name(format!("review_{}", self.as_str()))
    }

    /// Split `text` on whitespace and apply this variant's treatment.
    ///
    /// No stop words are removed, so the output has exactly one token per
    /// whitespace-separated word.
    pub fn tokenize(self, text: &str) -> Vec<String> {
        // Built-in filters never fail.
        self.analyzer(false).terms(text).unwrap_or_default()
    }
}

impl fmt::Display for TokenizerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TokenizerKind {
    type Err = SentiscopeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "plain" => Ok(TokenizerKind::Plain),
            "stem" => Ok(TokenizerKind::Stem),
            "lemmatize" | "lemma" => Ok(TokenizerKind::Lemmatize),
            other => Err(SentiscopeError::invalid_argument(format!(
                "unknown tokenizer '{other}' (expected plain, stem or lemmatize)"
            ))),
        }
    }
}

/// Split on whitespace.
pub fn tokenize(text: &str) -> Vec<String> {
    TokenizerKind::Plain.tokenize(text)
}

/// Split on whitespace, then Porter-stem each token.
pub fn tokenize_and_stem(text: &str) -> Vec<String> {
    TokenizerKind::Stem.tokenize(text)
}

/// Split on whitespace, then lemmatize each token.
pub fn tokenize_and_lemmatize(text: &str) -> Vec<String> {
    TokenizerKind::Lemmatize.tokenize(text)
}
