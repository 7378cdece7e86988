//! Lemmatizing token filter and lemmatizer implementations.
//!
//! Unlike stemming, lemmatization only ever produces dictionary words: a token
//! is mapped to its lemma when the lexicon knows one, and is left unchanged
//! otherwise.

use std::sync::Arc;

use super::{Filter, rewrite_unstopped};
use crate::analysis::token::TokenStream;
use crate::error::Result;

pub mod lexicon;
pub mod morphy;

pub use morphy::{MorphyLemmatizer, PartOfSpeech};

/// Maps inflected words to their dictionary form.
pub trait Lemmatizer: Send + Sync {
    /// The lemma of `word`, or `word` itself when none is known.
    fn lemmatize(&self, word: &str) -> String;

    fn name(&self) -> &'static str;
}

/// Replaces each token with its lemma; stopped tokens pass through untouched.
#[derive(Clone)]
pub struct LemmaFilter {
    lemmatizer: Arc<dyn Lemmatizer>,
}

impl LemmaFilter {
    /// Lemmatize with the built-in lexicon and detachment rules.
    pub fn new() -> Self {
        Self::with_lemmatizer(Arc::new(MorphyLemmatizer::new()))
    }

    pub fn with_lemmatizer(lemmatizer: Arc<dyn Lemmatizer>) -> Self {
        LemmaFilter { lemmatizer }
    }
}

impl Default for LemmaFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for LemmaFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("LemmaFilter")
            .field(&self.lemmatizer.name())
            .finish()
    }
}

impl Filter for LemmaFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let lemmatizer = Arc::clone(&self.lemmatizer);
        Ok(rewrite_unstopped(tokens, move |word| lemmatizer.lemmatize(word)))
    }

    fn name(&self) -> &'static str {
        "lemma"
    }
}
