//! Porter stemming as a token filter.

use std::sync::Arc;

use super::{Filter, rewrite_unstopped};
use crate::analysis::token::TokenStream;
use crate::error::Result;

pub mod porter;

pub use porter::PorterStemmer;

/// A suffix-stripping algorithm.
pub trait Stemmer: Send + Sync {
    fn stem(&self, word: &str) -> String;

    fn name(&self) -> &'static str;
}

/// Replaces each token with its stem; stopped tokens pass through untouched.
///
/// The stem may not be a real word (`"movie"` becomes `"movi"`); the token's
/// surface form stays available through [`Token::surface`].
///
/// [`Token::surface`]: crate::analysis::token::Token::surface
#[derive(Clone)]
pub struct StemFilter {
    stemmer: Arc<dyn Stemmer>,
}

impl StemFilter {
    /// Stem with the Porter algorithm.
    pub fn new() -> Self {
        Self::with_stemmer(Arc::new(PorterStemmer::new()))
    }

    pub fn with_stemmer(stemmer: Arc<dyn Stemmer>) -> Self {
        StemFilter { stemmer }
    }

    pub fn stemmer(&self) -> &dyn Stemmer {
        self.stemmer.as_ref()
    }
}

impl Default for StemFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for StemFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("StemFilter").field(&self.stemmer.name()).finish()
    }
}

impl Filter for StemFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let stemmer = Arc::clone(&self.stemmer);
        Ok(rewrite_unstopped(tokens, move |word| stemmer.stem(word)))
    }

    fn name(&self) -> &'static str {
        "stem"
    }
}
