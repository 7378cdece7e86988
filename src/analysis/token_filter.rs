//! Token filter implementations for token transformation.
//!
//! Filters transform the token streams produced by tokenizers.
//!
//! # Available Filters
//!
//! - [`stop::StopFilter`] - Removes stop words
//! - [`stem::StemFilter`] - Reduces words to their stem form
//! - [`lemma::LemmaFilter`] - Maps words to their dictionary lemma
//!
//! # Filter Chaining
//!
//! ```text
//! Tokenizer → Stop Words → Stemmer | Lemmatizer → Vectorizer
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for filters that transform token streams.
///
/// Filters receive a stream of tokens and produce a new stream, allowing them
/// to rewrite or drop tokens. The trait requires `Send + Sync` to allow use
/// in concurrent contexts.
///
/// # Examples
///
/// ```
/// use sentiscope::analysis::token::{Token, TokenStream};
/// use sentiscope::analysis::token_filter::Filter;
/// use sentiscope::error::Result;
///
/// struct ReverseFilter;
///
/// impl Filter for ReverseFilter {
///     fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
///         let reversed: Vec<Token> = tokens
///             .map(|t| {
///                 let text: String = t.text.chars().rev().collect();
///                 t.with_text(text)
///             })
///             .collect();
///         Ok(Box::new(reversed.into_iter()))
///     }
///
///     fn name(&self) -> &'static str {
///         "reverse"
///     }
/// }
/// ```
pub trait Filter: Send + Sync {
    /// Apply this filter to a token stream.
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream>;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

/// Lazily replace the text of every token that is not stopped.
///
/// `rewrite` is moved into the returned stream, so it must own whatever it
/// uses (typically an `Arc` of the filter's stemmer or lemmatizer).
pub(crate) fn rewrite_unstopped<F>(tokens: TokenStream, rewrite: F) -> TokenStream
where
    F: Fn(&str) -> String + 'static,
{
    Box::new(tokens.map(move |token| {
        if token.is_stopped() {
            token
        } else {
            let text = rewrite(&token.text);
            token.with_text(text)
        }
    }))
}

pub mod lemma;
pub mod stem;
pub mod stop;
