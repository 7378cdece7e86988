//! Unicode whitespace splitting.
//!
//! ```
//! use sentiscope::analysis::tokenizer::Tokenizer;
//! use sentiscope::analysis::tokenizer::whitespace::WhitespaceTokenizer;
//!
//! let words: Vec<_> = WhitespaceTokenizer::new()
//!     .tokenize(" great\tmovie ")
//!     .unwrap()
//!     .map(|t| t.text)
//!     .collect();
//! assert_eq!(words, vec!["great", "movie"]);
//! ```

use super::Tokenizer;
use crate::analysis::token::{Token, TokenStream};
use crate::error::Result;

/// Emits one token per maximal run of non-whitespace characters.
#[derive(Clone, Copy, Debug, Default)]
pub struct WhitespaceTokenizer;

impl WhitespaceTokenizer {
    pub fn new() -> Self {
        WhitespaceTokenizer
    }
}

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let mut tokens = Vec::new();
        let mut start = None;

        for (offset, ch) in text.char_indices().chain(std::iter::once((text.len(), ' '))) {
            match (start, ch.is_whitespace()) {
                (None, false) => start = Some(offset),
                (Some(begin), true) => {
                    let position = tokens.len();
                    tokens.push(Token::with_offsets(&text[begin..offset], position, begin, offset));
                    start = None;
                }
                _ => {}
            }
        }

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "whitespace"
    }
}
