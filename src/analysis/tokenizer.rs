//! Splitting normalized text into tokens.

use crate::analysis::token::TokenStream;
use crate::error::Result;

pub mod whitespace;

/// Turns a string into a token stream. Shared across grid-search workers.
pub trait Tokenizer: Send + Sync {
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    fn name(&self) -> &'static str;
}
