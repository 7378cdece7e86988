//! The unit that flows from a tokenizer through the token filters.

use std::fmt;

/// One word of a review.
///
/// Filters either rewrite `text` (stemming, lemmatization) or flag the token
/// as stopped. The first rewrite saves the tokenizer's form in `original_text`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    /// Index among the tokenizer's output, unaffected by later removals.
    pub position: usize,
    /// Byte span of the word in the text handed to the tokenizer.
    pub start_offset: usize,
    pub end_offset: usize,
    pub stopped: bool,
    pub original_text: Option<String>,
}

impl Token {
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        Self::with_offsets(text, position, 0, 0)
    }

    pub fn with_offsets<S: Into<String>>(
        text: S,
        position: usize,
        start_offset: usize,
        end_offset: usize,
    ) -> Self {
        Token {
            text: text.into(),
            position,
            start_offset,
            end_offset,
            stopped: false,
            original_text: None,
        }
    }

    pub fn stop(self) -> Self {
        Token {
            stopped: true,
            ..self
        }
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// Replace the text. Identical text leaves the token untouched.
    pub fn with_text<S: Into<String>>(mut self, text: S) -> Self {
        let text = text.into();
        if text == self.text {
            return self;
        }
        let previous = std::mem::replace(&mut self.text, text);
        self.original_text.get_or_insert(previous);
        self
    }

    /// The word as the tokenizer produced it.
    pub fn surface(&self) -> &str {
        self.original_text.as_deref().unwrap_or(&self.text)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Boxed iterator passed between pipeline stages.
pub type TokenStream = Box<dyn Iterator<Item = Token>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_token_is_live() {
        let token = Token::new("plot", 4);
        assert_eq!(token.position, 4);
        assert_eq!((token.start_offset, token.end_offset), (0, 0));
        assert!(!token.is_stopped());
        assert_eq!(token.surface(), "plot");
    }

    #[test]
    fn test_rewrites_keep_first_surface() {
        let token = Token::with_offsets("effects", 3, 20, 27).with_text("effect");
        assert_eq!(token.text, "effect");
        assert_eq!(token.surface(), "effects");

        let token = token.with_text("effec");
        assert_eq!(token.surface(), "effects");
    }

    #[test]
    fn test_identity_rewrite() {
        let token = Token::new("good", 0).with_text("good");
        assert_eq!(token.original_text, None);
    }

    #[test]
    fn test_stop_keeps_text() {
        let token = Token::new("the", 1).stop();
        assert!(token.is_stopped());
        assert_eq!(token.to_string(), "the");
    }
}
