//! Review text normalization.
//!
//! Raw reviews carry HTML line breaks, entities, punctuation and digits. The
//! normalizer reduces them to lowercase ASCII words separated by single spaces:
//!
//! ```text
//! "I <b>LOVED</b> it!!! 10/10" → "i loved it"
//! ```
//!
//! # Examples
//!
//! ```
//! use sentiscope::analysis::normalizer::normalize;
//!
//! assert_eq!(normalize("Great film.<br /><br />Must-see!"), "great film must see");
//! assert_eq!(normalize(""), "");
//! ```

use std::sync::{Arc, LazyLock};

use crate::analysis::char_filter::CharFilter;
use crate::analysis::char_filter::lowercase::LowercaseCharFilter;
use crate::analysis::char_filter::pattern_replace::PatternReplaceCharFilter;
use crate::error::Result;

/// Markup tags such as `<br />` or `<i>`.
const MARKUP_PATTERN: &str = r"<[^>]*>";

/// Named and numeric HTML entities such as `&amp;` or `&#39;`.
const ENTITY_PATTERN: &str = r"&(?:[a-zA-Z]+|#[0-9]+|#[xX][0-9a-fA-F]+);";

/// Any run of characters that is not a lowercase ASCII letter.
const NON_LETTER_PATTERN: &str = r"[^a-z]+";

static DEFAULT_NORMALIZER: LazyLock<TextNormalizer> = LazyLock::new(TextNormalizer::default);

/// Normalize a raw review with the default char filter chain.
///
/// Lowercases, removes markup and entities, replaces every non-letter run with
/// a single space and trims. The result is idempotent:
/// `normalize(&normalize(s)) == normalize(s)`.
pub fn normalize(raw: &str) -> String {
    DEFAULT_NORMALIZER.normalize(raw)
}

/// An ordered chain of char filters applied to raw review text.
#[derive(Clone)]
pub struct TextNormalizer {
    char_filters: Vec<Arc<dyn CharFilter>>,
}

impl TextNormalizer {
    /// Create the review normalizer.
    pub fn new() -> Result<Self> {
        Ok(Self {
            char_filters: vec![
                Arc::new(PatternReplaceCharFilter::new(MARKUP_PATTERN, " ")?),
                Arc::new(PatternReplaceCharFilter::new(ENTITY_PATTERN, " ")?),
                Arc::new(LowercaseCharFilter::new()),
                Arc::new(PatternReplaceCharFilter::new(NON_LETTER_PATTERN, " ")?),
            ],
        })
    }

    /// The process-wide default normalizer.
    pub fn shared() -> &'static TextNormalizer {
        &DEFAULT_NORMALIZER
    }

    /// Create a normalizer from an explicit char filter chain.
    pub fn with_char_filters(char_filters: Vec<Arc<dyn CharFilter>>) -> Self {
        Self { char_filters }
    }

    /// Get the char filters applied by this normalizer, in order.
    pub fn char_filters(&self) -> &[Arc<dyn CharFilter>] {
        &self.char_filters
    }

    /// Run the chain and trim the result.
    pub fn normalize(&self, raw: &str) -> String {
        let mut text = raw.to_string();
        for char_filter in &self.char_filters {
            text = char_filter.filter(&text);
        }
        text.trim().to_string()
    }
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new().expect("Built-in normalizer patterns should be valid")
    }
}

impl std::fmt::Debug for TextNormalizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<_> = self.char_filters.iter().map(|c| c.name()).collect();
        f.debug_struct("TextNormalizer")
            .field("char_filters", &names)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_and_strips_punctuation() {
        assert_eq!(
            normalize("This Movie is TERRIBLE, but it has some good effects!"),
            "this movie is terrible but it has some good effects"
        );
    }

    #[test]
    fn test_removes_markup() {
        assert_eq!(
            normalize("One of the best.<br /><br />The <i>acting</i> was superb"),
            "one of the best the acting was superb"
        );
    }

    #[test]
    fn test_removes_entities() {
        assert_eq!(normalize("Tom &amp; Jerry&#39;s chase"), "tom jerry s chase");
    }

    #[test]
    fn test_removes_digits_and_collapses_whitespace() {
        assert_eq!(normalize("  rated   10/10 \t\n  loved it "), "rated loved it");
    }

    #[test]
    fn test_non_ascii_letters_become_separators() {
        assert_eq!(normalize("Amélie was charming"), "am lie was charming");
    }

    #[test]
    fn test_empty_and_noise_only() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("<br/> 123 !!! ..."), "");
    }

    #[test]
    fn test_idempotent() {
        let samples = [
            "",
            "Plain text",
            "<p>HTML &quot;quoted&quot;</p> and 42 numbers...",
            "émigré café — naïve",
            "a<b>c</b>d",
            "   spaced     out   ",
            "unterminated < tag here",
        ];
        for sample in samples {
            let once = normalize(sample);
            assert_eq!(normalize(&once), once, "not idempotent for {sample:?}");
        }
    }

    #[test]
    fn test_debug_lists_filters() {
        let normalizer = TextNormalizer::default();
        let debug = format!("{normalizer:?}");
        assert!(debug.contains("pattern_replace"));
        assert!(debug.contains("lowercase"));
    }
}
