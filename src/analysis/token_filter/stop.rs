//! English stop word removal.
//!
//! The built-in list is NLTK's English list without the apostrophe forms,
//! since the normalizer has already split contractions by the time tokens
//! arrive here.
//!
//! ```
//! use sentiscope::analysis::token::Token;
//! use sentiscope::analysis::token_filter::Filter;
//! use sentiscope::analysis::token_filter::stop::StopFilter;
//!
//! let tokens = vec![Token::new("this", 0), Token::new("movie", 1), Token::new("is", 2)];
//! let kept: Vec<_> = StopFilter::new()
//!     .filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .map(|t| t.text)
//!     .collect();
//!
//! assert_eq!(kept, vec!["movie"]);
//! ```

use std::collections::HashSet;
use std::sync::{Arc, LazyLock};

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::error::Result;

const ENGLISH_STOP_WORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "your", "yours",
    "yourself", "yourselves", "he", "him", "his", "himself", "she", "her", "hers", "herself",
    "it", "its", "itself", "they", "them", "their", "theirs", "themselves", "what", "which",
    "who", "whom", "this", "that", "these", "those", "am", "is", "are", "was", "were", "be",
    "been", "being", "have", "has", "had", "having", "do", "does", "did", "doing", "a", "an",
    "the", "and", "but", "if", "or", "because", "as", "until", "while", "of", "at", "by", "for",
    "with", "about", "against", "between", "into", "through", "during", "before", "after",
    "above", "below", "to", "from", "up", "down", "in", "out", "on", "off", "over", "under",
    "again", "further", "then", "once", "here", "there", "when", "where", "why", "how", "all",
    "any", "both", "each", "few", "more", "most", "other", "some", "such", "no", "nor", "not",
    "only", "own", "same", "so", "than", "too", "very", "s", "t", "can", "will", "just", "don",
    "should", "now", "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "couldn", "didn",
    "doesn", "hadn", "hasn", "haven", "isn", "ma", "mightn", "mustn", "needn", "shan",
    "shouldn", "wasn", "weren", "won", "wouldn",
];

static ENGLISH: LazyLock<Arc<HashSet<String>>> = LazyLock::new(|| {
    Arc::new(ENGLISH_STOP_WORDS.iter().map(|w| w.to_string()).collect())
});

/// Drops (or marks) tokens whose text is in a stop word set.
///
/// Tokens that arrive already stopped are passed on as they are.
#[derive(Clone, Debug)]
pub struct StopFilter {
    words: Arc<HashSet<String>>,
    mark_only: bool,
}

impl StopFilter {
    /// The built-in English list.
    pub fn new() -> Self {
        StopFilter {
            words: Arc::clone(&ENGLISH),
            mark_only: false,
        }
    }

    /// A filter over a caller supplied list.
    ///
    /// ```
    /// use sentiscope::analysis::token_filter::stop::StopFilter;
    ///
    /// let filter = StopFilter::from_words(["foo", "bar", "foo"]);
    /// assert_eq!(filter.len(), 2);
    /// assert!(filter.contains("bar"));
    /// ```
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: HashSet<String> = words.into_iter().map(Into::into).collect();
        StopFilter {
            words: Arc::new(words),
            mark_only: false,
        }
    }

    /// Keep stop words in the stream, flagged as stopped, instead of dropping them.
    pub fn mark_only(mut self) -> Self {
        self.mark_only = true;
        self
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for StopFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl Filter for StopFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let words = Arc::clone(&self.words);
        let mark_only = self.mark_only;

        Ok(Box::new(tokens.filter_map(move |token| {
            if token.is_stopped() || !words.contains(&token.text) {
                Some(token)
            } else if mark_only {
                Some(token.stop())
            } else {
                None
            }
        })))
    }

    fn name(&self) -> &'static str {
        "stop"
    }
}
