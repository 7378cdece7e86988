//! Review documents and sentiment labels.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SentiscopeError};

/// Binary sentiment label. Negative is class 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Negative = 0,
    Positive = 1,
}

impl Sentiment {
    /// Both classes in class-index order.
    pub const ALL: [Sentiment; 2] = [Sentiment::Negative, Sentiment::Positive];

    /// Class index used by the classifier (0 or 1).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Label for a class index; anything non-zero is positive.
    pub fn from_index(index: usize) -> Self {
        if index == 0 {
            Sentiment::Negative
        } else {
            Sentiment::Positive
        }
    }

    /// Label for a boolean prediction.
    pub fn from_bool(positive: bool) -> Self {
        if positive {
            Sentiment::Positive
        } else {
            Sentiment::Negative
        }
    }

    /// Short name, as used for class directories.
    pub fn as_str(self) -> &'static str {
        match self {
            Sentiment::Negative => "neg",
            Sentiment::Positive => "pos",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sentiment::Negative => f.write_str("negative"),
            Sentiment::Positive => f.write_str("positive"),
        }
    }
}

impl FromStr for Sentiment {
    type Err = SentiscopeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "neg" | "negative" | "0" => Ok(Sentiment::Negative),
            "pos" | "positive" | "1" => Ok(Sentiment::Positive),
            other => Err(SentiscopeError::parse(format!("unknown sentiment '{other}'"))),
        }
    }
}

/// A single labeled review as read from disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewDocument {
    pub text: String,
    pub label: Sentiment,
    /// Star rating encoded in an `<id>_<rating>.txt` file name.
    pub rating: Option<u8>,
    pub source: PathBuf,
}

impl ReviewDocument {
    /// Create a document, reading the rating from the source file name.
    pub fn new<S: Into<String>, P: Into<PathBuf>>(text: S, label: Sentiment, source: P) -> Self {
        let source = source.into();
        let rating = parse_rating(&source);
        ReviewDocument {
            text: text.into(),
            label,
            rating,
            source,
        }
    }
}

/// Parse the rating from a file name such as `1234_8.txt`.
pub fn parse_rating(path: &Path) -> Option<u8> {
    let stem = path.file_stem()?.to_str()?;
    let (_, rating) = stem.rsplit_once('_')?;
    rating.parse().ok()
}
