//! Index-aligned review texts and labels.

use serde::{Deserialize, Serialize};

use crate::corpus::document::{ReviewDocument, Sentiment};
use crate::error::{Result, SentiscopeError};

/// Review texts and their labels, kept in lock-step.
///
/// The text at index `i` always carries the label at index `i`; construction
/// refuses sequences of different lengths.
///
/// # Examples
///
/// ```
/// use sentiscope::corpus::{LabeledDataset, Sentiment};
///
/// let dataset = LabeledDataset::new(
///     vec!["loved it".to_string(), "hated it".to_string()],
///     vec![Sentiment::Positive, Sentiment::Negative],
/// )
/// .unwrap();
/// assert_eq!(dataset.len(), 2);
/// assert_eq!(dataset.class_counts(), [1, 1]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "DatasetParts")]
pub struct LabeledDataset {
    texts: Vec<String>,
    labels: Vec<Sentiment>,
}

/// Unchecked wire form; deserialization goes through [`LabeledDataset::new`].
#[derive(Deserialize)]
struct DatasetParts {
    texts: Vec<String>,
    labels: Vec<Sentiment>,
}

impl TryFrom<DatasetParts> for LabeledDataset {
    type Error = SentiscopeError;

    fn try_from(parts: DatasetParts) -> Result<Self> {
        LabeledDataset::new(parts.texts, parts.labels)
    }
}

impl LabeledDataset {
    /// Pair texts with labels, failing if their counts differ.
    pub fn new(texts: Vec<String>, labels: Vec<Sentiment>) -> Result<Self> {
        if texts.len() != labels.len() {
            return Err(SentiscopeError::alignment(format!(
                "{} texts but {} labels",
                texts.len(),
                labels.len()
            )));
        }
        Ok(LabeledDataset { texts, labels })
    }

    /// Build a dataset from loaded documents, keeping their order.
    pub fn from_documents(documents: Vec<ReviewDocument>) -> Self {
        let (texts, labels) = documents.into_iter().map(|d| (d.text, d.label)).unzip();
        LabeledDataset { texts, labels }
    }

    pub fn len(&self) -> usize {
        self.texts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.texts.is_empty()
    }

    pub fn texts(&self) -> &[String] {
        &self.texts
    }

    pub fn labels(&self) -> &[Sentiment] {
        &self.labels
    }

    /// Select the examples at `indices`, in the given order.
    pub fn subset(&self, indices: &[usize]) -> Result<Self> {
        let mut texts = Vec::with_capacity(indices.len());
        let mut labels = Vec::with_capacity(indices.len());
        for &i in indices {
            if i >= self.len() {
                return Err(SentiscopeError::invalid_argument(format!(
                    "index {i} out of range for dataset of {} examples",
                    self.len()
                )));
            }
            texts.push(self.texts[i].clone());
            labels.push(self.labels[i]);
        }
        Ok(LabeledDataset { texts, labels })
    }

    /// Number of examples per class, indexed by [`Sentiment::index`].
    pub fn class_counts(&self) -> [usize; 2] {
        let mut counts = [0; 2];
        for label in &self.labels {
            counts[label.index()] += 1;
        }
        counts
    }

    /// Iterate over `(text, label)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Sentiment)> + '_ {
        self.texts
            .iter()
            .map(String::as_str)
            .zip(self.labels.iter().copied())
    }
}
