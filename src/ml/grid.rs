//! Hyperparameter grids and the pipeline configurations they enumerate.

use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::strategy::TokenizerKind;
use crate::error::{Result, SentiscopeError};
use crate::ml::logistic::{LogisticConfig, Penalty};
use crate::ml::tfidf::{DocumentFrequency, VectorizerConfig};

/// One point of a hyperparameter grid: everything needed to build a
/// vectorizer and classifier from scratch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineConfig {
    pub tokenizer: TokenizerKind,
    pub penalty: Penalty,
    pub c: f64,
    pub min_df: DocumentFrequency,
    pub max_df: DocumentFrequency,
    pub ngram_range: (usize, usize),
    pub use_idf: bool,
    pub stop_words: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        let vectorizer = VectorizerConfig::default();
        let classifier = LogisticConfig::default();
        PipelineConfig {
            tokenizer: vectorizer.tokenizer,
            penalty: classifier.penalty,
            c: classifier.c,
            min_df: vectorizer.min_df,
            max_df: vectorizer.max_df,
            ngram_range: vectorizer.ngram_range,
            use_idf: vectorizer.use_idf,
            stop_words: vectorizer.stop_words,
        }
    }
}

impl PipelineConfig {
    /// Vectorizer settings of this configuration.
    pub fn vectorizer_config(&self) -> VectorizerConfig {
        VectorizerConfig {
            tokenizer: self.tokenizer,
            stop_words: self.stop_words,
            min_df: self.min_df,
            max_df: self.max_df,
            ngram_range: self.ngram_range,
            use_idf: self.use_idf,
        }
    }

    /// Classifier settings of this configuration.
    pub fn classifier_config(&self, max_iter: usize, tol: f64) -> LogisticConfig {
        LogisticConfig {
            penalty: self.penalty,
            c: self.c,
            max_iter,
            tol,
        }
    }
}

impl std::fmt::Display for PipelineConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "tokenizer={} penalty={} C={} min_df={} max_df={} ngram=({},{}) idf={} stop_words={}",
            self.tokenizer,
            self.penalty,
            self.c,
            self.min_df,
            self.max_df,
            self.ngram_range.0,
            self.ngram_range.1,
            self.use_idf,
            self.stop_words
        )
    }
}

/// Candidate values for every searched option.
///
/// [`configurations`](Self::configurations) enumerates the Cartesian
/// product with fields taken in declaration order and the last field
/// varying fastest.
///
/// # Examples
///
/// ```
/// use sentiscope::ml::grid::HyperparameterGrid;
///
/// let grid = HyperparameterGrid::default();
/// let configs = grid.configurations().unwrap();
/// assert_eq!(configs.len(), grid.len());
/// assert_eq!(configs[0].c, 1.0);
/// assert_eq!(configs[1].c, 10.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HyperparameterGrid {
    pub tokenizer: Vec<TokenizerKind>,
    pub penalty: Vec<Penalty>,
    pub c: Vec<f64>,
    pub min_df: Vec<DocumentFrequency>,
    pub max_df: Vec<DocumentFrequency>,
    pub ngram_range: Vec<(usize, usize)>,
    pub use_idf: Vec<bool>,
    pub stop_words: Vec<bool>,
}

impl Default for HyperparameterGrid {
    fn default() -> Self {
        HyperparameterGrid {
            tokenizer: vec![TokenizerKind::Plain, TokenizerKind::Stem],
            penalty: vec![Penalty::L1, Penalty::L2],
            c: vec![1.0, 10.0, 100.0],
            min_df: vec![DocumentFrequency::Count(1)],
            max_df: vec![DocumentFrequency::Proportion(1.0)],
            ngram_range: vec![(1, 1)],
            use_idf: vec![true],
            stop_words: vec![true],
        }
    }
}

impl HyperparameterGrid {
    /// A grid holding exactly one configuration.
    pub fn single(config: &PipelineConfig) -> Self {
        HyperparameterGrid {
            tokenizer: vec![config.tokenizer],
            penalty: vec![config.penalty],
            c: vec![config.c],
            min_df: vec![config.min_df],
            max_df: vec![config.max_df],
            ngram_range: vec![config.ngram_range],
            use_idf: vec![config.use_idf],
            stop_words: vec![config.stop_words],
        }
    }

    /// Option names with their candidate counts, in enumeration order.
    fn dimensions(&self) -> [(&'static str, usize); 8] {
        [
            ("tokenizer", self.tokenizer.len()),
            ("penalty", self.penalty.len()),
            ("c", self.c.len()),
            ("min_df", self.min_df.len()),
            ("max_df", self.max_df.len()),
            ("ngram_range", self.ngram_range.len()),
            ("use_idf", self.use_idf.len()),
            ("stop_words", self.stop_words.len()),
        ]
    }

    /// Fail if any option has no candidates.
    pub fn validate(&self) -> Result<()> {
        if let Some((name, _)) = self.dimensions().iter().find(|(_, len)| *len == 0) {
            return Err(SentiscopeError::invalid_argument(format!(
                "grid option '{name}' has no candidate values"
            )));
        }
        Ok(())
    }

    /// Number of configurations in the grid.
    pub fn len(&self) -> usize {
        self.dimensions().iter().map(|(_, len)| len).product()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Expand the grid into its configurations in enumeration order.
    pub fn configurations(&self) -> Result<Vec<PipelineConfig>> {
        self.validate()?;

        let mut configs = Vec::with_capacity(self.len());
        for &tokenizer in &self.tokenizer {
            for &penalty in &self.penalty {
                for &c in &self.c {
                    for &min_df in &self.min_df {
                        for &max_df in &self.max_df {
                            for &ngram_range in &self.ngram_range {
                                for &use_idf in &self.use_idf {
                                    for &stop_words in &self.stop_words {
                                        configs.push(PipelineConfig {
                                            tokenizer,
                                            penalty,
                                            c,
                                            min_df,
                                            max_df,
                                            ngram_range,
                                            use_idf,
                                            stop_words,
                                        });
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
        Ok(configs)
    }
}
