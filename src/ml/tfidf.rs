//! TF-IDF vectorizer for review feature extraction.
//!
//! Each document is analyzed with the configured [`TokenizerKind`], expanded
//! into word n-grams and counted. Term weights are raw counts multiplied by
//! the smoothed inverse document frequency
//!
//! ```text
//! idf(t) = ln((1 + n) / (1 + df(t))) + 1
//! ```
//!
//! and every row is scaled to unit L2 length.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::OnceLock;

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::analyzer::Analyzer;
use crate::analysis::analyzer::pipeline::PipelineAnalyzer;
use crate::analysis::analyzer::strategy::TokenizerKind;
use crate::error::{Result, SentiscopeError};
use crate::ml::sparse::SparseVector;

/// A document-frequency cutoff, absolute or relative to the corpus size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFrequency {
    /// A number of documents.
    Count(usize),
    /// A fraction of the documents, in `[0, 1]`.
    Proportion(f64),
}

impl DocumentFrequency {
    /// Resolve the cutoff to a document count for a corpus of `n_documents`.
    pub fn resolve(&self, n_documents: usize) -> f64 {
        match *self {
            DocumentFrequency::Count(count) => count as f64,
            DocumentFrequency::Proportion(p) => p * n_documents as f64,
        }
    }

    fn validate(&self, name: &str) -> Result<()> {
        if let DocumentFrequency::Proportion(p) = *self {
            if !(0.0..=1.0).contains(&p) {
                return Err(SentiscopeError::invalid_argument(format!(
                    "{name} proportion must be within [0, 1], got {p}"
                )));
            }
        }
        Ok(())
    }
}

impl std::fmt::Display for DocumentFrequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentFrequency::Count(count) => write!(f, "{count}"),
            DocumentFrequency::Proportion(p) => write!(f, "{p}"),
        }
    }
}

/// Settings of a [`TfIdfVectorizer`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VectorizerConfig {
    pub tokenizer: TokenizerKind,
    /// Remove English stop words before stemming or lemmatizing.
    pub stop_words: bool,
    /// Terms in fewer documents than this are dropped.
    pub min_df: DocumentFrequency,
    /// Terms in more documents than this are dropped.
    pub max_df: DocumentFrequency,
    /// Smallest and largest n-gram length.
    pub ngram_range: (usize, usize),
    /// Weight counts by inverse document frequency.
    pub use_idf: bool,
}

impl Default for VectorizerConfig {
    fn default() -> Self {
        VectorizerConfig {
            tokenizer: TokenizerKind::Plain,
            stop_words: false,
            min_df: DocumentFrequency::Count(1),
            max_df: DocumentFrequency::Proportion(1.0),
            ngram_range: (1, 1),
            use_idf: true,
        }
    }
}

impl VectorizerConfig {
    /// Check option values before fitting.
    pub fn validate(&self) -> Result<()> {
        let (lo, hi) = self.ngram_range;
        if lo == 0 || lo > hi {
            return Err(SentiscopeError::invalid_argument(format!(
                "invalid ngram_range ({lo}, {hi})"
            )));
        }
        self.min_df.validate("min_df")?;
        self.max_df.validate("max_df")?;
        Ok(())
    }

    /// Build the analyzer applied to raw reviews.
    pub fn build_analyzer(&self) -> PipelineAnalyzer {
        self.tokenizer.review_analyzer(self.stop_words)
    }
}

/// TF-IDF vectorizer with a sorted, pruned vocabulary.
#[derive(Clone, Serialize, Deserialize)]
pub struct TfIdfVectorizer {
    config: VectorizerConfig,
    /// Vocabulary in index order.
    terms: Vec<String>,
    /// Term -> index mapping.
    vocabulary: HashMap<String, usize>,
    /// Inverse document frequency for each term.
    idf: Vec<f64>,
    /// Number of documents seen during fitting.
    n_documents: usize,
    /// Rebuilt from `config` on first use after deserialization.
    #[serde(skip)]
    analyzer: OnceLock<PipelineAnalyzer>,
}

impl std::fmt::Debug for TfIdfVectorizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TfIdfVectorizer")
            .field("config", &self.config)
            .field("vocabulary_size", &self.vocabulary.len())
            .field("n_documents", &self.n_documents)
            .finish()
    }
}

impl TfIdfVectorizer {
    /// Create an unfitted vectorizer.
    pub fn new(config: VectorizerConfig) -> Self {
        TfIdfVectorizer {
            config,
            terms: Vec::new(),
            vocabulary: HashMap::new(),
            idf: Vec::new(),
            n_documents: 0,
            analyzer: OnceLock::new(),
        }
    }

    pub fn config(&self) -> &VectorizerConfig {
        &self.config
    }

    /// Whether a vocabulary has been learned.
    pub fn is_fitted(&self) -> bool {
        !self.terms.is_empty()
    }

    /// Get the size of the vocabulary.
    pub fn vocabulary_size(&self) -> usize {
        self.terms.len()
    }

    /// Vocabulary terms in feature-index order.
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Feature index of a term.
    pub fn term_index(&self, term: &str) -> Option<usize> {
        self.vocabulary.get(term).copied()
    }

    /// Inverse document frequencies in feature-index order.
    pub fn idf(&self) -> &[f64] {
        &self.idf
    }

    fn analyzer(&self) -> &PipelineAnalyzer {
        self.analyzer.get_or_init(|| self.config.build_analyzer())
    }

    /// Analyze a document into its n-gram terms.
    pub fn document_terms(&self, document: &str) -> Result<Vec<String>> {
        let tokens = self.analyzer().terms(document)?;
        Ok(ngrams(&tokens, self.config.ngram_range))
    }

    /// Fit the vectorizer on training documents.
    pub fn fit(&mut self, documents: &[String]) -> Result<()> {
        let analyzed = self.analyze_all(documents)?;
        self.fit_analyzed(&analyzed)
    }

    /// Fit on `documents` and return their feature vectors.
    pub fn fit_transform(&mut self, documents: &[String]) -> Result<Vec<SparseVector>> {
        let analyzed = self.analyze_all(documents)?;
        self.fit_analyzed(&analyzed)?;
        Ok(analyzed
            .iter()
            .map(|terms| self.vectorize_terms(terms))
            .collect())
    }

    /// Transform a document into a TF-IDF feature vector.
    ///
    /// Terms outside the vocabulary are ignored.
    pub fn transform(&self, document: &str) -> Result<SparseVector> {
        if !self.is_fitted() {
            return Err(SentiscopeError::invalid_argument(
                "vectorizer has not been fitted",
            ));
        }
        let terms = self.document_terms(document)?;
        Ok(self.vectorize_terms(&terms))
    }

    /// Transform several documents.
    pub fn transform_all(&self, documents: &[String]) -> Result<Vec<SparseVector>> {
        documents.iter().map(|doc| self.transform(doc)).collect()
    }

    fn analyze_all(&self, documents: &[String]) -> Result<Vec<Vec<String>>> {
        self.config.validate()?;
        if documents.is_empty() {
            return Err(SentiscopeError::analysis(
                "cannot fit a vectorizer on zero documents",
            ));
        }
        documents
            .iter()
            .map(|doc| self.document_terms(doc))
            .collect()
    }

    fn fit_analyzed(&mut self, analyzed: &[Vec<String>]) -> Result<()> {
        let n_documents = analyzed.len();

        let mut document_frequency: AHashMap<&str, usize> = AHashMap::new();
        for terms in analyzed {
            let unique: HashSet<&str> = terms.iter().map(String::as_str).collect();
            for term in unique {
                *document_frequency.entry(term).or_insert(0) += 1;
            }
        }

        let min_count = self.config.min_df.resolve(n_documents);
        let max_count = self.config.max_df.resolve(n_documents);
        if max_count < min_count {
            return Err(SentiscopeError::invalid_argument(format!(
                "max_df ({}) keeps fewer documents than min_df ({})",
                self.config.max_df, self.config.min_df
            )));
        }

        // BTreeMap gives the sorted term order used for feature indices.
        let kept: BTreeMap<&str, usize> = document_frequency
            .into_iter()
            .filter(|&(_, df)| df as f64 >= min_count && df as f64 <= max_count)
            .collect();

        if kept.is_empty() {
            return Err(SentiscopeError::analysis(format!(
                "empty vocabulary after pruning {n_documents} documents (min_df {}, max_df {})",
                self.config.min_df, self.config.max_df
            )));
        }

        let n = n_documents as f64;
        self.terms = kept.keys().map(|term| term.to_string()).collect();
        self.idf = kept
            .values()
            .map(|&df| ((1.0 + n) / (1.0 + df as f64)).ln() + 1.0)
            .collect();
        self.vocabulary = self
            .terms
            .iter()
            .enumerate()
            .map(|(idx, term)| (term.clone(), idx))
            .collect();
        self.n_documents = n_documents;

        log::debug!(
            "Fitted {} vectorizer: {} terms from {} documents",
            self.config.tokenizer,
            self.terms.len(),
            n_documents
        );

        Ok(())
    }

    fn vectorize_terms(&self, terms: &[String]) -> SparseVector {
        let mut counts: BTreeMap<usize, f64> = BTreeMap::new();
        for term in terms {
            if let Some(&idx) = self.vocabulary.get(term) {
                *counts.entry(idx).or_insert(0.0) += 1.0;
            }
        }

        let use_idf = self.config.use_idf;
        let mut vector = SparseVector::from_sorted(counts.into_iter().map(|(idx, count)| {
            let weight = if use_idf { count * self.idf[idx] } else { count };
            (idx, weight)
        }));
        vector.normalize();
        vector
    }
}

/// Expand tokens into space-joined word n-grams of the given length range.
pub fn ngrams(tokens: &[String], (lo, hi): (usize, usize)) -> Vec<String> {
    if lo == 1 && hi == 1 {
        return tokens.to_vec();
    }
    let mut grams = Vec::new();
    for n in lo..=hi {
        if n == 0 || n > tokens.len() {
            continue;
        }
        grams.extend(tokens.windows(n).map(|window| window.join(" ")));
    }
    grams
}

#[cfg(test)]
mod tests {
    use super::*;

    fn docs(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_tfidf_vectorizer() {
        let documents = docs(&["good movie", "bad movie", "good good acting"]);

        let mut vectorizer = TfIdfVectorizer::new(VectorizerConfig::default());
        vectorizer.fit(&documents).unwrap();

        assert_eq!(vectorizer.terms(), &["acting", "bad", "good", "movie"]);
        assert_eq!(vectorizer.term_index("movie"), Some(3));

        // df(movie) = 2, n = 3
        let expected = (4.0f64 / 3.0).ln() + 1.0;
        assert!((vectorizer.idf()[3] - expected).abs() < 1e-12);
        // df(acting) = 1
        let expected = 2.0f64.ln() + 1.0;
        assert!((vectorizer.idf()[0] - expected).abs() < 1e-12);
    }

    #[test]
    fn test_rows_are_unit_length() {
        let documents = docs(&["Good movie!", "Bad <br/> movie", "good good acting"]);
        let mut vectorizer = TfIdfVectorizer::new(VectorizerConfig::default());
        let rows = vectorizer.fit_transform(&documents).unwrap();

        for row in &rows {
            assert!((row.norm_squared() - 1.0).abs() < 1e-9);
        }
        assert_eq!(rows[2].indices(), &[0, 2]);
    }

    #[test]
    fn test_unknown_terms_ignored() {
        let mut vectorizer = TfIdfVectorizer::new(VectorizerConfig::default());
        vectorizer.fit(&docs(&["good movie", "bad movie"])).unwrap();

        let vector = vectorizer.transform("zxqv qqq").unwrap();
        assert!(vector.is_empty());
    }

    #[test]
    fn test_counts_without_idf() {
        let config = VectorizerConfig {
            use_idf: false,
            ..Default::default()
        };
        let mut vectorizer = TfIdfVectorizer::new(config);
        vectorizer.fit(&docs(&["good movie", "bad movie"])).unwrap();

        let vector = vectorizer.transform("good good movie").unwrap();
        let norm = 5.0f64.sqrt();
        assert!((vector.values()[0] - 2.0 / norm).abs() < 1e-12);
        assert!((vector.values()[1] - 1.0 / norm).abs() < 1e-12);
    }

    #[test]
    fn test_min_df_pruning_and_empty_vocabulary() {
        let config = VectorizerConfig {
            min_df: DocumentFrequency::Count(2),
            ..Default::default()
        };
        let mut vectorizer = TfIdfVectorizer::new(config.clone());
        vectorizer.fit(&docs(&["good movie", "bad movie"])).unwrap();
        assert_eq!(vectorizer.terms(), &["movie"]);

        let mut vectorizer = TfIdfVectorizer::new(config);
        let result = vectorizer.fit(&docs(&["good", "bad"]));
        assert!(matches!(result, Err(SentiscopeError::Analysis(_))));
    }

    #[test]
    fn test_max_df_proportion() {
        let config = VectorizerConfig {
            max_df: DocumentFrequency::Proportion(0.5),
            ..Default::default()
        };
        let mut vectorizer = TfIdfVectorizer::new(config);
        vectorizer.fit(&docs(&["good movie", "bad movie"])).unwrap();
        assert_eq!(vectorizer.terms(), &["bad", "good"]);
    }

    #[test]
    fn test_stop_words_and_stemming() {
        let config = VectorizerConfig {
            tokenizer: TokenizerKind::Stem,
            stop_words: true,
            ..Default::default()
        };
        let mut vectorizer = TfIdfVectorizer::new(config);
        vectorizer
            .fit(&docs(&["This movie is terrible but it has some good effects"]))
            .unwrap();
        assert_eq!(vectorizer.terms(), &["effect", "good", "movi", "terribl"]);
    }

    #[test]
    fn test_ngrams() {
        let tokens = docs(&["not", "good", "at", "all"]);
        assert_eq!(
            ngrams(&tokens, (1, 2)),
            docs(&["not", "good", "at", "all", "not good", "good at", "at all"])
        );
        assert_eq!(ngrams(&tokens, (3, 5)).len(), 3);
        assert!(ngrams(&[], (1, 2)).is_empty());
    }

    #[test]
    fn test_invalid_config() {
        let config = VectorizerConfig {
            ngram_range: (2, 1),
            ..Default::default()
        };
        let mut vectorizer = TfIdfVectorizer::new(config);
        assert!(vectorizer.fit(&docs(&["good"])).is_err());

        let vectorizer = TfIdfVectorizer::new(VectorizerConfig::default());
        assert!(vectorizer.transform("good").is_err());
    }

    #[test]
    fn test_serde_rebuilds_analyzer() {
        let mut vectorizer = TfIdfVectorizer::new(VectorizerConfig {
            tokenizer: TokenizerKind::Lemmatize,
            ..Default::default()
        });
        vectorizer.fit(&docs(&["children love movies", "adults hate movies"])).unwrap();

        let bytes = bincode::serialize(&vectorizer).unwrap();
        let restored: TfIdfVectorizer = bincode::deserialize(&bytes).unwrap();

        assert_eq!(restored.terms(), vectorizer.terms());
        assert_eq!(
            restored.transform("movies").unwrap(),
            vectorizer.transform("movie").unwrap()
        );
    }
}
