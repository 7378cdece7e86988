//! The fitted sentiment pipeline: vectorizer plus classifier.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::corpus::dataset::LabeledDataset;
use crate::corpus::document::Sentiment;
use crate::error::Result;
use crate::ml::grid::PipelineConfig;
use crate::ml::logistic::LogisticRegression;
use crate::ml::persistence;
use crate::ml::tfidf::TfIdfVectorizer;

/// Facts recorded when a model is fitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelMetadata {
    pub trained_at: DateTime<Utc>,
    pub crate_version: String,
    pub n_training_documents: usize,
    pub vocabulary_size: usize,
    pub converged: bool,
    /// Mean cross-validated accuracy of the configuration, when selected by search.
    pub cv_score: Option<f64>,
}

/// A fitted vectorizer and classifier with the configuration that built them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentimentModel {
    pub config: PipelineConfig,
    pub vectorizer: TfIdfVectorizer,
    pub classifier: LogisticRegression,
    pub metadata: ModelMetadata,
}

impl SentimentModel {
    /// Fit a fresh pipeline built from `config` on `dataset`.
    pub fn fit(
        config: &PipelineConfig,
        dataset: &LabeledDataset,
        max_iter: usize,
        tol: f64,
    ) -> Result<Self> {
        let mut vectorizer = TfIdfVectorizer::new(config.vectorizer_config());
        let features = vectorizer.fit_transform(dataset.texts())?;

        let mut classifier = LogisticRegression::new(config.classifier_config(max_iter, tol));
        classifier.fit(&features, dataset.labels(), vectorizer.vocabulary_size())?;

        let metadata = ModelMetadata {
            trained_at: Utc::now(),
            crate_version: crate::VERSION.to_string(),
            n_training_documents: dataset.len(),
            vocabulary_size: vectorizer.vocabulary_size(),
            converged: classifier.converged(),
            cv_score: None,
        };

        Ok(SentimentModel {
            config: config.clone(),
            vectorizer,
            classifier,
            metadata,
        })
    }

    /// Probability that `text` is positive.
    pub fn predict_proba(&self, text: &str) -> Result<f64> {
        let features = self.vectorizer.transform(text)?;
        Ok(self.classifier.predict_proba(&features))
    }

    /// Classify one review.
    pub fn predict(&self, text: &str) -> Result<Sentiment> {
        let features = self.vectorizer.transform(text)?;
        Ok(self.classifier.predict(&features))
    }

    /// Label of one review together with its positive-class probability.
    pub fn classify(&self, text: &str) -> Result<(Sentiment, f64)> {
        let probability = self.predict_proba(text)?;
        Ok((LogisticRegression::label_for(probability), probability))
    }

    /// Classify several reviews, in order.
    pub fn predict_all(&self, texts: &[String]) -> Result<Vec<Sentiment>> {
        let features = self.vectorizer.transform_all(texts)?;
        Ok(self.classifier.predict_all(&features))
    }

    /// Terms with the largest positive and negative weights.
    pub fn top_terms(&self, n: usize) -> (Vec<(String, f64)>, Vec<(String, f64)>) {
        let mut weighted: Vec<(String, f64)> = self
            .vectorizer
            .terms()
            .iter()
            .cloned()
            .zip(self.classifier.weights().iter().copied())
            .filter(|(_, w)| *w != 0.0)
            .collect();
        weighted.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

        let positive = weighted.iter().filter(|(_, w)| *w > 0.0).take(n).cloned().collect();
        let negative = weighted
            .iter()
            .rev()
            .filter(|(_, w)| *w < 0.0)
            .take(n)
            .cloned()
            .collect();
        (positive, negative)
    }

    /// Write the model to `path` as a checksummed artifact.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        persistence::save(path, self)
    }

    /// Read a model written by [`save`](Self::save).
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        persistence::load(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyzer::strategy::TokenizerKind;
    use crate::error::SentiscopeError;
    use tempfile::TempDir;

    fn dataset() -> LabeledDataset {
        LabeledDataset::new(
            vec![
                "awful boring movie".into(),
                "terrible acting awful plot".into(),
                "great fun movie".into(),
                "wonderful great acting".into(),
            ],
            vec![
                Sentiment::Negative,
                Sentiment::Negative,
                Sentiment::Positive,
                Sentiment::Positive,
            ],
        )
        .unwrap()
    }

    fn config() -> PipelineConfig {
        PipelineConfig {
            c: 10.0,
            ..PipelineConfig::default()
        }
    }

    #[test]
    fn test_fit_and_predict() {
        let model = SentimentModel::fit(&config(), &dataset(), 1000, 1e-4).unwrap();

        assert_eq!(model.predict("a great movie").unwrap(), Sentiment::Positive);
        assert_eq!(model.predict("awful, just awful").unwrap(), Sentiment::Negative);
        assert!(model.predict_proba("wonderful").unwrap() > 0.5);
        let (label, probability) = model.classify("boring plot").unwrap();
        assert_eq!(label, Sentiment::Negative);
        assert!(probability < 0.5);
        assert_eq!(model.metadata.n_training_documents, 4);
        assert_eq!(model.metadata.vocabulary_size, model.vectorizer.vocabulary_size());
    }

    #[test]
    fn test_top_terms() {
        let model = SentimentModel::fit(&config(), &dataset(), 1000, 1e-4).unwrap();
        let (positive, negative) = model.top_terms(1);

        assert_eq!(positive[0].0, "great");
        assert_eq!(negative[0].0, "awful");
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("model.bin");
        let config = PipelineConfig {
            tokenizer: TokenizerKind::Stem,
            ..config()
        };
        let model = SentimentModel::fit(&config, &dataset(), 1000, 1e-4).unwrap();
        model.save(&path).unwrap();

        let restored = SentimentModel::load(&path).unwrap();
        assert_eq!(restored.config, model.config);
        assert_eq!(restored.metadata, model.metadata);
        let texts = vec!["great acting".to_string(), "boring plot".to_string()];
        assert_eq!(
            restored.predict_all(&texts).unwrap(),
            model.predict_all(&texts).unwrap()
        );
        assert_eq!(
            restored.predict_proba("great acting").unwrap(),
            model.predict_proba("great acting").unwrap()
        );
    }

    #[test]
    fn test_corrupted_file_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("model.bin");
        let model = SentimentModel::fit(&config(), &dataset(), 1000, 1e-4).unwrap();
        model.save(&path).unwrap();

        let mut bytes = std::fs::read(&path).unwrap();
        let middle = bytes.len() / 2;
        bytes[middle] ^= 0x55;
        std::fs::write(&path, bytes).unwrap();

        assert!(matches!(
            SentimentModel::load(&path),
            Err(SentiscopeError::Storage(_))
        ));
    }
}
