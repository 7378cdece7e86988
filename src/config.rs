//! Experiment configuration.
//!
//! An [`ExperimentConfig`] is read from a JSON file in which every field is
//! optional:
//!
//! ```json
//! {
//!   "corpus_root": "data/aclImdb",
//!   "k_folds": 10,
//!   "threads": 4,
//!   "grid": { "tokenizer": ["lemmatize"], "c": [1.0, 10.0] }
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, SentiscopeError};
use crate::ml::grid::HyperparameterGrid;
use crate::ml::selector::SelectorConfig;

/// Settings of one training run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperimentConfig {
    /// Directory holding `train/` and `test/`.
    pub corpus_root: Option<PathBuf>,
    /// Where the model and report are written.
    pub output_dir: PathBuf,
    pub k_folds: usize,
    pub seed: u64,
    pub shuffle: bool,
    pub threads: Option<usize>,
    pub max_per_class: Option<usize>,
    pub grid: HyperparameterGrid,
    pub max_iter: usize,
    pub tol: f64,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        let selector = SelectorConfig::default();
        ExperimentConfig {
            corpus_root: None,
            output_dir: PathBuf::from("sentiscope-output"),
            k_folds: selector.k_folds,
            seed: selector.seed,
            shuffle: selector.shuffle,
            threads: selector.threads,
            max_per_class: None,
            grid: HyperparameterGrid::default(),
            max_iter: selector.max_iter,
            tol: selector.tol,
        }
    }
}

impl ExperimentConfig {
    /// Read a configuration from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(SentiscopeError::not_found(format!(
                "config file {}",
                path.display()
            )));
        }
        let content = fs::read_to_string(path)?;
        let config: ExperimentConfig = serde_json::from_str(&content).map_err(|e| {
            SentiscopeError::invalid_config(format!("{}: {e}", path.display()))
        })?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Check the values that cannot be caught by deserialization.
    pub fn validate(&self) -> Result<()> {
        if self.k_folds < 2 {
            return Err(SentiscopeError::invalid_config(format!(
                "k_folds must be at least 2, got {}",
                self.k_folds
            )));
        }
        if self.threads == Some(0) {
            return Err(SentiscopeError::invalid_config("threads must be positive"));
        }
        if self.max_per_class == Some(0) {
            return Err(SentiscopeError::invalid_config(
                "max_per_class must be positive",
            ));
        }
        if self.max_iter == 0 {
            return Err(SentiscopeError::invalid_config("max_iter must be positive"));
        }
        if !(self.tol.is_finite() && self.tol > 0.0) {
            return Err(SentiscopeError::invalid_config(format!(
                "tol must be a positive number, got {}",
                self.tol
            )));
        }
        self.grid
            .validate()
            .map_err(|e| SentiscopeError::invalid_config(e.to_string()))
    }

    /// Selector settings of this run.
    pub fn selector_config(&self) -> SelectorConfig {
        SelectorConfig {
            k_folds: self.k_folds,
            shuffle: self.shuffle,
            seed: self.seed,
            threads: self.threads,
            max_iter: self.max_iter,
            tol: self.tol,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyzer::strategy::TokenizerKind;
    use crate::ml::logistic::LogisticConfig;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = ExperimentConfig::default();

        assert_eq!(config.k_folds, 5);
        assert_eq!(config.seed, 0);
        assert!(!config.shuffle);
        assert_eq!(config.grid.len(), 12);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("experiment.json");
        fs::write(
            &path,
            r#"{"k_folds": 10, "threads": 2, "grid": {"tokenizer": ["lemmatize"], "c": [0.5]}}"#,
        )
        .unwrap();

        let config = ExperimentConfig::from_file(&path).unwrap();
        assert_eq!(config.k_folds, 10);
        assert_eq!(config.threads, Some(2));
        assert_eq!(config.grid.tokenizer, vec![TokenizerKind::Lemmatize]);
        assert_eq!(config.grid.c, vec![0.5]);
        assert_eq!(config.grid.penalty.len(), 2);
        assert_eq!(config.max_iter, LogisticConfig::default().max_iter);
    }

    #[test]
    fn test_malformed_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("experiment.json");
        fs::write(&path, r#"{"k_folds": "ten"}"#).unwrap();

        assert!(matches!(
            ExperimentConfig::from_file(&path),
            Err(SentiscopeError::InvalidConfig(_))
        ));
        assert!(matches!(
            ExperimentConfig::from_file(dir.path().join("missing.json")),
            Err(SentiscopeError::NotFound(_))
        ));
    }

    #[test]
    fn test_validate() {
        let config = ExperimentConfig {
            k_folds: 1,
            ..ExperimentConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(SentiscopeError::InvalidConfig(_))
        ));

        let mut config = ExperimentConfig::default();
        config.grid.c.clear();
        let err = config.validate().unwrap_err();
        assert!(matches!(err, SentiscopeError::InvalidConfig(_)));
        assert!(err.to_string().contains("'c'"));

        let config = ExperimentConfig {
            tol: 0.0,
            ..ExperimentConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_selector_config() {
        let config = ExperimentConfig {
            k_folds: 3,
            seed: 42,
            shuffle: true,
            threads: Some(2),
            ..ExperimentConfig::default()
        };
        let selector = config.selector_config();

        assert_eq!(selector.k_folds, 3);
        assert_eq!(selector.seed, 42);
        assert!(selector.shuffle);
        assert_eq!(selector.threads, Some(2));
    }
}
