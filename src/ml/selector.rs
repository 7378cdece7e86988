//! Cross-validated grid search over pipeline configurations.
//!
//! Every `(configuration, fold)` pair is an independent task: it builds a
//! fresh vectorizer and classifier from its configuration, fits them on the
//! other folds and scores accuracy on its own fold. Tasks run on a dedicated
//! rayon pool and their results are collected in task order, so the outcome
//! does not depend on the number of threads.

use std::time::Instant;

use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use serde::{Deserialize, Serialize};

use crate::corpus::dataset::LabeledDataset;
use crate::error::{Result, SentiscopeError};
use crate::ml::cross_validation::StratifiedKFold;
use crate::ml::grid::{HyperparameterGrid, PipelineConfig};
use crate::ml::logistic::LogisticConfig;
use crate::ml::metrics::ConfusionMatrix;
use crate::ml::model::SentimentModel;

/// Settings of a [`ModelSelector`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectorConfig {
    pub k_folds: usize,
    /// Shuffle each class before assigning folds.
    pub shuffle: bool,
    pub seed: u64,
    /// Worker threads; defaults to the number of CPUs.
    pub threads: Option<usize>,
    pub max_iter: usize,
    pub tol: f64,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        let classifier = LogisticConfig::default();
        SelectorConfig {
            k_folds: 5,
            shuffle: false,
            seed: 0,
            threads: None,
            max_iter: classifier.max_iter,
            tol: classifier.tol,
        }
    }
}

/// How one configuration fared.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum TrialOutcome {
    Completed {
        fold_scores: Vec<f64>,
        mean: f64,
        std: f64,
    },
    Failed {
        reason: String,
    },
}

/// One configuration of the grid with its cross-validation outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrialResult {
    /// Position in grid enumeration order.
    pub index: usize,
    pub config: PipelineConfig,
    pub outcome: TrialOutcome,
}

impl TrialResult {
    /// Mean fold accuracy of a completed trial.
    pub fn mean_score(&self) -> Option<f64> {
        match self.outcome {
            TrialOutcome::Completed { mean, .. } => Some(mean),
            TrialOutcome::Failed { .. } => None,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self.outcome, TrialOutcome::Failed { .. })
    }
}

/// Outcome of a grid search.
#[derive(Debug, Clone)]
pub struct SelectionResult {
    /// Position of the winner in grid enumeration order.
    pub best_index: usize,
    pub best_config: PipelineConfig,
    pub best_cv_score: f64,
    /// Every trial, in grid enumeration order.
    pub trials: Vec<TrialResult>,
    /// The winning configuration refitted on the whole training set.
    pub model: SentimentModel,
}

/// Index of the trial with the highest mean score.
///
/// Ties go to the earliest trial; failed trials are never picked.
pub fn pick_best(trials: &[TrialResult]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, trial) in trials.iter().enumerate() {
        if let Some(score) = trial.mean_score() {
            match best {
                Some((_, best_score)) if score > best_score => best = Some((i, score)),
                None => best = Some((i, score)),
                _ => {}
            }
        }
    }
    best.map(|(i, _)| i)
}

/// Grid-search model selector.
#[derive(Debug, Clone, Default)]
pub struct ModelSelector {
    config: SelectorConfig,
}

impl ModelSelector {
    pub fn new(config: SelectorConfig) -> Self {
        ModelSelector { config }
    }

    pub fn config(&self) -> &SelectorConfig {
        &self.config
    }

    fn build_pool(&self) -> Result<ThreadPool> {
        let threads = self.config.threads.unwrap_or_else(num_cpus::get).max(1);
        ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|i| format!("sentiscope-cv-{i}"))
            .build()
            .map_err(|e| SentiscopeError::thread_pool(format!("Failed to create thread pool: {e}")))
    }

    fn fold_splitter(&self) -> StratifiedKFold {
        let splitter = StratifiedKFold::new(self.config.k_folds);
        if self.config.shuffle {
            splitter.with_shuffle(self.config.seed)
        } else {
            splitter
        }
    }

    /// Search `grid` on `train` and refit the winner.
    pub fn select(
        &self,
        train: &LabeledDataset,
        grid: &HyperparameterGrid,
    ) -> Result<SelectionResult> {
        let started = Instant::now();
        let configs = grid.configurations()?;
        let trials = self.cross_validate(train, &configs)?;

        let best = pick_best(&trials).ok_or_else(|| {
            let reasons: Vec<String> = trials
                .iter()
                .filter_map(|t| match &t.outcome {
                    TrialOutcome::Failed { reason } => Some(format!("#{}: {reason}", t.index)),
                    TrialOutcome::Completed { .. } => None,
                })
                .take(3)
                .collect();
            SentiscopeError::no_viable_configuration(format!(
                "all {} configurations failed ({})",
                trials.len(),
                reasons.join("; ")
            ))
        })?;

        let best_config = trials[best].config.clone();
        let best_cv_score = trials[best].mean_score().unwrap_or_default();
        log::info!(
            "Best configuration #{best} ({best_config}) with mean CV accuracy {best_cv_score:.4}"
        );

        let mut model =
            SentimentModel::fit(&best_config, train, self.config.max_iter, self.config.tol)?;
        model.metadata.cv_score = Some(best_cv_score);

        log::info!(
            "Model selection finished in {:.2}s",
            started.elapsed().as_secs_f64()
        );

        Ok(SelectionResult {
            best_index: best,
            best_config,
            best_cv_score,
            trials,
            model,
        })
    }

    /// Score every configuration with k-fold cross-validation.
    ///
    /// Trial-local errors mark the trial as failed; any other error aborts.
    pub fn cross_validate(
        &self,
        train: &LabeledDataset,
        configs: &[PipelineConfig],
    ) -> Result<Vec<TrialResult>> {
        let folds = self.fold_splitter().split(train.labels())?;
        let fold_data = folds
            .iter()
            .map(|fold| Ok((train.subset(&fold.train)?, train.subset(&fold.test)?)))
            .collect::<Result<Vec<_>>>()?;

        let k = folds.len();
        let tasks: Vec<(usize, usize)> = (0..configs.len())
            .flat_map(|c| (0..k).map(move |f| (c, f)))
            .collect();

        log::info!(
            "Cross-validating {} configurations x {} folds on {} examples",
            configs.len(),
            k,
            train.len()
        );

        let pool = self.build_pool()?;
        let (max_iter, tol) = (self.config.max_iter, self.config.tol);
        let scores: Vec<Result<f64>> = pool.install(|| {
            tasks
                .par_iter()
                .map(|&(c, f)| {
                    let (fold_train, fold_test) = &fold_data[f];
                    let score = score_fold(&configs[c], fold_train, fold_test, max_iter, tol);
                    match &score {
                        Ok(accuracy) => {
                            log::debug!("config #{c} fold {f}: accuracy {accuracy:.4}")
                        }
                        Err(e) => log::debug!("config #{c} fold {f}: failed: {e}"),
                    }
                    score
                })
                .collect()
        });

        let mut scores = scores.into_iter();
        let mut trials = Vec::with_capacity(configs.len());
        for (index, config) in configs.iter().enumerate() {
            let mut fold_scores = Vec::with_capacity(k);
            let mut failure = None;
            for score in scores.by_ref().take(k) {
                match score {
                    Ok(accuracy) => fold_scores.push(accuracy),
                    Err(e) if e.is_trial_local() => {
                        failure.get_or_insert_with(|| e.to_string());
                    }
                    Err(e) => return Err(e),
                }
            }

            let outcome = match failure {
                Some(reason) => {
                    log::warn!("Configuration #{index} ({config}) failed: {reason}");
                    TrialOutcome::Failed { reason }
                }
                None => {
                    let (mean, std) = mean_std(&fold_scores);
                    log::debug!("Configuration #{index} ({config}): {mean:.4} ± {std:.4}");
                    TrialOutcome::Completed {
                        fold_scores,
                        mean,
                        std,
                    }
                }
            };
            trials.push(TrialResult {
                index,
                config: config.clone(),
                outcome,
            });
        }

        Ok(trials)
    }
}

/// Fit on one fold's training part and return accuracy on its held-out part.
fn score_fold(
    config: &PipelineConfig,
    train: &LabeledDataset,
    test: &LabeledDataset,
    max_iter: usize,
    tol: f64,
) -> Result<f64> {
    let model = SentimentModel::fit(config, train, max_iter, tol)?;
    let predicted = model.predict_all(test.texts())?;
    Ok(ConfusionMatrix::from_labels(test.labels(), &predicted)?.accuracy())
}

/// Population mean and standard deviation.
fn mean_std(values: &[f64]) -> (f64, f64) {
    if values.is_empty() {
        return (0.0, 0.0);
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    (mean, variance.sqrt())
}
