//! Binary logistic regression over sparse features.
//!
//! The fitted weights minimise
//!
//! ```text
//! C · Σᵢ logloss(yᵢ, σ(w·xᵢ + b)) + R(w)
//! ```
//!
//! with `R(w) = ½‖w‖²` for [`Penalty::L2`] and `R(w) = ‖w‖₁` for
//! [`Penalty::L1`]. The intercept `b` is not penalised. Larger `C` means
//! weaker regularization.
//!
//! The solver is full-batch proximal gradient descent with a fixed step of
//! `1 / L`, where `L` bounds the Lipschitz constant of the smooth part. L1
//! uses soft-thresholding as the proximal step.

use serde::{Deserialize, Serialize};

use crate::corpus::document::Sentiment;
use crate::error::{Result, SentiscopeError};
use crate::ml::sparse::SparseVector;

/// Regularization penalty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Penalty {
    /// Lasso: sum of absolute weights.
    L1,
    /// Ridge: half the squared Euclidean norm.
    L2,
}

impl std::fmt::Display for Penalty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Penalty::L1 => f.write_str("l1"),
            Penalty::L2 => f.write_str("l2"),
        }
    }
}

impl std::str::FromStr for Penalty {
    type Err = SentiscopeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "l1" => Ok(Penalty::L1),
            "l2" => Ok(Penalty::L2),
            other => Err(SentiscopeError::invalid_argument(format!(
                "unknown penalty '{other}' (expected l1 or l2)"
            ))),
        }
    }
}

/// Solver settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogisticConfig {
    pub penalty: Penalty,
    /// Inverse regularization strength, must be positive.
    pub c: f64,
    pub max_iter: usize,
    /// Stop once no weight moves by more than this in one iteration.
    pub tol: f64,
}

impl Default for LogisticConfig {
    fn default() -> Self {
        LogisticConfig {
            penalty: Penalty::L2,
            c: 1.0,
            max_iter: 1000,
            tol: 1e-4,
        }
    }
}

/// Logistic regression classifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogisticRegression {
    config: LogisticConfig,
    weights: Vec<f64>,
    intercept: f64,
    n_iter: usize,
    converged: bool,
}

impl LogisticRegression {
    pub fn new(config: LogisticConfig) -> Self {
        LogisticRegression {
            config,
            weights: Vec::new(),
            intercept: 0.0,
            n_iter: 0,
            converged: false,
        }
    }

    pub fn config(&self) -> &LogisticConfig {
        &self.config
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// Iterations used by the last fit.
    pub fn n_iter(&self) -> usize {
        self.n_iter
    }

    /// Whether the last fit met the tolerance before `max_iter`.
    pub fn converged(&self) -> bool {
        self.converged
    }

    /// Sigmoid activation function
    fn sigmoid(z: f64) -> f64 {
        if z >= 0.0 {
            1.0 / (1.0 + (-z).exp())
        } else {
            let exp_z = z.exp();
            exp_z / (1.0 + exp_z)
        }
    }

    /// Numerically stable `ln(1 + e^z)`.
    fn softplus(z: f64) -> f64 {
        if z > 0.0 {
            z + (-z).exp().ln_1p()
        } else {
            z.exp().ln_1p()
        }
    }

    fn validate(&self, x: &[SparseVector], y: &[Sentiment]) -> Result<()> {
        let LogisticConfig { c, tol, .. } = self.config;
        if !c.is_finite() || c <= 0.0 {
            return Err(SentiscopeError::invalid_argument(format!(
                "C must be a positive number, got {c}"
            )));
        }
        if !tol.is_finite() || tol <= 0.0 {
            return Err(SentiscopeError::invalid_argument(format!(
                "tol must be a positive number, got {tol}"
            )));
        }
        if x.len() != y.len() {
            return Err(SentiscopeError::alignment(format!(
                "{} feature rows but {} labels",
                x.len(),
                y.len()
            )));
        }
        let positives = y.iter().filter(|&&label| label == Sentiment::Positive).count();
        if positives == 0 || positives == y.len() {
            return Err(SentiscopeError::invalid_argument(
                "training data must contain both classes",
            ));
        }
        Ok(())
    }

    /// Fit the model on feature rows `x` with `n_features` columns.
    pub fn fit(&mut self, x: &[SparseVector], y: &[Sentiment], n_features: usize) -> Result<()> {
        self.validate(x, y)?;

        let LogisticConfig {
            penalty,
            c,
            max_iter,
            tol,
        } = self.config;
        let targets: Vec<f64> = y.iter().map(|label| label.index() as f64).collect();
        let n_samples = x.len() as f64;

        let max_norm = x.iter().map(SparseVector::norm_squared).fold(0.0, f64::max);
        let ridge = if penalty == Penalty::L2 { 1.0 } else { 0.0 };
        let lipschitz = c * n_samples * (max_norm + 1.0) / 4.0 + ridge;
        let step = 1.0 / lipschitz;

        let mut weights = vec![0.0; n_features];
        let mut intercept = 0.0;
        let mut gradient = vec![0.0; n_features];
        self.converged = false;
        self.n_iter = max_iter;

        for iter in 0..max_iter {
            gradient.iter_mut().for_each(|g| *g = 0.0);
            let mut intercept_gradient = 0.0;

            for (row, &target) in x.iter().zip(&targets) {
                let residual = Self::sigmoid(row.dot(&weights) + intercept) - target;
                intercept_gradient += residual;
                for (idx, value) in row.iter() {
                    if idx < n_features {
                        gradient[idx] += residual * value;
                    }
                }
            }

            let mut max_change: f64 = 0.0;
            for (w, g) in weights.iter_mut().zip(&gradient) {
                let updated = match penalty {
                    Penalty::L2 => *w - step * (c * g + *w),
                    Penalty::L1 => soft_threshold(*w - step * c * g, step),
                };
                max_change = max_change.max((updated - *w).abs());
                *w = updated;
            }
            let updated_intercept = intercept - step * c * intercept_gradient;
            max_change = max_change.max((updated_intercept - intercept).abs());
            intercept = updated_intercept;

            if !intercept.is_finite() || weights.iter().any(|w| !w.is_finite()) {
                return Err(SentiscopeError::convergence(format!(
                    "weights diverged at iteration {iter}"
                )));
            }

            if max_change < tol {
                self.converged = true;
                self.n_iter = iter + 1;
                break;
            }
        }

        self.weights = weights;
        self.intercept = intercept;

        let loss = self.objective(x, y);
        if !loss.is_finite() {
            return Err(SentiscopeError::convergence(format!(
                "objective is not finite ({loss})"
            )));
        }

        if self.converged {
            log::debug!(
                "Converged after {} iterations ({penalty}, C={c}, objective {loss:.6})",
                self.n_iter
            );
        } else {
            log::warn!(
                "Did not converge within {max_iter} iterations ({penalty}, C={c}, objective {loss:.6})"
            );
        }

        Ok(())
    }

    /// Penalised training objective at the current weights.
    pub fn objective(&self, x: &[SparseVector], y: &[Sentiment]) -> f64 {
        let log_loss: f64 = x
            .iter()
            .zip(y)
            .map(|(row, label)| {
                let z = self.decision_function(row);
                // -log σ(z) for positives, -log(1 - σ(z)) for negatives
                match label {
                    Sentiment::Positive => Self::softplus(-z),
                    Sentiment::Negative => Self::softplus(z),
                }
            })
            .sum();
        let regularization = match self.config.penalty {
            Penalty::L2 => 0.5 * self.weights.iter().map(|w| w * w).sum::<f64>(),
            Penalty::L1 => self.weights.iter().map(|w| w.abs()).sum::<f64>(),
        };
        self.config.c * log_loss + regularization
    }

    /// Signed distance to the decision boundary.
    pub fn decision_function(&self, x: &SparseVector) -> f64 {
        x.dot(&self.weights) + self.intercept
    }

    /// Probability of the positive class.
    pub fn predict_proba(&self, x: &SparseVector) -> f64 {
        Self::sigmoid(self.decision_function(x))
    }

    /// Class of a positive-class probability: positive from one half up.
    pub fn label_for(probability: f64) -> Sentiment {
        Sentiment::from_bool(probability >= 0.5)
    }

    pub fn predict(&self, x: &SparseVector) -> Sentiment {
        Self::label_for(self.predict_proba(x))
    }

    pub fn predict_all(&self, x: &[SparseVector]) -> Vec<Sentiment> {
        x.iter().map(|row| self.predict(row)).collect()
    }

    /// Number of non-zero weights.
    pub fn n_nonzero(&self) -> usize {
        self.weights.iter().filter(|w| **w != 0.0).count()
    }
}

fn soft_threshold(value: f64, threshold: f64) -> f64 {
    if value > threshold {
        value - threshold
    } else if value < -threshold {
        value + threshold
    } else {
        0.0
    }
}
