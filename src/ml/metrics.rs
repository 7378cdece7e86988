//! Classification metrics and the evaluation report.
//!
//! The confusion matrix follows the usual layout with negative as class 0:
//!
//! ```text
//!                  predicted neg   predicted pos
//! actual neg            TN              FP
//! actual pos            FN              TP
//! ```

use serde::{Deserialize, Serialize};

use crate::corpus::dataset::LabeledDataset;
use crate::corpus::document::Sentiment;
use crate::error::{Result, SentiscopeError};
use crate::ml::model::SentimentModel;

/// 2×2 confusion matrix for binary sentiment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfusionMatrix {
    pub tn: usize,
    pub fp: usize,
    pub fn_: usize,
    pub tp: usize,
}

impl ConfusionMatrix {
    /// Count outcomes of index-aligned actual and predicted labels.
    pub fn from_labels(actual: &[Sentiment], predicted: &[Sentiment]) -> Result<Self> {
        if actual.len() != predicted.len() {
            return Err(SentiscopeError::alignment(format!(
                "{} actual labels but {} predictions",
                actual.len(),
                predicted.len()
            )));
        }

        let mut matrix = ConfusionMatrix::default();
        for (&a, &p) in actual.iter().zip(predicted) {
            match (a, p) {
                (Sentiment::Negative, Sentiment::Negative) => matrix.tn += 1,
                (Sentiment::Negative, Sentiment::Positive) => matrix.fp += 1,
                (Sentiment::Positive, Sentiment::Negative) => matrix.fn_ += 1,
                (Sentiment::Positive, Sentiment::Positive) => matrix.tp += 1,
            }
        }
        Ok(matrix)
    }

    pub fn total(&self) -> usize {
        self.tn + self.fp + self.fn_ + self.tp
    }

    /// Fraction of correct predictions; 0 for an empty matrix.
    pub fn accuracy(&self) -> f64 {
        ratio(self.tp + self.tn, self.total())
    }

    /// Rows indexed by actual class, columns by predicted class.
    pub fn as_rows(&self) -> [[usize; 2]; 2] {
        [[self.tn, self.fp], [self.fn_, self.tp]]
    }

    /// Precision, recall, F1 and support for one class.
    pub fn class_metrics(&self, class: Sentiment) -> ClassMetrics {
        let (true_pos, false_pos, false_neg) = match class {
            Sentiment::Positive => (self.tp, self.fp, self.fn_),
            Sentiment::Negative => (self.tn, self.fn_, self.fp),
        };
        let precision = ratio(true_pos, true_pos + false_pos);
        let recall = ratio(true_pos, true_pos + false_neg);
        let f1 = if precision + recall > 0.0 {
            2.0 * precision * recall / (precision + recall)
        } else {
            0.0
        };
        ClassMetrics {
            precision,
            recall,
            f1,
            support: true_pos + false_neg,
        }
    }

    /// Render the matrix as a text table.
    pub fn render(&self) -> String {
        let width = [self.tn, self.fp, self.fn_, self.tp]
            .iter()
            .map(|n| n.to_string().len())
            .fold("positive".len(), usize::max);
        let mut out = String::new();
        out.push_str(&format!(
            "{:>13} | {:>width$} {:>width$}\n",
            "actual \\ pred", "negative", "positive"
        ));
        out.push_str(&format!("{}\n", "-".repeat(16 + 2 * width + 1)));
        out.push_str(&format!(
            "{:>13} | {:>width$} {:>width$}\n",
            "negative", self.tn, self.fp
        ));
        out.push_str(&format!(
            "{:>13} | {:>width$} {:>width$}\n",
            "positive", self.fn_, self.tp
        ));
        out
    }
}

fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

/// Per-class precision, recall and F1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassMetrics {
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
    /// Number of actual members of the class.
    pub support: usize,
}

/// Scores of a model on a labeled dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationReport {
    pub accuracy: f64,
    pub negative: ClassMetrics,
    pub positive: ClassMetrics,
    /// Unweighted mean of the two classes.
    pub macro_avg: ClassMetrics,
    pub confusion: ConfusionMatrix,
}

impl EvaluationReport {
    /// Score predictions against actual labels.
    pub fn from_labels(actual: &[Sentiment], predicted: &[Sentiment]) -> Result<Self> {
        let confusion = ConfusionMatrix::from_labels(actual, predicted)?;
        let negative = confusion.class_metrics(Sentiment::Negative);
        let positive = confusion.class_metrics(Sentiment::Positive);
        let macro_avg = ClassMetrics {
            precision: (negative.precision + positive.precision) / 2.0,
            recall: (negative.recall + positive.recall) / 2.0,
            f1: (negative.f1 + positive.f1) / 2.0,
            support: negative.support + positive.support,
        };

        Ok(EvaluationReport {
            accuracy: confusion.accuracy(),
            negative,
            positive,
            macro_avg,
            confusion,
        })
    }

    /// Metrics of one class.
    pub fn class(&self, class: Sentiment) -> &ClassMetrics {
        match class {
            Sentiment::Negative => &self.negative,
            Sentiment::Positive => &self.positive,
        }
    }

    /// Render a classification report followed by the confusion matrix.
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "{:>12} {:>9} {:>9} {:>9} {:>9}\n",
            "", "precision", "recall", "f1-score", "support"
        ));
        for (name, m) in [
            ("negative", &self.negative),
            ("positive", &self.positive),
            ("macro avg", &self.macro_avg),
        ] {
            out.push_str(&format!(
                "{:>12} {:>9.4} {:>9.4} {:>9.4} {:>9}\n",
                name, m.precision, m.recall, m.f1, m.support
            ));
        }
        out.push_str(&format!(
            "\n{:>12} {:>9.4} ({} examples)\n\n",
            "accuracy",
            self.accuracy,
            self.confusion.total()
        ));
        out.push_str(&self.confusion.render());
        out
    }
}

/// Score `model` on `dataset`.
pub fn evaluate(model: &SentimentModel, dataset: &LabeledDataset) -> Result<EvaluationReport> {
    let predicted = model.predict_all(dataset.texts())?;
    let report = EvaluationReport::from_labels(dataset.labels(), &predicted)?;
    log::info!(
        "Evaluated {} examples: accuracy {:.4}",
        dataset.len(),
        report.accuracy
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::document::Sentiment::{Negative as N, Positive as P};

    #[test]
    fn test_confusion_matrix_counts() {
        let matrix = ConfusionMatrix::from_labels(&[N, N, P, P], &[N, P, P, P]).unwrap();

        assert_eq!(
            matrix,
            ConfusionMatrix {
                tn: 1,
                fp: 1,
                fn_: 0,
                tp: 2
            }
        );
        assert_eq!(matrix.as_rows(), [[1, 1], [0, 2]]);
        assert_eq!(matrix.accuracy(), 0.75);
    }

    #[test]
    fn test_report_metrics() {
        let report = EvaluationReport::from_labels(&[N, N, P, P], &[N, P, P, P]).unwrap();

        assert_eq!(report.accuracy, 0.75);
        assert!((report.positive.precision - 2.0 / 3.0).abs() < 1e-12);
        assert_eq!(report.positive.recall, 1.0);
        assert!((report.positive.f1 - 0.8).abs() < 1e-12);
        assert_eq!(report.negative.precision, 1.0);
        assert_eq!(report.negative.recall, 0.5);
        assert_eq!(report.negative.support, 2);
        assert!((report.macro_avg.recall - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_zero_division_gives_zero() {
        let report = EvaluationReport::from_labels(&[N, N], &[N, N]).unwrap();

        assert_eq!(report.positive.precision, 0.0);
        assert_eq!(report.positive.recall, 0.0);
        assert_eq!(report.positive.f1, 0.0);
        assert_eq!(report.accuracy, 1.0);

        let empty = EvaluationReport::from_labels(&[], &[]).unwrap();
        assert_eq!(empty.accuracy, 0.0);
    }

    #[test]
    fn test_length_mismatch() {
        let result = ConfusionMatrix::from_labels(&[N, P], &[N]);
        assert!(matches!(result, Err(SentiscopeError::Alignment(_))));
    }

    #[test]
    fn test_render() {
        let report = EvaluationReport::from_labels(&[N, N, P, P], &[N, P, P, P]).unwrap();
        let table = report.confusion.render();

        assert_eq!(table.lines().count(), 4);
        assert!(table.contains("negative"));
        assert!(report.render().contains("accuracy"));
        assert!(report.render().contains("0.7500"));
    }
}
