//! Stratified k-fold splitting.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::corpus::document::Sentiment;
use crate::error::{Result, SentiscopeError};

/// Train/test indices of one fold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fold {
    pub train: Vec<usize>,
    pub test: Vec<usize>,
}

/// Splits labeled examples into `k` folds that preserve the class balance.
///
/// Examples are dealt to folds round-robin, class by class, so every fold
/// receives the same number of examples of each class give or take one.
/// Without shuffling the split depends only on the label sequence; with
/// shuffling it depends on the label sequence and the seed.
///
/// # Examples
///
/// ```
/// use sentiscope::corpus::Sentiment;
/// use sentiscope::ml::cross_validation::StratifiedKFold;
///
/// let labels = [Sentiment::Negative, Sentiment::Negative, Sentiment::Positive, Sentiment::Positive];
/// let folds = StratifiedKFold::new(2).split(&labels).unwrap();
/// assert_eq!(folds[0].test, vec![0, 2]);
/// assert_eq!(folds[1].test, vec![1, 3]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StratifiedKFold {
    n_splits: usize,
    shuffle: bool,
    seed: u64,
}

impl StratifiedKFold {
    pub fn new(n_splits: usize) -> Self {
        StratifiedKFold {
            n_splits,
            shuffle: false,
            seed: 0,
        }
    }

    /// Shuffle each class with a generator seeded by `seed` before dealing.
    pub fn with_shuffle(mut self, seed: u64) -> Self {
        self.shuffle = true;
        self.seed = seed;
        self
    }

    pub fn n_splits(&self) -> usize {
        self.n_splits
    }

    /// Compute the folds for a label sequence.
    pub fn split(&self, labels: &[Sentiment]) -> Result<Vec<Fold>> {
        let k = self.n_splits;
        if k < 2 {
            return Err(SentiscopeError::invalid_argument(format!(
                "k_folds must be at least 2, got {k}"
            )));
        }
        if labels.len() < k {
            return Err(SentiscopeError::invalid_argument(format!(
                "cannot split {} examples into {k} folds",
                labels.len()
            )));
        }

        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut assignment = vec![0usize; labels.len()];
        let mut next_fold = 0;

        for class in Sentiment::ALL {
            let mut members: Vec<usize> = labels
                .iter()
                .enumerate()
                .filter(|&(_, &label)| label == class)
                .map(|(i, _)| i)
                .collect();
            if !members.is_empty() && members.len() < k {
                log::warn!(
                    "Only {} {} examples for {k} folds; some folds will lack that class",
                    members.len(),
                    class
                );
            }
            if self.shuffle {
                members.shuffle(&mut rng);
            }
            for i in members {
                assignment[i] = next_fold;
                next_fold = (next_fold + 1) % k;
            }
        }

        Ok((0..k)
            .map(|fold| {
                let (test, train): (Vec<usize>, Vec<usize>) =
                    (0..labels.len()).partition(|&i| assignment[i] == fold);
                Fold { train, test }
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(negatives: usize, positives: usize) -> Vec<Sentiment> {
        let mut labels = vec![Sentiment::Negative; negatives];
        labels.extend(vec![Sentiment::Positive; positives]);
        labels
    }

    #[test]
    fn test_folds_partition_the_data() {
        let labels = labels(7, 5);
        let folds = StratifiedKFold::new(3).split(&labels).unwrap();

        let mut seen: Vec<usize> = folds.iter().flat_map(|f| f.test.clone()).collect();
        seen.sort_unstable();
        assert_eq!(seen, (0..12).collect::<Vec<_>>());

        for fold in &folds {
            assert_eq!(fold.train.len() + fold.test.len(), 12);
            assert!(fold.test.iter().all(|i| !fold.train.contains(i)));
        }
    }

    #[test]
    fn test_folds_are_stratified() {
        let labels = labels(10, 10);
        let folds = StratifiedKFold::new(10).split(&labels).unwrap();

        for fold in &folds {
            let positives = fold
                .test
                .iter()
                .filter(|&&i| labels[i] == Sentiment::Positive)
                .count();
            assert_eq!(fold.test.len(), 2);
            assert_eq!(positives, 1);
        }
    }

    #[test]
    fn test_class_counts_differ_by_at_most_one() {
        let labels = labels(8, 5);
        let folds = StratifiedKFold::new(3).split(&labels).unwrap();

        for class in Sentiment::ALL {
            let counts: Vec<usize> = folds
                .iter()
                .map(|f| f.test.iter().filter(|&&i| labels[i] == class).count())
                .collect();
            let max = counts.iter().max().unwrap();
            let min = counts.iter().min().unwrap();
            assert!(max - min <= 1, "{class}: {counts:?}");
        }
    }

    #[test]
    fn test_shuffle_is_seeded() {
        let labels = labels(20, 20);
        let a = StratifiedKFold::new(4).with_shuffle(7).split(&labels).unwrap();
        let b = StratifiedKFold::new(4).with_shuffle(7).split(&labels).unwrap();
        let unshuffled = StratifiedKFold::new(4).split(&labels).unwrap();

        assert_eq!(a, b);
        assert_ne!(a, unshuffled);
    }

    #[test]
    fn test_invalid_splits() {
        assert!(StratifiedKFold::new(1).split(&labels(5, 5)).is_err());
        assert!(StratifiedKFold::new(5).split(&labels(2, 2)).is_err());
    }
}
