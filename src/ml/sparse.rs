//! Sparse feature vectors.

use serde::{Deserialize, Serialize};

/// A sparse row of feature weights, indices strictly increasing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SparseVector {
    indices: Vec<usize>,
    values: Vec<f64>,
}

impl SparseVector {
    /// Build a vector from `(index, value)` pairs sorted by index.
    pub fn from_sorted(entries: impl IntoIterator<Item = (usize, f64)>) -> Self {
        let (indices, values) = entries.into_iter().unzip();
        SparseVector { indices, values }
    }

    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of stored entries.
    pub fn nnz(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.indices.iter().copied().zip(self.values.iter().copied())
    }

    /// Dot product with a dense weight vector.
    ///
    /// Entries beyond the end of `dense` contribute nothing.
    pub fn dot(&self, dense: &[f64]) -> f64 {
        self.iter()
            .filter_map(|(i, v)| dense.get(i).map(|w| w * v))
            .sum()
    }

    pub fn norm_squared(&self) -> f64 {
        self.values.iter().map(|v| v * v).sum()
    }

    /// Scale to unit Euclidean length; the zero vector is left alone.
    pub fn normalize(&mut self) {
        let norm = self.norm_squared().sqrt();
        if norm > 0.0 {
            for value in &mut self.values {
                *value /= norm;
            }
        }
    }
}
