// src/graph/rank/vector.rs
//! The stationary distribution produced by a solver.

use std::cmp::Ordering;
use std::ops::Index;

use nalgebra::DVector;
use serde::Serialize;

use crate::error::{RankError, Result};

/// Non-negative scores summing to 1, indexed by node.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RankVector(Vec<f64>);

impl RankVector {
    /// The uniform distribution over `n` nodes.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn uniform(n: usize) -> Self {
        Self(vec![1.0 / n as f64; n])
    }

    /// Divides `values` by their sum.
    ///
    /// # Errors
    /// Returns `NumericalInstability` if the sum is zero or not finite.
    pub fn normalized(values: Vec<f64>) -> Result<Self> {
        let sum: f64 = values.iter().sum();
        if !sum.is_finite() || sum <= 0.0 {
            return Err(RankError::NumericalInstability(format!(
                "cannot normalize vector with sum {sum}"
            )));
        }
        Ok(Self(values.into_iter().map(|v| v / sum).collect()))
    }

    pub(crate) fn to_dvector(&self) -> DVector<f64> {
        DVector::from_column_slice(&self.0)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn sum(&self) -> f64 {
        self.0.iter().sum()
    }

    /// Score of `node`, or 0 when out of range.
    #[must_use]
    pub fn score(&self, node: usize) -> f64 {
        self.0.get(node).copied().unwrap_or(0.0)
    }

    /// Node indices by descending score; ties keep index order.
    #[must_use]
    pub fn ranking(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.0.len()).collect();
        order.sort_by(|&a, &b| {
            self.0[b]
                .partial_cmp(&self.0[a])
                .unwrap_or(Ordering::Equal)
                .then(a.cmp(&b))
        });
        order
    }

    /// Top `n` nodes by score.
    #[must_use]
    pub fn top_n(&self, n: usize) -> Vec<(usize, f64)> {
        self.ranking()
            .into_iter()
            .take(n)
            .map(|i| (i, self.0[i]))
            .collect()
    }

    /// `||self - other||_1`.
    #[must_use]
    pub fn l1_distance(&self, other: &Self) -> f64 {
        self.0
            .iter()
            .zip(&other.0)
            .map(|(a, b)| (a - b).abs())
            .sum()
    }

    /// Largest element-wise absolute difference.
    #[must_use]
    pub fn max_abs_difference(&self, other: &Self) -> f64 {
        self.0
            .iter()
            .zip(&other.0)
            .map(|(a, b)| (a - b).abs())
            .fold(0.0, f64::max)
    }

    #[must_use]
    pub fn max_value(&self) -> f64 {
        self.0.iter().copied().fold(0.0, f64::max)
    }
}

impl Index<usize> for RankVector {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.0[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalized_sums_to_one() {
        let v = RankVector::normalized(vec![1.0, 3.0]).unwrap();
        assert_eq!(v.as_slice(), &[0.25, 0.75]);
    }

    #[test]
    fn test_zero_sum_is_rejected() {
        let err = RankVector::normalized(vec![0.0, 0.0]).unwrap_err();
        assert!(matches!(err, RankError::NumericalInstability(_)));
    }

    #[test]
    fn test_nan_is_rejected() {
        assert!(RankVector::normalized(vec![f64::NAN, 1.0]).is_err());
    }

    #[test]
    fn test_ranking_breaks_ties_by_index() {
        let v = RankVector::normalized(vec![0.2, 0.4, 0.2, 0.2]).unwrap();
        assert_eq!(v.ranking(), vec![1, 0, 2, 3]);
        assert_eq!(v.top_n(2)[0].0, 1);
    }

    #[test]
    fn test_distances() {
        let a = RankVector::normalized(vec![0.5, 0.5]).unwrap();
        let b = RankVector::normalized(vec![0.25, 0.75]).unwrap();
        assert!((a.l1_distance(&b) - 0.5).abs() < 1e-15);
        assert!((a.max_abs_difference(&b) - 0.25).abs() < 1e-15);
    }
}
