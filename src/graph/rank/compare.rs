// src/graph/rank/compare.rs
//! Cross-validation of the two solvers.
//!
//! Both methods must land on the same stationary distribution of a
//! primitive stochastic matrix, so their disagreement is the correctness
//! oracle for either implementation.

use serde::Serialize;

use super::eigen::EigenResult;
use super::pagerank::PowerResult;
use super::vector::RankVector;
use crate::error::{RankError, Result};

/// Agreement bound for two rank vectors: `tolerance` scaled by the larger
/// vector magnitude, never below `tolerance` itself.
#[must_use]
pub fn scaled_tolerance(a: &RankVector, b: &RankVector, tolerance: f64) -> f64 {
    tolerance * a.max_value().max(b.max_value()).max(1.0)
}

/// Checks element-wise agreement and returns the max difference.
///
/// # Errors
/// Returns `SolverDisagreement` when the difference exceeds the scaled
/// tolerance, and `InvalidConfig` for vectors of different length.
pub fn agreement(a: &RankVector, b: &RankVector, tolerance: f64) -> Result<f64> {
    if a.len() != b.len() {
        return Err(RankError::InvalidConfig(format!(
            "cannot compare rank vectors of length {} and {}",
            a.len(),
            b.len()
        )));
    }
    let difference = a.max_abs_difference(b);
    let bound = scaled_tolerance(a, b, tolerance);
    if difference > bound || difference.is_nan() {
        return Err(RankError::SolverDisagreement {
            difference,
            tolerance: bound,
        });
    }
    Ok(difference)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CrossValidation {
    pub power: PowerResult,
    pub eigen: EigenResult,
    pub max_difference: f64,
}
