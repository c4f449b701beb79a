// src/graph/rank/google.rs
//! Google matrix assembly: `G = α·M + (1 - α)/N · J`.

use nalgebra::DMatrix;

use super::builder::TransitionMatrix;
use crate::config::validate_alpha;
use crate::error::Result;

/// A strictly positive, column-stochastic blend of link-following and
/// uniform teleportation.
#[derive(Debug, Clone, PartialEq)]
pub struct GoogleMatrix {
    matrix: DMatrix<f64>,
    alpha: f64,
}

impl GoogleMatrix {
    /// Blends `transition` with the uniform teleportation matrix.
    ///
    /// # Errors
    /// Returns `InvalidAlpha` if `alpha` is not inside (0, 1).
    #[allow(clippy::cast_precision_loss)]
    pub fn assemble(transition: &TransitionMatrix, alpha: f64) -> Result<Self> {
        validate_alpha(alpha)?;
        let n = transition.len() as f64;
        let teleport = (1.0 - alpha) / n;
        let matrix = transition.as_matrix().map(|p| alpha * p + teleport);
        Ok(Self { matrix, alpha })
    }

    #[must_use]
    pub fn as_matrix(&self) -> &DMatrix<f64> {
        &self.matrix
    }

    #[must_use]
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.matrix.ncols()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matrix.is_empty()
    }
}
