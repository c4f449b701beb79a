// src/graph/rank/eigen.rs
//! `PageRank` by direct eigen-decomposition of the Google matrix.
//!
//! Costs O(N³) per call regardless of the graph, against O(N²) per
//! iteration for [`PowerIteration`](super::pagerank::PowerIteration). At
//! small N the difference is immaterial; for large graphs prefer power
//! iteration.

use std::time::{Duration, Instant};

use nalgebra::DMatrix;
use serde::Serialize;
use tracing::debug;

use super::diagnostics::{Diagnostic, DiagnosticLog};
use super::google::GoogleMatrix;
use super::vector::RankVector;
use super::{RankOutcome, RankSolver};
use crate::error::{RankError, Result};

const MAX_SWEEPS: usize = 10_000;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EigenResult {
    pub ranks: RankVector,
    /// Eigenvalue with the largest real part; 1 for a valid Google matrix.
    pub eigenvalue: f64,
    /// `||G·r - λ·r||₂`.
    pub residual: f64,
    /// Wall-clock time of the decomposition, for reporting only.
    pub elapsed: Duration,
}

impl RankOutcome for EigenResult {
    fn ranks(&self) -> &RankVector {
        &self.ranks
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct EigenSolver;

impl EigenSolver {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl RankSolver for EigenSolver {
    type Output = EigenResult;

    fn solve(&self, google: &GoogleMatrix, log: &mut DiagnosticLog) -> Result<EigenResult> {
        let start = Instant::now();
        let g = google.as_matrix();

        let eigenvalue = dominant_eigenvalue(g)?;
        let vector = null_vector(g, eigenvalue)?;
        let ranks = RankVector::normalized(vector.into_iter().map(f64::abs).collect())?;
        let elapsed = start.elapsed();

        let r = ranks.to_dvector();
        let residual = (g * &r - &r * eigenvalue).norm();
        debug!(eigenvalue, residual, ?elapsed, "eigen decomposition done");

        let threshold = log.policy().residual_threshold;
        if residual > threshold || residual.is_nan() {
            log.report(Diagnostic::LargeResidual {
                residual,
                threshold,
            })?;
        }

        Ok(EigenResult {
            ranks,
            eigenvalue,
            residual,
            elapsed,
        })
    }
}

/// Real part of the eigenvalue with the largest real part.
fn dominant_eigenvalue(g: &DMatrix<f64>) -> Result<f64> {
    let schur = nalgebra::Schur::try_new(g.clone(), f64::EPSILON, MAX_SWEEPS)
        .ok_or_else(|| instability("Schur decomposition did not converge"))?;
    schur
        .complex_eigenvalues()
        .iter()
        .map(|z| z.re)
        .filter(|re| re.is_finite())
        .reduce(f64::max)
        .ok_or_else(|| instability("no finite eigenvalue"))
}

/// Unit vector spanning the null space of `G - λI`: the right singular
/// vector of the smallest singular value.
fn null_vector(g: &DMatrix<f64>, eigenvalue: f64) -> Result<Vec<f64>> {
    let n = g.nrows();
    let shifted = g - DMatrix::<f64>::identity(n, n) * eigenvalue;
    let svd = shifted
        .try_svd(false, true, f64::EPSILON, MAX_SWEEPS)
        .ok_or_else(|| instability("SVD did not converge"))?;
    let v_t = svd
        .v_t
        .ok_or_else(|| instability("SVD returned no right singular vectors"))?;

    let smallest = svd
        .singular_values
        .iter()
        .enumerate()
        .min_by(|a, b| a.1.total_cmp(b.1))
        .map(|(i, _)| i)
        .ok_or_else(|| instability("empty spectrum"))?;

    Ok(v_t.row(smallest).iter().copied().collect())
}

fn instability(msg: &str) -> RankError {
    RankError::NumericalInstability(msg.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DiagnosticPolicy;
    use crate::graph::rank::builder;
    use crate::graph::{Graph, GraphBuilder};

    fn google(graph: &Graph, alpha: f64) -> GoogleMatrix {
        let m = builder::build(graph, &mut DiagnosticLog::default()).unwrap();
        GoogleMatrix::assemble(&m, alpha).unwrap()
    }

    fn chain() -> Graph {
        let mut b = GraphBuilder::new();
        b.link("a", "b");
        b.link("b", "c");
        b.link("c", "a");
        b.link("c", "b");
        b.build().unwrap()
    }

    #[test]
    fn test_dominant_eigenvalue_is_one() {
        let result = EigenSolver
            .solve(&google(&chain(), 0.85), &mut DiagnosticLog::default())
            .unwrap();
        assert!((result.eigenvalue - 1.0).abs() < 1e-10);
        assert!(result.residual < 1e-10);
    }

    #[test]
    fn test_ranks_are_distribution() {
        let result = EigenSolver
            .solve(&google(&chain(), 0.85), &mut DiagnosticLog::default())
            .unwrap();
        assert!((result.ranks.sum() - 1.0).abs() < 1e-12);
        assert!(result.ranks.as_slice().iter().all(|&v| v > 0.0));
    }

    #[test]
    fn test_single_node() {
        let g = Graph::unnamed(DMatrix::zeros(1, 1)).unwrap();
        let result = EigenSolver
            .solve(&google(&g, 0.5), &mut DiagnosticLog::default())
            .unwrap();
        assert_eq!(result.ranks.len(), 1);
        assert!((result.ranks[0] - 1.0).abs() < 1e-15);
    }

    #[test]
    fn test_residual_threshold_escalates_when_strict() {
        let mut policy = DiagnosticPolicy::strict();
        policy.residual_threshold = -1.0;
        let mut log = DiagnosticLog::new(policy);
        let err = EigenSolver
            .solve(&google(&chain(), 0.85), &mut log)
            .unwrap_err();
        assert!(matches!(err, RankError::NumericalInstability(_)));
    }

    #[test]
    fn test_residual_threshold_reports_when_lenient() {
        let mut policy = DiagnosticPolicy::lenient();
        policy.residual_threshold = -1.0;
        let mut log = DiagnosticLog::new(policy);
        EigenSolver.solve(&google(&chain(), 0.85), &mut log).unwrap();
        assert!(matches!(
            log.entries().last(),
            Some(Diagnostic::LargeResidual { .. })
        ));
    }
}
