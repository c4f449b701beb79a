// src/graph/rank/builder.rs
//! Transition matrix construction: dead-end resolution and column
//! normalization.

use nalgebra::DMatrix;

use super::diagnostics::{Diagnostic, DiagnosticLog};
use crate::error::Result;
use crate::graph::Graph;

/// Allowed drift of a column sum from 1.
pub const STOCHASTIC_TOLERANCE: f64 = 1e-10;

/// Column-stochastic link-following probabilities.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionMatrix {
    matrix: DMatrix<f64>,
    dead_ends: Vec<usize>,
}

impl TransitionMatrix {
    #[must_use]
    pub fn as_matrix(&self) -> &DMatrix<f64> {
        &self.matrix
    }

    /// Nodes whose empty column was replaced with a uniform one.
    #[must_use]
    pub fn dead_ends(&self) -> &[usize] {
        &self.dead_ends
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

/// Builds the transition matrix of `graph`.
///
/// A column with no links is replaced by all ones (the node links to every
/// node, itself included) before every column is divided by its out-degree.
///
/// # Errors
/// Returns `NonStochastic` if the result fails the column-sum check and the
/// policy is strict.
pub fn build(graph: &Graph, log: &mut DiagnosticLog) -> Result<TransitionMatrix> {
    let mut matrix = graph.adjacency().clone();
    let mut dead_ends = Vec::new();

    for (j, mut column) in matrix.column_iter_mut().enumerate() {
        if column.sum() == 0.0 {
            column.fill(1.0);
            dead_ends.push(j);
        }
        let degree = column.sum();
        column /= degree;
    }

    if !dead_ends.is_empty() {
        log.report(Diagnostic::DeadEndsResolved {
            nodes: dead_ends.clone(),
        })?;
    }

    let deviation = max_column_deviation(&matrix);
    debug_assert!(
        deviation <= STOCHASTIC_TOLERANCE,
        "column sums drifted by {deviation}"
    );
    check_stochastic(&matrix, log)?;

    Ok(TransitionMatrix { matrix, dead_ends })
}

/// Largest `|column sum - 1|` over all columns.
#[must_use]
pub fn max_column_deviation(matrix: &DMatrix<f64>) -> f64 {
    matrix
        .column_iter()
        .map(|c| (c.sum() - 1.0).abs())
        .fold(0.0, f64::max)
}

/// Reports a `NonStochastic` diagnostic if any column sum drifts past
/// [`STOCHASTIC_TOLERANCE`].
///
/// # Errors
/// Returns `NonStochastic` under a strict policy.
pub fn check_stochastic(matrix: &DMatrix<f64>, log: &mut DiagnosticLog) -> Result<()> {
    let max_deviation = max_column_deviation(matrix);
    if max_deviation > STOCHASTIC_TOLERANCE || max_deviation.is_nan() {
        log.report(Diagnostic::NonStochastic { max_deviation })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DiagnosticPolicy;
    use crate::error::RankError;

    fn graph(rows: &[Vec<f64>]) -> Graph {
        Graph::unnamed(DMatrix::from_row_slice(
            rows.len(),
            rows.len(),
            &rows.concat(),
        ))
        .unwrap()
    }

    #[test]
    fn test_columns_divided_by_out_degree() {
        // 0 -> 1, 0 -> 2, 1 -> 0, 2 -> 0
        let g = graph(&[
            vec![0.0, 1.0, 1.0],
            vec![1.0, 0.0, 0.0],
            vec![1.0, 0.0, 0.0],
        ]);
        let mut log = DiagnosticLog::default();
        let m = build(&g, &mut log).unwrap();
        assert_eq!(m.as_matrix()[(1, 0)], 0.5);
        assert_eq!(m.as_matrix()[(2, 0)], 0.5);
        assert_eq!(m.as_matrix()[(0, 1)], 1.0);
        assert!(m.dead_ends().is_empty());
        assert!(log.entries().is_empty());
    }

    #[test]
    fn test_dead_end_column_is_uniform_including_self() {
        let g = graph(&[
            vec![0.0, 0.0, 0.0],
            vec![1.0, 0.0, 0.0],
            vec![0.0, 1.0, 0.0],
        ]);
        let mut log = DiagnosticLog::default();
        let m = build(&g, &mut log).unwrap();
        assert_eq!(m.dead_ends(), &[2]);
        for i in 0..3 {
            assert!((m.as_matrix()[(i, 2)] - 1.0 / 3.0).abs() < 1e-15);
        }
        assert_eq!(
            log.entries(),
            &[Diagnostic::DeadEndsResolved { nodes: vec![2] }]
        );
    }

    #[test]
    fn test_all_dead_ends_become_uniform() {
        let g = graph(&[vec![0.0; 4], vec![0.0; 4], vec![0.0; 4], vec![0.0; 4]]);
        let mut log = DiagnosticLog::default();
        let m = build(&g, &mut log).unwrap();
        assert!(m.as_matrix().iter().all(|&v| (v - 0.25).abs() < 1e-15));
    }

    #[test]
    fn test_check_flags_broken_matrix() {
        let broken = DMatrix::from_row_slice(2, 2, &[0.5, 0.5, 0.4, 0.5]);
        let mut lenient = DiagnosticLog::new(DiagnosticPolicy::lenient());
        check_stochastic(&broken, &mut lenient).unwrap();
        assert!(matches!(
            lenient.entries()[0],
            Diagnostic::NonStochastic { .. }
        ));

        let mut strict = DiagnosticLog::new(DiagnosticPolicy::default());
        let err = check_stochastic(&broken, &mut strict).unwrap_err();
        assert!(matches!(err, RankError::NonStochastic { .. }));
    }
}
