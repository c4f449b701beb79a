// src/graph/rank/pagerank.rs
//! `PageRank` by power iteration.

use serde::Serialize;
use tracing::debug;

use super::diagnostics::{Diagnostic, DiagnosticLog};
use super::google::GoogleMatrix;
use super::vector::RankVector;
use super::{RankOutcome, RankSolver};
use crate::config::RankConfig;
use crate::error::Result;

/// Terminal state of a power-iteration run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SolverStatus {
    Converged,
    /// The iteration cap was hit. The ranks are usable but carry no
    /// convergence guarantee.
    MaxIterationsReached,
}

/// Rank snapshots, starting with the initial uniform vector.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ConvergenceHistory(Vec<RankVector>);

impl ConvergenceHistory {
    fn new(initial: RankVector) -> Self {
        Self(vec![initial])
    }

    fn push(&mut self, snapshot: RankVector) {
        self.0.push(snapshot);
    }

    #[must_use]
    pub fn snapshots(&self) -> &[RankVector] {
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

    /// L1 change between consecutive snapshots; entry `k` is the error of
    /// iteration `k + 1`.
    #[must_use]
    pub fn errors(&self) -> Vec<f64> {
        self.0.windows(2).map(|w| w[1].l1_distance(&w[0])).collect()
    }

    /// Score of `node` across all snapshots.
    #[must_use]
    pub fn trajectory(&self, node: usize) -> Vec<f64> {
        self.0.iter().map(|r| r.score(node)).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PowerResult {
    pub ranks: RankVector,
    pub iterations: usize,
    /// L1 change of the last iteration.
    pub final_delta: f64,
    pub status: SolverStatus,
    pub history: ConvergenceHistory,
}

impl PowerResult {
    #[must_use]
    pub fn converged(&self) -> bool {
        self.status == SolverStatus::Converged
    }
}

impl RankOutcome for PowerResult {
    fn ranks(&self) -> &RankVector {
        &self.ranks
    }
}

/// Repeated `r ← G·r / sum(G·r)` from the uniform vector until the L1
/// change drops below the tolerance.
#[derive(Debug, Clone, Copy, Default)]
pub struct PowerIteration {
    config: RankConfig,
}

impl PowerIteration {
    #[must_use]
    pub fn new(config: RankConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &RankConfig {
        &self.config
    }
}

impl RankSolver for PowerIteration {
    type Output = PowerResult;

    fn solve(&self, google: &GoogleMatrix, log: &mut DiagnosticLog) -> Result<PowerResult> {
        self.config.validate()?;
        let g = google.as_matrix();

        let mut ranks = RankVector::uniform(google.len());
        let mut history = ConvergenceHistory::new(ranks.clone());
        let mut delta = f64::INFINITY;

        for iteration in 1..=self.config.max_iter {
            let product = g * ranks.to_dvector();
            let next = RankVector::normalized(product.iter().copied().collect())?;
            delta = next.l1_distance(&ranks);
            history.push(next.clone());
            ranks = next;

            if delta < self.config.tolerance {
                debug!(iteration, delta, "power iteration converged");
                return Ok(PowerResult {
                    ranks,
                    iterations: iteration,
                    final_delta: delta,
                    status: SolverStatus::Converged,
                    history,
                });
            }
        }

        log.report(Diagnostic::NotConverged {
            iterations: self.config.max_iter,
            final_delta: delta,
        })?;

        Ok(PowerResult {
            ranks,
            iterations: self.config.max_iter,
            final_delta: delta,
            status: SolverStatus::MaxIterationsReached,
            history,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::rank::builder;
    use crate::graph::{Graph, GraphBuilder};

    fn google(graph: &Graph, alpha: f64) -> GoogleMatrix {
        let m = builder::build(graph, &mut DiagnosticLog::default()).unwrap();
        GoogleMatrix::assemble(&m, alpha).unwrap()
    }

    fn triangle() -> Graph {
        let mut b = GraphBuilder::new();
        b.link("a", "b");
        b.link("b", "c");
        b.link("c", "a");
        b.build().unwrap()
    }

    fn star() -> Graph {
        let mut b = GraphBuilder::new();
        b.link_all("hub", &["s1", "s2", "s3"]);
        for s in ["s1", "s2", "s3"] {
            b.link(s, "hub");
        }
        b.build().unwrap()
    }

    #[test]
    fn test_triangle_equal_scores() {
        let result = PowerIteration::default()
            .solve(&google(&triangle(), 0.85), &mut DiagnosticLog::default())
            .unwrap();
        assert!(result.converged());
        for &score in result.ranks.as_slice() {
            assert!((score - 1.0 / 3.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_star_hub_highest() {
        let result = PowerIteration::default()
            .solve(&google(&star(), 0.85), &mut DiagnosticLog::default())
            .unwrap();
        assert_eq!(result.ranks.ranking()[0], 0);
    }

    #[test]
    fn test_history_length_matches_iterations() {
        let result = PowerIteration::default()
            .solve(&google(&star(), 0.85), &mut DiagnosticLog::default())
            .unwrap();
        assert_eq!(result.history.len(), result.iterations + 1);
        assert_eq!(result.history.errors().len(), result.iterations);
        assert_eq!(result.history.snapshots()[0], RankVector::uniform(4));
        let last_error = *result.history.errors().last().unwrap();
        assert!((last_error - result.final_delta).abs() < 1e-18);
    }

    #[test]
    fn test_max_iterations_returns_partial() {
        let solver = PowerIteration::new(RankConfig::default().with_max_iter(1).with_tolerance(1e-300));
        let mut log = DiagnosticLog::default();
        let result = solver.solve(&google(&star(), 0.85), &mut log).unwrap();

        assert_eq!(result.iterations, 1);
        assert_eq!(result.status, SolverStatus::MaxIterationsReached);
        assert_eq!(result.ranks.len(), 4);
        assert!((result.ranks.sum() - 1.0).abs() < 1e-12);
        assert!(matches!(
            log.entries()[0],
            Diagnostic::NotConverged { iterations: 1, .. }
        ));
    }

    #[test]
    fn test_single_node_one_iteration() {
        let g = Graph::unnamed(nalgebra::DMatrix::zeros(1, 1)).unwrap();
        for alpha in [0.1, 0.85, 0.99] {
            let result = PowerIteration::default()
                .solve(&google(&g, alpha), &mut DiagnosticLog::default())
                .unwrap();
            assert_eq!(result.ranks.as_slice(), &[1.0]);
            assert_eq!(result.iterations, 1);
            assert!(result.converged());
        }
    }

    #[test]
    fn test_invalid_config_rejected() {
        let solver = PowerIteration::new(RankConfig::default().with_max_iter(0));
        assert!(solver
            .solve(&google(&star(), 0.85), &mut DiagnosticLog::default())
            .is_err());
    }
}
