// src/experiment/sweep.rs
//! Damping factor sensitivity.

use rayon::prelude::*;
use serde::Serialize;

use crate::config::{DiagnosticPolicy, RankConfig};
use crate::error::Result;
use crate::graph::rank::{Diagnostic, RankEngine, RankVector, SolverStatus};
use crate::graph::Graph;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SweepPoint {
    pub alpha: f64,
    pub iterations: usize,
    pub status: SolverStatus,
    pub ranks: RankVector,
    pub diagnostics: Vec<Diagnostic>,
}

/// Runs power iteration once per damping factor. Points are independent
/// and computed in parallel; the output keeps the order of `alphas`.
///
/// # Errors
/// Returns the first failure, such as an alpha outside (0, 1).
pub fn damping_sweep(
    graph: &Graph,
    base: RankConfig,
    policy: DiagnosticPolicy,
    alphas: &[f64],
) -> Result<Vec<SweepPoint>> {
    alphas
        .par_iter()
        .map(|&alpha| {
            let engine = RankEngine::new(base.with_alpha(alpha), policy);
            let run = engine.power(graph)?;
            Ok(SweepPoint {
                alpha,
                iterations: run.outcome.iterations,
                status: run.outcome.status,
                ranks: run.outcome.ranks,
                diagnostics: run.diagnostics,
            })
        })
        .collect()
}
