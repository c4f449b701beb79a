// src/experiment/mod.rs
//! The full ranking experiment: structure, both solvers, ranking table,
//! damping sweep, convergence and degree correlation.

pub mod export;
pub mod stats;
pub mod sweep;

pub use stats::{pearson, NetworkSummary, PageStats};
pub use sweep::{damping_sweep, SweepPoint};

use serde::Serialize;
use tracing::info;

use crate::config::Config;
use crate::error::Result;
use crate::graph::rank::queries::{ranked_nodes, RankedNode};
use crate::graph::rank::{CrossValidation, Diagnostic, RankEngine};
use crate::graph::Graph;

/// Iterations whose error is always reported when present.
const CHECKPOINTS: &[usize] = &[1, 10, 20];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConvergenceAnalysis {
    /// L1 error per iteration, starting at iteration 1.
    pub errors: Vec<f64>,
    /// `(iteration, error)` at the fixed checkpoints and the final iteration.
    pub checkpoints: Vec<(usize, f64)>,
}

impl ConvergenceAnalysis {
    #[must_use]
    pub fn from_errors(errors: Vec<f64>) -> Self {
        let mut checkpoints: Vec<(usize, f64)> = CHECKPOINTS
            .iter()
            .filter(|&&it| it <= errors.len())
            .map(|&it| (it, errors[it - 1]))
            .collect();
        if let Some(&last) = errors.last() {
            if checkpoints.last().map(|c| c.0) != Some(errors.len()) {
                checkpoints.push((errors.len(), last));
            }
        }
        Self {
            errors,
            checkpoints,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DegreeCorrelation {
    pub in_degree: Option<f64>,
    pub out_degree: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExperimentReport {
    pub network: NetworkSummary,
    pub baseline: CrossValidation,
    pub ranking: Vec<RankedNode>,
    pub sweep: Vec<SweepPoint>,
    pub convergence: ConvergenceAnalysis,
    pub correlation: DegreeCorrelation,
    pub diagnostics: Vec<Diagnostic>,
}

/// Runs every experiment on `graph`.
///
/// # Errors
/// Returns an error for invalid configuration, an escalated diagnostic, or
/// solver disagreement.
pub fn run(graph: &Graph, config: &Config) -> Result<ExperimentReport> {
    config.validate()?;
    let engine = RankEngine::from_config(config);

    let network = NetworkSummary::of(graph);
    info!(nodes = network.nodes, links = network.links, "network loaded");

    let baseline = engine.cross_validate(graph, config.experiment.agreement_tolerance)?;
    let ranks = &baseline.outcome.power.ranks;
    let ranking = ranked_nodes(graph, ranks);

    let sweep = damping_sweep(
        graph,
        config.rank,
        config.diagnostics,
        &config.experiment.alpha_values,
    )?;

    let convergence = ConvergenceAnalysis::from_errors(baseline.outcome.power.history.errors());

    let correlation = correlate(graph, ranks.as_slice());

    Ok(ExperimentReport {
        network,
        ranking,
        sweep,
        convergence,
        correlation,
        diagnostics: baseline.diagnostics,
        baseline: baseline.outcome,
    })
}

/// Pearson correlation of in- and out-degree with `ranks`.
#[must_use]
pub fn correlate(graph: &Graph, ranks: &[f64]) -> DegreeCorrelation {
    DegreeCorrelation {
        in_degree: pearson(&stats::as_f64(&graph.in_degrees()), ranks),
        out_degree: pearson(&stats::as_f64(&graph.out_degrees()), ranks),
    }
}
