// src/graph/rank/mod.rs
pub mod builder;
pub mod compare;
pub mod diagnostics;
pub mod eigen;
pub mod google;
pub mod pagerank;
pub mod queries;
pub mod vector;

pub use builder::TransitionMatrix;
pub use compare::CrossValidation;
pub use diagnostics::{Diagnostic, DiagnosticLog};
pub use eigen::{EigenResult, EigenSolver};
pub use google::GoogleMatrix;
pub use pagerank::{ConvergenceHistory, PowerIteration, PowerResult, SolverStatus};
pub use vector::RankVector;

use clap::ValueEnum;
use serde::Serialize;
use tracing::debug;

use crate::config::{Config, DiagnosticPolicy, RankConfig};
use crate::error::Result;
use crate::graph::Graph;

/// Computes a rank vector from a Google matrix.
pub trait RankSolver {
    type Output: RankOutcome;

    /// # Errors
    /// Returns an error on invalid parameters or numerical failure.
    fn solve(&self, google: &GoogleMatrix, log: &mut DiagnosticLog) -> Result<Self::Output>;
}

/// Anything carrying a final rank vector.
pub trait RankOutcome {
    fn ranks(&self) -> &RankVector;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Method {
    #[default]
    Power,
    Eigen,
}

/// A solver outcome plus what the pipeline observed on the way.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankRun<T> {
    pub outcome: T,
    pub dead_ends: Vec<usize>,
    pub diagnostics: Vec<Diagnostic>,
}

/// The matrices a solver runs on, built once per graph.
#[derive(Debug, Clone)]
pub struct Prepared {
    pub transition: TransitionMatrix,
    pub google: GoogleMatrix,
    pub log: DiagnosticLog,
}

/// Orchestrates transition building, Google matrix assembly and solving.
#[derive(Debug, Clone, Copy, Default)]
pub struct RankEngine {
    config: RankConfig,
    policy: DiagnosticPolicy,
}

impl RankEngine {
    #[must_use]
    pub fn new(config: RankConfig, policy: DiagnosticPolicy) -> Self {
        Self { config, policy }
    }

    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.rank, config.diagnostics)
    }

    #[must_use]
    pub fn config(&self) -> &RankConfig {
        &self.config
    }

    /// Builds the transition and Google matrices for `graph`.
    ///
    /// # Errors
    /// Returns an error for invalid parameters or an escalated diagnostic.
    pub fn prepare(&self, graph: &Graph) -> Result<Prepared> {
        self.config.validate()?;
        let mut log = DiagnosticLog::new(self.policy);
        let transition = builder::build(graph, &mut log)?;
        let google = GoogleMatrix::assemble(&transition, self.config.alpha)?;
        Ok(Prepared {
            transition,
            google,
            log,
        })
    }

    /// Ranks `graph` with `solver`.
    ///
    /// # Errors
    /// See [`RankEngine::prepare`] and the solver.
    pub fn run<S: RankSolver>(&self, graph: &Graph, solver: &S) -> Result<RankRun<S::Output>> {
        let Prepared {
            transition,
            google,
            mut log,
        } = self.prepare(graph)?;
        let outcome = solver.solve(&google, &mut log)?;
        Ok(RankRun {
            outcome,
            dead_ends: transition.dead_ends().to_vec(),
            diagnostics: log.into_entries(),
        })
    }

    /// # Errors
    /// See [`RankEngine::run`].
    pub fn power(&self, graph: &Graph) -> Result<RankRun<PowerResult>> {
        self.run(graph, &PowerIteration::new(self.config))
    }

    /// # Errors
    /// See [`RankEngine::run`].
    pub fn eigen(&self, graph: &Graph) -> Result<RankRun<EigenResult>> {
        self.run(graph, &EigenSolver)
    }

    /// Ranks with `method`, returning only the vector and diagnostics.
    ///
    /// # Errors
    /// See [`RankEngine::run`].
    pub fn rank(&self, graph: &Graph, method: Method) -> Result<RankRun<RankVector>> {
        match method {
            Method::Power => self.power(graph).map(into_vector_run),
            Method::Eigen => self.eigen(graph).map(into_vector_run),
        }
    }

    /// Runs both solvers on the same Google matrix and checks agreement.
    ///
    /// Agreement is only enforced when power iteration converged; otherwise
    /// the difference is reported as-is.
    ///
    /// # Errors
    /// Returns `SolverDisagreement` when the two vectors differ by more than
    /// `tolerance` (scaled by vector magnitude).
    pub fn cross_validate(
        &self,
        graph: &Graph,
        tolerance: f64,
    ) -> Result<RankRun<CrossValidation>> {
        let Prepared {
            transition,
            google,
            mut log,
        } = self.prepare(graph)?;
        let power = PowerIteration::new(self.config).solve(&google, &mut log)?;
        let eigen = EigenSolver.solve(&google, &mut log)?;
        let max_difference = if power.converged() {
            let difference = compare::agreement(power.ranks(), eigen.ranks(), tolerance)?;
            debug!(max_difference = difference, "solvers agree");
            difference
        } else {
            // A truncated power run is already flagged as NotConverged.
            power.ranks().max_abs_difference(eigen.ranks())
        };

        Ok(RankRun {
            outcome: CrossValidation {
                power,
                eigen,
                max_difference,
            },
            dead_ends: transition.dead_ends().to_vec(),
            diagnostics: log.into_entries(),
        })
    }
}

fn into_vector_run<T: RankOutcome>(run: RankRun<T>) -> RankRun<RankVector> {
    RankRun {
        outcome: run.outcome.ranks().clone(),
        dead_ends: run.dead_ends,
        diagnostics: run.diagnostics,
    }
}
