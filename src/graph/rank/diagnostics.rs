// src/graph/rank/diagnostics.rs
//! Recoverable numerical warnings raised while ranking.
//!
//! Every diagnostic is logged through `tracing` and kept on the solver
//! result. A [`DiagnosticPolicy`] decides which ones become hard errors.

use serde::Serialize;
use tracing::{info, warn};

use crate::config::DiagnosticPolicy;
use crate::error::{RankError, Result};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum Diagnostic {
    /// Dead-end columns were replaced with uniform columns.
    DeadEndsResolved { nodes: Vec<usize> },
    /// A transition column sum drifted from 1.
    NonStochastic { max_deviation: f64 },
    /// Power iteration stopped at `max_iter` above the tolerance.
    NotConverged { iterations: usize, final_delta: f64 },
    /// `||G r - λ r||` exceeded the configured threshold.
    LargeResidual { residual: f64, threshold: f64 },
}

impl Diagnostic {
    /// True for diagnostics that weaken the guarantees of the result.
    #[must_use]
    pub fn is_warning(&self) -> bool {
        !matches!(self, Self::DeadEndsResolved { .. })
    }

    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::DeadEndsResolved { nodes } => {
                format!("resolved {} dead-end node(s): {nodes:?}", nodes.len())
            }
            Self::NonStochastic { max_deviation } => {
                format!("transition matrix is not column stochastic (max deviation {max_deviation:.2e})")
            }
            Self::NotConverged {
                iterations,
                final_delta,
            } => format!("power iteration reached {iterations} iterations (final delta {final_delta:.2e})"),
            Self::LargeResidual {
                residual,
                threshold,
            } => format!("eigen residual {residual:.2e} exceeds {threshold:.2e}"),
        }
    }
}

/// Collects diagnostics for one solver call.
#[derive(Debug, Clone, Default)]
pub struct DiagnosticLog {
    policy: DiagnosticPolicy,
    entries: Vec<Diagnostic>,
}

impl DiagnosticLog {
    #[must_use]
    pub fn new(policy: DiagnosticPolicy) -> Self {
        Self {
            policy,
            entries: Vec::new(),
        }
    }

    #[must_use]
    pub fn policy(&self) -> &DiagnosticPolicy {
        &self.policy
    }

    /// Logs and records `diagnostic`, then fails if the policy escalates it.
    ///
    /// # Errors
    /// Returns `NonStochastic` or `NumericalInstability` when the matching
    /// strict flag is set.
    pub fn report(&mut self, diagnostic: Diagnostic) -> Result<()> {
        if diagnostic.is_warning() {
            warn!("{}", diagnostic.message());
        } else {
            info!("{}", diagnostic.message());
        }

        let escalated = match &diagnostic {
            Diagnostic::NonStochastic { max_deviation } if self.policy.strict_stochastic => {
                Some(RankError::NonStochastic {
                    max_deviation: *max_deviation,
                })
            }
            Diagnostic::LargeResidual { .. } if self.policy.strict_instability => Some(
                RankError::NumericalInstability(diagnostic.message()),
            ),
            _ => None,
        };

        self.entries.push(diagnostic);
        escalated.map_or(Ok(()), Err)
    }

    #[must_use]
    pub fn entries(&self) -> &[Diagnostic] {
        &self.entries
    }

    #[must_use]
    pub fn into_entries(self) -> Vec<Diagnostic> {
        self.entries
    }
}
