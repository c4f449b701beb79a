use serde::{Deserialize, Serialize};

use crate::error::{RankError, Result};

/// Solver parameters shared by both rank methods.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RankConfig {
    /// Damping factor, the probability of following a link.
    #[serde(default = "default_alpha")]
    pub alpha: f64,
    /// L1 threshold between successive power-iteration vectors.
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
    #[serde(default = "default_max_iter")]
    pub max_iter: usize,
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            alpha: default_alpha(),
            tolerance: default_tolerance(),
            max_iter: default_max_iter(),
        }
    }
}

impl RankConfig {
    #[must_use]
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    #[must_use]
    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    /// Validates the parameters.
    ///
    /// # Errors
    /// Returns `InvalidAlpha` if alpha is outside (0, 1), and
    /// `InvalidConfig` for a non-positive tolerance or a zero iteration cap.
    pub fn validate(&self) -> Result<()> {
        validate_alpha(self.alpha)?;
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(RankError::InvalidConfig(format!(
                "tolerance must be positive, got {}",
                self.tolerance
            )));
        }
        if self.max_iter == 0 {
            return Err(RankError::InvalidConfig(
                "max_iter must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Rejects damping factors outside the open interval (0, 1).
///
/// # Errors
/// Returns `InvalidAlpha` on rejection.
pub fn validate_alpha(alpha: f64) -> Result<()> {
    if alpha.is_finite() && alpha > 0.0 && alpha < 1.0 {
        Ok(())
    } else {
        Err(RankError::InvalidAlpha(alpha))
    }
}

/// Controls which numerical diagnostics are escalated to hard errors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiagnosticPolicy {
    /// Fail when the transition matrix is not column stochastic.
    #[serde(default = "default_true")]
    pub strict_stochastic: bool,
    /// Fail when the eigen residual exceeds `residual_threshold`.
    #[serde(default)]
    pub strict_instability: bool,
    #[serde(default = "default_residual_threshold")]
    pub residual_threshold: f64,
}

impl Default for DiagnosticPolicy {
    fn default() -> Self {
        Self {
            strict_stochastic: true,
            strict_instability: false,
            residual_threshold: default_residual_threshold(),
        }
    }
}

impl DiagnosticPolicy {
    /// Reports every diagnostic without failing.
    #[must_use]
    pub fn lenient() -> Self {
        Self {
            strict_stochastic: false,
            strict_instability: false,
            ..Self::default()
        }
    }

    /// Escalates every diagnostic.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            strict_stochastic: true,
            strict_instability: true,
            ..Self::default()
        }
    }
}

/// Parameters for the experiment driver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentConfig {
    #[serde(default = "default_alpha_values")]
    pub alpha_values: Vec<f64>,
    /// Maximum element-wise difference tolerated between the two solvers.
    #[serde(default = "default_agreement_tolerance")]
    pub agreement_tolerance: f64,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            alpha_values: default_alpha_values(),
            agreement_tolerance: default_agreement_tolerance(),
        }
    }
}

impl ExperimentConfig {
    /// Validates every sweep point and the agreement tolerance.
    ///
    /// # Errors
    /// Returns `InvalidAlpha` for a bad sweep point, `InvalidConfig` for an
    /// empty sweep or non-positive tolerance.
    pub fn validate(&self) -> Result<()> {
        if self.alpha_values.is_empty() {
            return Err(RankError::InvalidConfig(
                "alpha_values must not be empty".to_string(),
            ));
        }
        for &alpha in &self.alpha_values {
            validate_alpha(alpha)?;
        }
        if !self.agreement_tolerance.is_finite() || self.agreement_tolerance <= 0.0 {
            return Err(RankError::InvalidConfig(format!(
                "agreement_tolerance must be positive, got {}",
                self.agreement_tolerance
            )));
        }
        Ok(())
    }
}

/// Layout of `linkrank.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LinkRankToml {
    #[serde(default)]
    pub rank: RankConfig,
    #[serde(default)]
    pub diagnostics: DiagnosticPolicy,
    #[serde(default)]
    pub experiment: ExperimentConfig,
}

const fn default_true() -> bool { true }
const fn default_alpha() -> f64 { 0.85 }
const fn default_tolerance() -> f64 { 1e-8 }
const fn default_max_iter() -> usize { 1000 }
const fn default_residual_threshold() -> f64 { 1e-6 }
const fn default_agreement_tolerance() -> f64 { 1e-6 }

fn default_alpha_values() -> Vec<f64> {
    vec![0.5, 0.75, 0.85, 0.95]
}
