// src/exit.rs
//! Standardized process exit codes for `linkrank`.
//!
//! Provides a stable contract for scripts and automation.

use std::process::Termination;

use crate::error::RankError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum LinkRankExit {
    /// Operation completed successfully.
    Success = 0,
    /// Generic error (e.g. IO, config, numerical failure).
    Error = 1,
    /// Input validation failed (malformed network, bad parameters).
    InvalidInput = 2,
    /// Power iteration hit `max_iter` before reaching the tolerance.
    NotConverged = 3,
    /// Power iteration and eigen-decomposition disagree.
    SolverDisagreement = 4,
}

impl LinkRankExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Maps a library error onto the exit code a script should see.
    #[must_use]
    pub fn from_error(err: &anyhow::Error) -> Self {
        match err.downcast_ref::<RankError>() {
            Some(
                RankError::NotSquare { .. }
                | RankError::EmptyGraph
                | RankError::NegativeEntry { .. }
                | RankError::NonFiniteEntry { .. }
                | RankError::NameCountMismatch { .. }
                | RankError::DuplicateNode(_)
                | RankError::UnknownNode(_)
                | RankError::InvalidAlpha(_)
                | RankError::InvalidConfig(_)
                | RankError::Parse(_),
            ) => Self::InvalidInput,
            Some(RankError::SolverDisagreement { .. }) => Self::SolverDisagreement,
            _ => Self::Error,
        }
    }
}

impl Termination for LinkRankExit {
    fn report(self) -> std::process::ExitCode {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_distinct() {
        let codes = [
            LinkRankExit::Success,
            LinkRankExit::Error,
            LinkRankExit::InvalidInput,
            LinkRankExit::NotConverged,
            LinkRankExit::SolverDisagreement,
        ];
        for (i, a) in codes.iter().enumerate() {
            for b in &codes[i + 1..] {
                assert_ne!(a.code(), b.code());
            }
        }
    }

    #[test]
    fn test_invalid_alpha_maps_to_invalid_input() {
        let err = anyhow::Error::new(RankError::InvalidAlpha(1.5));
        assert_eq!(LinkRankExit::from_error(&err), LinkRankExit::InvalidInput);
    }

    #[test]
    fn test_disagreement_maps_to_own_code() {
        let err = anyhow::Error::new(RankError::SolverDisagreement {
            difference: 1.0,
            tolerance: 1e-6,
        });
        assert_eq!(
            LinkRankExit::from_error(&err),
            LinkRankExit::SolverDisagreement
        );
    }

    #[test]
    fn test_context_preserves_mapping() {
        let err = anyhow::Error::new(RankError::EmptyGraph).context("loading network");
        assert_eq!(LinkRankExit::from_error(&err), LinkRankExit::InvalidInput);
    }
}
