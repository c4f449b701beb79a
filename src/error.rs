// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RankError {
    #[error("Adjacency matrix must be square (got {rows}x{cols})")]
    NotSquare { rows: usize, cols: usize },

    #[error("Graph has no nodes")]
    EmptyGraph,

    #[error("Negative adjacency entry {value} at ({row}, {col})")]
    NegativeEntry { row: usize, col: usize, value: f64 },

    #[error("Non-finite adjacency entry at ({row}, {col})")]
    NonFiniteEntry { row: usize, col: usize },

    #[error("Expected {expected} node names, got {actual}")]
    NameCountMismatch { expected: usize, actual: usize },

    #[error("Duplicate node name: {0}")]
    DuplicateNode(String),

    #[error("Unknown node: {0}")]
    UnknownNode(String),

    #[error("Damping factor must lie in (0, 1), got {0}")]
    InvalidAlpha(f64),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Transition matrix is not column stochastic (max deviation {max_deviation:.3e})")]
    NonStochastic { max_deviation: f64 },

    #[error("Numerical instability: {0}")]
    NumericalInstability(String),

    #[error("Solvers disagree: max difference {difference:.3e} exceeds {tolerance:.3e}")]
    SolverDisagreement { difference: f64, tolerance: f64 },

    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("Parse error: {0}")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, RankError>;

// Allow `?` on std::io::Error by converting to RankError::Io with unknown path.
impl From<std::io::Error> for RankError {
    fn from(source: std::io::Error) -> Self {
        RankError::Io {
            source,
            path: PathBuf::from("<unknown>"),
        }
    }
}

impl From<toml::de::Error> for RankError {
    fn from(e: toml::de::Error) -> Self {
        RankError::Parse(e.to_string())
    }
}
