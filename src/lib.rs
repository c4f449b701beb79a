pub mod cli;
pub mod config;
pub mod error;
pub mod exit;
pub mod experiment;
pub mod graph;
pub mod reporting;

pub use config::{Config, DiagnosticPolicy, RankConfig};
pub use error::{RankError, Result};
pub use graph::rank::{
    EigenSolver, Method, PowerIteration, RankEngine, RankSolver, RankVector, SolverStatus,
};
pub use graph::{Graph, GraphBuilder};
