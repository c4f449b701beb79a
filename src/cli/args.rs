use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::graph::rank::Method;

#[derive(Parser)]
#[command(name = "linkrank", version, about = "PageRank ranking engine")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,
    /// Configuration file (defaults to ./linkrank.toml when present)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// Where the graph comes from.
#[derive(Args, Debug, Clone, Default)]
pub struct NetworkArgs {
    /// TOML network description; the built-in academic network if omitted
    #[arg(long, short, value_name = "FILE")]
    pub network: Option<PathBuf>,
}

/// Overrides for the solver parameters.
#[derive(Args, Debug, Clone, Copy, Default)]
pub struct RankArgs {
    /// Damping factor in (0, 1)
    #[arg(long, short)]
    pub alpha: Option<f64>,
    /// L1 convergence threshold
    #[arg(long)]
    pub tolerance: Option<f64>,
    /// Iteration cap for power iteration
    #[arg(long)]
    pub max_iter: Option<usize>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank the network with one method
    Rank {
        #[command(flatten)]
        network: NetworkArgs,
        #[command(flatten)]
        params: RankArgs,
        #[arg(long, value_enum, default_value_t = Method::Power)]
        method: Method,
        /// Only show the top N pages
        #[arg(long)]
        top: Option<usize>,
        #[arg(long)]
        json: bool,
    },
    /// Run both methods and check that they agree
    Compare {
        #[command(flatten)]
        network: NetworkArgs,
        #[command(flatten)]
        params: RankArgs,
        #[arg(long)]
        json: bool,
    },
    /// Damping factor sensitivity
    Sweep {
        #[command(flatten)]
        network: NetworkArgs,
        #[command(flatten)]
        params: RankArgs,
        /// Comma-separated damping factors
        #[arg(long, value_delimiter = ',')]
        alphas: Vec<f64>,
        #[arg(long)]
        json: bool,
    },
    /// Run every experiment
    Experiment {
        #[command(flatten)]
        network: NetworkArgs,
        #[command(flatten)]
        params: RankArgs,
        /// Write CSV and JSON results into this directory
        #[arg(long, value_name = "DIR")]
        out: Option<PathBuf>,
        #[arg(long)]
        json: bool,
    },
    /// Show degree statistics of the network
    Network {
        #[command(flatten)]
        network: NetworkArgs,
        #[arg(long)]
        json: bool,
    },
}
