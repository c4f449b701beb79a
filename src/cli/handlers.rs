// src/cli/handlers.rs
use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;
use tracing::debug;

use super::args::{NetworkArgs, RankArgs};
use crate::config::Config;
use crate::exit::LinkRankExit;
use crate::experiment::{self, export, NetworkSummary};
use crate::graph::network::academic_network;
use crate::graph::rank::queries::{ranked_nodes, RankedNode};
use crate::graph::rank::{Diagnostic, Method, RankEngine, SolverStatus};
use crate::graph::{file, Graph};
use crate::reporting;

/// Loads configuration from `path` or `./linkrank.toml`.
///
/// # Errors
/// Returns error if the file exists but is unreadable or malformed.
pub fn load_config(path: Option<&Path>, verbose: bool) -> Result<Config> {
    let mut config = match path {
        Some(p) => Config::load_from(p)
            .with_context(|| format!("Failed to load config {}", p.display()))?,
        None => Config::load().context("Failed to load linkrank.toml")?,
    };
    config.verbose = verbose;
    Ok(config)
}

/// Loads the requested network, or the built-in academic one.
///
/// # Errors
/// Returns error if the network file is missing or malformed.
pub fn load_graph(args: &NetworkArgs) -> Result<Graph> {
    let graph = match &args.network {
        Some(path) => file::load(path)
            .with_context(|| format!("Failed to load network {}", path.display()))?,
        None => academic_network()?,
    };
    debug!(nodes = graph.len(), "graph ready");
    Ok(graph)
}

/// Applies command-line overrides on top of file configuration.
pub fn apply_overrides(config: &mut Config, params: RankArgs) {
    if let Some(alpha) = params.alpha {
        config.rank.alpha = alpha;
    }
    if let Some(tolerance) = params.tolerance {
        config.rank.tolerance = tolerance;
    }
    if let Some(max_iter) = params.max_iter {
        config.rank.max_iter = max_iter;
    }
}

#[derive(Serialize)]
struct RankOutput {
    method: Method,
    alpha: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    iterations: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<SolverStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    eigenvalue: Option<f64>,
    ranking: Vec<RankedNode>,
    diagnostics: Vec<Diagnostic>,
}

/// Handles the rank command.
///
/// # Errors
/// Returns error if loading or ranking fails.
pub fn handle_rank(
    config: &Config,
    network: &NetworkArgs,
    method: Method,
    top: Option<usize>,
    json: bool,
) -> Result<LinkRankExit> {
    let graph = load_graph(network)?;
    let engine = RankEngine::from_config(config);

    let mut output = match method {
        Method::Power => {
            let run = engine.power(&graph)?;
            if !json {
                reporting::print_power(&run.outcome);
                println!();
            }
            RankOutput {
                method,
                alpha: config.rank.alpha,
                iterations: Some(run.outcome.iterations),
                status: Some(run.outcome.status),
                eigenvalue: None,
                ranking: ranked_nodes(&graph, &run.outcome.ranks),
                diagnostics: run.diagnostics,
            }
        }
        Method::Eigen => {
            let run = engine.eigen(&graph)?;
            if !json {
                reporting::print_eigen(&run.outcome);
                println!();
            }
            RankOutput {
                method,
                alpha: config.rank.alpha,
                iterations: None,
                status: None,
                eigenvalue: Some(run.outcome.eigenvalue),
                ranking: ranked_nodes(&graph, &run.outcome.ranks),
                diagnostics: run.diagnostics,
            }
        }
    };

    if json {
        if let Some(limit) = top {
            output.ranking.truncate(limit);
        }
        reporting::print_json(&output)?;
    } else {
        reporting::print_ranking(&output.ranking, top);
        reporting::print_diagnostics(&output.diagnostics, config.verbose);
    }

    if output.status == Some(SolverStatus::MaxIterationsReached) {
        Ok(LinkRankExit::NotConverged)
    } else {
        Ok(LinkRankExit::Success)
    }
}

/// Handles the compare command.
///
/// # Errors
/// Returns error if either solver fails or they disagree.
pub fn handle_compare(config: &Config, network: &NetworkArgs, json: bool) -> Result<LinkRankExit> {
    let graph = load_graph(network)?;
    let engine = RankEngine::from_config(config);
    let run = engine.cross_validate(&graph, config.experiment.agreement_tolerance)?;

    if json {
        reporting::print_json(&run)?;
    } else {
        reporting::print_comparison(&run.outcome);
        reporting::print_diagnostics(&run.diagnostics, config.verbose);
        if run.outcome.power.converged() {
            println!("{}", "[OK] Methods agree.".green().bold());
        } else {
            println!("{}", "Agreement not checked: power iteration did not converge.".yellow());
        }
    }

    if run.outcome.power.converged() {
        Ok(LinkRankExit::Success)
    } else {
        Ok(LinkRankExit::NotConverged)
    }
}

/// Handles the sweep command.
///
/// # Errors
/// Returns error if any sweep point fails.
pub fn handle_sweep(
    config: &Config,
    network: &NetworkArgs,
    alphas: &[f64],
    json: bool,
) -> Result<LinkRankExit> {
    let graph = load_graph(network)?;
    let alphas = if alphas.is_empty() {
        config.experiment.alpha_values.as_slice()
    } else {
        alphas
    };
    let points = experiment::damping_sweep(&graph, config.rank, config.diagnostics, alphas)?;

    if json {
        reporting::print_json(&points)?;
    } else {
        reporting::print_sweep(&graph, &points);
        for point in &points {
            reporting::print_diagnostics(&point.diagnostics, config.verbose);
        }
    }

    if points.iter().all(|p| p.status == SolverStatus::Converged) {
        Ok(LinkRankExit::Success)
    } else {
        Ok(LinkRankExit::NotConverged)
    }
}

/// Handles the experiment command.
///
/// # Errors
/// Returns error if any experiment fails or results can't be written.
pub fn handle_experiment(
    config: &Config,
    network: &NetworkArgs,
    out: Option<&Path>,
    json: bool,
) -> Result<LinkRankExit> {
    let graph = load_graph(network)?;
    let report = experiment::run(&graph, config)?;

    if json {
        reporting::print_json(&report)?;
    } else {
        reporting::print_experiment(&report, config.verbose);
    }

    if let Some(dir) = out {
        let written = export::write_all(&report, dir)?;
        if !json {
            for path in written {
                println!("Results saved to: {}", path.display());
            }
        }
    }

    if report.baseline.power.converged() {
        Ok(LinkRankExit::Success)
    } else {
        Ok(LinkRankExit::NotConverged)
    }
}

/// Handles the network command.
///
/// # Errors
/// Returns error if the network cannot be loaded.
pub fn handle_network(network: &NetworkArgs, json: bool) -> Result<LinkRankExit> {
    let graph = load_graph(network)?;
    let summary = NetworkSummary::of(&graph);
    if json {
        reporting::print_json(&summary)?;
    } else {
        reporting::print_network(&summary);
    }
    Ok(LinkRankExit::Success)
}
