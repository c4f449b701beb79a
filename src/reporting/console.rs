use colored::Colorize;

use super::shared::{fmt_correlation, pluralize, section, status_label};
use crate::experiment::{
    ConvergenceAnalysis, DegreeCorrelation, ExperimentReport, NetworkSummary, SweepPoint,
};
use crate::graph::rank::queries::RankedNode;
use crate::graph::rank::{CrossValidation, Diagnostic, EigenResult, PowerResult};
use crate::graph::Graph;

/// Prints per-page degrees and the dead-end markers.
pub fn print_network(summary: &NetworkSummary) {
    println!(
        "Network: {} {}, {} {}, density {:.4}",
        summary.nodes,
        pluralize("page", summary.nodes),
        summary.links,
        pluralize("link", summary.links),
        summary.density
    );
    println!();
    println!("{:<20} {:>10} {:>10}", "Page Name", "In-Degree", "Out-Degree");
    println!("{} {} {}", "-".repeat(20), "-".repeat(10), "-".repeat(10));
    for page in &summary.pages {
        let marker = if page.dead_end {
            " (Dead End)".yellow().to_string()
        } else {
            String::new()
        };
        println!(
            "{:<20} {:>10} {:>10}{marker}",
            page.name, page.in_degree, page.out_degree
        );
    }
}

pub fn print_power(result: &PowerResult) {
    if result.converged() {
        println!(
            "Power Method converged after {} iterations",
            result.iterations.to_string().cyan()
        );
    } else {
        println!(
            "{}",
            format!(
                "Power Method reached maximum iterations: {}",
                result.iterations
            )
            .yellow()
        );
    }
    println!("Final difference: {:.2e}", result.final_delta);
}

pub fn print_eigen(result: &EigenResult) {
    println!("Eigenvalue Method completed");
    println!("Largest eigenvalue: {:.10}", result.eigenvalue);
    println!(
        "Computation time: {:.6} seconds",
        result.elapsed.as_secs_f64()
    );
    println!("Eigenvalue equation residual: {:.2e}", result.residual);
}

pub fn print_comparison(cv: &CrossValidation) {
    print_power(&cv.power);
    println!();
    print_eigen(&cv.eigen);
    println!();
    println!(
        "Maximum difference between methods: {}",
        format!("{:.2e}", cv.max_difference).green()
    );
}

/// Prints the ranking table, optionally limited to the top `limit` rows.
pub fn print_ranking(rows: &[RankedNode], limit: Option<usize>) {
    println!(
        "{:<5} {:<20} {:>15} {:>12}",
        "Rank", "Page Name", "PageRank", "Percentage"
    );
    println!(
        "{} {} {} {}",
        "-".repeat(5),
        "-".repeat(20),
        "-".repeat(15),
        "-".repeat(12)
    );
    for row in rows.iter().take(limit.unwrap_or(rows.len())) {
        println!(
            "{:<5} {:<20} {:>15.6} {:>11.2}%",
            row.position, row.name, row.score, row.percentage
        );
    }
}

pub fn print_sweep(graph: &Graph, points: &[SweepPoint]) {
    println!(
        "{:<8} {:>12} {:>16}  {}",
        "Alpha", "Iterations", "Status", "Top Page"
    );
    println!(
        "{} {} {}  {}",
        "-".repeat(8),
        "-".repeat(12),
        "-".repeat(16),
        "-".repeat(20)
    );
    for p in points {
        let top = p
            .ranks
            .top_n(1)
            .first()
            .and_then(|&(i, _)| graph.name(i))
            .unwrap_or("-")
            .to_string();
        println!(
            "{:<8.2} {:>12} {}  {top}",
            p.alpha,
            p.iterations,
            status_label(p.status)
        );
    }
}

pub fn print_convergence(analysis: &ConvergenceAnalysis) {
    println!("Convergence rate analysis:");
    for (iteration, error) in &analysis.checkpoints {
        println!("Iteration {iteration:5}: Error = {error:.2e}");
    }
}

pub fn print_correlation(correlation: &DegreeCorrelation) {
    println!(
        "Correlation between In-Degree and PageRank: {}",
        fmt_correlation(correlation.in_degree)
    );
    println!(
        "Correlation between Out-Degree and PageRank: {}",
        fmt_correlation(correlation.out_degree)
    );
}

/// Prints warnings to stderr; informational entries only when `verbose`.
pub fn print_diagnostics(diagnostics: &[Diagnostic], verbose: bool) {
    for d in diagnostics {
        if d.is_warning() {
            eprintln!("{} {}", "warning:".yellow().bold(), d.message());
        } else if verbose {
            eprintln!("{} {}", "note:".blue(), d.message());
        }
    }
}

/// Prints every section of a full experiment run.
pub fn print_experiment(report: &ExperimentReport, verbose: bool) {
    println!("{}", "=== PageRank Algorithm Experiments ===".bold());

    section("Experiment 1: Network Creation and Analysis");
    print_network(&report.network);

    section("Experiment 2: Basic PageRank Computation");
    print_comparison(&report.baseline);

    section("Experiment 3: PageRank Ranking Results");
    print_ranking(&report.ranking, None);

    section("Experiment 4: Damping Factor Sensitivity Analysis");
    println!("{:<8} {:>12}", "Alpha", "Iterations");
    println!("{} {}", "-".repeat(8), "-".repeat(12));
    for p in &report.sweep {
        println!("{:<8.2} {:>12}", p.alpha, p.iterations);
    }

    section("Experiment 5: Convergence Analysis");
    print_convergence(&report.convergence);

    section("Experiment 6: Network Structure Analysis");
    print_correlation(&report.correlation);

    print_diagnostics(&report.diagnostics, verbose);
    println!();
    println!("{}", "=== All Experiments Completed ===".green().bold());
}
