use colored::Colorize;

use crate::graph::rank::SolverStatus;

pub(crate) fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}

pub(crate) fn section(title: &str) {
    println!();
    println!("{}", title.bold());
    println!("{}", "-".repeat(44).dimmed());
}

pub(crate) fn fmt_correlation(value: Option<f64>) -> String {
    value.map_or_else(|| "n/a".to_string(), |v| format!("{v:.4}"))
}

pub(crate) fn status_label(status: SolverStatus) -> String {
    match status {
        SolverStatus::Converged => format!("{:>16}", "converged").green().to_string(),
        SolverStatus::MaxIterationsReached => {
            format!("{:>16}", "max iterations").yellow().to_string()
        }
    }
}
