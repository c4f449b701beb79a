// src/reporting/mod.rs
//! Console and JSON rendering of ranking results.

mod console;
mod json;
mod shared;

pub use console::{
    print_comparison, print_convergence, print_correlation, print_diagnostics, print_eigen,
    print_experiment, print_network, print_power, print_ranking, print_sweep,
};
pub use json::{print_json, to_json};
