//! Command dispatch logic extracted from binary to reduce main function size.

use anyhow::Result;

use super::args::{Cli, Commands};
use super::handlers::{
    apply_overrides, handle_compare, handle_experiment, handle_network, handle_rank,
    handle_sweep, load_config,
};
use crate::exit::LinkRankExit;

/// Executes the parsed command.
///
/// # Errors
/// Returns error if configuration loading or the command handler fails.
pub fn execute(cli: &Cli, command: Commands) -> Result<LinkRankExit> {
    let mut config = load_config(cli.config.as_deref(), cli.verbose)?;

    match command {
        Commands::Rank {
            network,
            params,
            method,
            top,
            json,
        } => {
            apply_overrides(&mut config, params);
            handle_rank(&config, &network, method, top, json)
        }
        Commands::Compare {
            network,
            params,
            json,
        } => {
            apply_overrides(&mut config, params);
            handle_compare(&config, &network, json)
        }
        Commands::Sweep {
            network,
            params,
            alphas,
            json,
        } => {
            apply_overrides(&mut config, params);
            handle_sweep(&config, &network, &alphas, json)
        }
        Commands::Experiment {
            network,
            params,
            out,
            json,
        } => {
            apply_overrides(&mut config, params);
            handle_experiment(&config, &network, out.as_deref(), json)
        }
        Commands::Network { network, json } => handle_network(&network, json),
    }
}
