use clap::Parser;
use colored::Colorize;
use linkrank_core::cli::{self, Cli};
use linkrank_core::exit::LinkRankExit;
use tracing_subscriber::EnvFilter;

fn main() -> LinkRankExit {
    let mut cli = Cli::parse();
    init_logging(cli.verbose);

    let result = if let Some(cmd) = cli.command.take() {
        cli::dispatch::execute(&cli, cmd)
    } else {
        use clap::CommandFactory;
        let _ = Cli::command().print_help();
        Ok(LinkRankExit::Success)
    };

    match result {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red(), e);
            LinkRankExit::from_error(&e)
        }
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "linkrank_core=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
