//! ide-bridge CLI entry point.
//!
//! Parses arguments, sets up logging, loads the config and dispatches to the
//! command handler. Errors are printed to stderr and mapped to exit codes.

use std::process::ExitCode;

use ide_bridge::cli::Cli;
use ide_bridge::config::Config;
use ide_bridge::{commands, exit_codes};
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "IDE_BRIDGE_LOG";

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    init_logging(cli.verbose);

    let result = Config::resolve(cli.config.as_deref())
        .and_then(|config| commands::dispatch(cli.command, &config));

    match result {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "ide_bridge=warn",
        1 => "ide_bridge=info",
        _ => "ide_bridge=debug",
    };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
