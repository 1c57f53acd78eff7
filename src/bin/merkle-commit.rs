//! merkle-commit CLI Binary
//!
//! Command-line harness for building Merkle roots, proving and verifying membership.

use anyhow::Context;
use clap::Parser;
use merkle_commit::cli::{command_name, map_error, Cli, RunContext};
use merkle_commit::config::{CommitConfig, ConfigLoader};
use merkle_commit::logging::{init_logging, LoggingConfig};
use std::process::ExitCode;
use tracing::{error, info};

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<bool> {
    let config =
        ConfigLoader::load(cli.config.as_deref()).context("Failed to load configuration")?;

    // Initialize logging early
    init_logging(&build_logging_config(cli, &config)).context("Failed to initialize logging")?;

    let command = command_name(&cli.command);
    info!(command, "merkle-commit starting");

    let context = RunContext::new(config);
    match context.execute(&cli.command) {
        Ok(output) => {
            info!(command, success = output.success, "Command completed");
            println!("{}", output.text);
            Ok(output.success)
        }
        Err(e) => {
            error!(command, "Command failed: {}", e);
            eprintln!("{}", map_error(&e));
            Ok(false)
        }
    }
}

/// Build logging configuration from CLI args and the loaded config.
/// Precedence: CLI flags override config file override defaults.
fn build_logging_config(cli: &Cli, config: &CommitConfig) -> LoggingConfig {
    // If --verbose is not set, disable logging
    if !cli.verbose {
        return LoggingConfig::off();
    }

    let mut logging = config.logging.clone();
    if let Some(ref level) = cli.log_level {
        logging.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        logging.format = format.clone();
    }
    if let Some(ref output) = cli.log_output {
        logging.output = output.clone();
    }
    if let Some(ref file) = cli.log_file {
        logging.file = file.clone();
    }
    logging
}
