//! CLI help and command-name contract for logging.

use crate::cli::parse::Commands;

/// Command name string for log events (e.g. "prove", "show_config").
pub fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Demo { .. } => "demo",
        Commands::Root { .. } => "root",
        Commands::Prove { .. } => "prove",
        Commands::Verify { .. } => "verify",
        Commands::ShowConfig => "show_config",
    }
}
