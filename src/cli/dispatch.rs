// src/cli/dispatch.rs
//! Routes parsed subcommands to their handlers.

use super::{
    args::{Cli, Commands, ScanArgs},
    handlers::{handle_graph, handle_scan, handle_stats},
};
use crate::config::Config;
use crate::exit::KnotExit;
use anyhow::Result;

/// Executes the parsed command.
///
/// # Errors
/// Returns error if the configuration cannot be loaded or output fails.
pub fn execute(cli: &Cli, command: &Commands) -> Result<KnotExit> {
    let config = Config::load(cli.config.as_deref())?;

    match command {
        Commands::Scan {
            input,
            json,
            stats,
            deny_cycles,
        } => handle_scan(
            input,
            &config,
            ScanArgs {
                json: *json,
                stats: *stats,
                deny_cycles: *deny_cycles,
            },
        ),
        Commands::Graph { input } => handle_graph(input, &config),
        Commands::Stats { input, json } => handle_stats(input, &config, *json),
    }
}
