// src/cli/handlers/mod.rs
//! Analysis command handlers.

use std::path::Path;

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

use super::args::ScanArgs;
use crate::analyze::{analyze, Analysis};
use crate::config::Config;
use crate::error::KnotError;
use crate::exit::KnotExit;
use crate::graph::{CycleResult, GraphStats};
use crate::reporting;

#[derive(Serialize)]
struct ScanOutput<'a> {
    cycles: &'a [CycleResult],
    #[serde(skip_serializing_if = "Option::is_none")]
    stats: Option<&'a GraphStats>,
}

/// Handles the scan command.
///
/// # Errors
/// Returns error only if output cannot be written.
pub fn handle_scan(input: &Path, config: &Config, args: ScanArgs) -> Result<KnotExit> {
    let analysis = match run_analysis(input, config) {
        Ok(a) => a,
        Err(exit) => return Ok(exit),
    };

    if args.json {
        reporting::print_json(&ScanOutput {
            cycles: &analysis.cycles,
            stats: args.stats.then_some(&analysis.stats),
        })?;
    } else {
        print!("{}", reporting::render_report(&analysis));
        if args.stats {
            print!("{}", reporting::render_stats(&analysis.stats));
        }
    }

    let deny = args.deny_cycles || config.deny_cycles;
    Ok(if deny && analysis.has_cycles() {
        KnotExit::CyclesFound
    } else {
        KnotExit::Success
    })
}

/// Handles the graph command.
///
/// # Errors
/// Returns error if serialization fails.
pub fn handle_graph(input: &Path, config: &Config) -> Result<KnotExit> {
    let analysis = match run_analysis(input, config) {
        Ok(a) => a,
        Err(exit) => return Ok(exit),
    };
    reporting::print_json(&analysis.graph)?;
    Ok(KnotExit::Success)
}

/// Handles the stats command.
///
/// # Errors
/// Returns error if serialization fails.
pub fn handle_stats(input: &Path, config: &Config, json: bool) -> Result<KnotExit> {
    let analysis = match run_analysis(input, config) {
        Ok(a) => a,
        Err(exit) => return Ok(exit),
    };
    if json {
        reporting::print_json(&analysis.stats)?;
    } else {
        print!("{}", reporting::render_stats(&analysis.stats));
    }
    Ok(KnotExit::Success)
}

/// Runs the analysis, mapping failures and empty projects to exit codes.
fn run_analysis(input: &Path, config: &Config) -> std::result::Result<Analysis, KnotExit> {
    match analyze(input, config) {
        Ok(analysis) if analysis.is_empty() => {
            eprintln!(
                "{} no source files found in {}",
                "warning:".yellow().bold(),
                input.display()
            );
            Err(KnotExit::NoSources)
        }
        Ok(analysis) => Ok(analysis),
        Err(e) => Err(report_failure(&e)),
    }
}

fn report_failure(e: &KnotError) -> KnotExit {
    eprintln!("{} {e}", "error:".red().bold());
    if e.is_input_failure() {
        KnotExit::ArchiveFailure
    } else {
        KnotExit::Error
    }
}
