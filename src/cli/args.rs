// src/cli/args.rs
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "knotscan", version, about = "Finds circular imports in JS/TS/Vue projects")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
    /// Print diagnostics to stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,
    /// Read settings from this file instead of ./knotscan.toml
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Report every circular import in a project archive or directory
    Scan {
        #[arg(value_name = "INPUT")]
        input: PathBuf,
        /// Emit JSON instead of the terminal report
        #[arg(long)]
        json: bool,
        /// Include graph statistics
        #[arg(long)]
        stats: bool,
        /// Exit with a failure code when any cycle exists
        #[arg(long)]
        deny_cycles: bool,
    },
    /// Print the dependency graph as JSON
    Graph {
        #[arg(value_name = "INPUT")]
        input: PathBuf,
    },
    /// Print fan-in / fan-out statistics
    Stats {
        #[arg(value_name = "INPUT")]
        input: PathBuf,
        #[arg(long)]
        json: bool,
    },
}

/// Options for the scan command (used by handlers)
#[derive(Debug, Clone, Copy, Default)]
pub struct ScanArgs {
    pub json: bool,
    pub stats: bool,
    pub deny_cycles: bool,
}
