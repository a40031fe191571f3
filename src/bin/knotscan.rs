// src/bin/knotscan.rs
use clap::Parser;
use colored::Colorize;
use knotscan_core::cli::{self, Cli};
use knotscan_core::exit::KnotExit;
use knotscan_core::logging;

fn main() -> KnotExit {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = if let Some(cmd) = &cli.command {
        cli::dispatch::execute(&cli, cmd)
    } else {
        use clap::CommandFactory;
        let _ = Cli::command().print_help();
        Ok(KnotExit::Success)
    };

    match result {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            KnotExit::Error
        }
    }
}
