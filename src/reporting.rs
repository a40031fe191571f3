// src/reporting.rs
//! Console output for analysis results.
//!
//! Cycles are listed with their closing arrow; statistics mirror the
//! overview a dependency dashboard would show.

use crate::analyze::Analysis;
use crate::graph::coupling::RankedNode;
use crate::graph::{CycleResult, GraphStats};
use anyhow::Result;
use colored::Colorize;
use std::fmt::Write;

/// Renders the cycle section of a report.
#[must_use]
pub fn render_cycles(cycles: &[CycleResult]) -> String {
    let mut out = String::new();

    if cycles.is_empty() {
        let _ = writeln!(out, "{}", "  ✓ No circular imports.".green());
        return out;
    }

    let _ = writeln!(
        out,
        "\n{} {} found",
        "CIRCULAR IMPORTS".red().bold(),
        cycles.len()
    );

    for cycle in cycles {
        let label = if cycle.is_self_loop() {
            "self-import".to_string()
        } else {
            format!("{} files", cycle.nodes.len())
        };
        let _ = writeln!(
            out,
            "  {} {} {}",
            format!("#{}", cycle.id).yellow(),
            cycle.closed_path(),
            format!("({label})").dimmed()
        );
    }

    out
}

/// Renders a one-line summary followed by the cycle list.
#[must_use]
pub fn render_report(analysis: &Analysis) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "\n{} {} files | {} imports | {} cycles",
        "KNOTSCAN".cyan().bold(),
        analysis.graph.node_count(),
        analysis.graph.edge_count(),
        format_count(analysis.cycles.len()),
    );
    out.push_str(&render_cycles(&analysis.cycles));
    out
}

fn format_count(n: usize) -> String {
    if n == 0 {
        n.to_string().green().to_string()
    } else {
        n.to_string().red().to_string()
    }
}

/// Renders graph statistics.
#[must_use]
pub fn render_stats(stats: &GraphStats) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n{}", "GRAPH STATISTICS".cyan().bold());
    let _ = writeln!(out, "  files            {}", stats.node_count);
    let _ = writeln!(out, "  imports          {}", stats.edge_count);
    let _ = writeln!(out, "  average degree   {:.2}", stats.average_degree);
    let _ = writeln!(out, "  cycles           {}", format_count(stats.cycle_count));
    let _ = writeln!(
        out,
        "  files in cycles  {} ({:.1}%)",
        stats.cycle_node_count, stats.cycle_node_percentage
    );

    write_ranking(&mut out, "Most dependencies (fan-out)", &stats.top_dependents);
    write_ranking(&mut out, "Most depended upon (fan-in)", &stats.top_dependencies);
    out
}

fn write_ranking(out: &mut String, title: &str, ranked: &[RankedNode]) {
    if ranked.is_empty() {
        return;
    }
    let _ = writeln!(out, "\n{}", title.yellow().bold());
    for (i, node) in ranked.iter().enumerate() {
        let _ = writeln!(out, "  {}. {:<40} {}", i + 1, node.path.as_str(), node.count);
    }
}

/// Prints a serializable object as JSON to stdout.
///
/// # Errors
/// Returns error if serialization fails.
pub fn print_json<T: serde::Serialize>(data: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(data)?;
    println!("{json}");
    Ok(())
}
