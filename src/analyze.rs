// src/analyze.rs
//! End-to-end analysis: load, build the graph, find cycles.

use std::path::Path;

use serde::Serialize;
use tracing::{debug, info_span};

use crate::config::Config;
use crate::error::{KnotError, Result};
use crate::graph::{build_dependency_graph_with, find_cycles, CycleResult, DependencyGraph, GraphStats};
use crate::loader::{self, ProjectInput, RawFile};
use crate::source::SourceSet;

/// Everything one analysis run produces.
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    pub graph: DependencyGraph,
    pub cycles: Vec<CycleResult>,
    pub stats: GraphStats,
}

impl Analysis {
    /// Runs graph construction and cycle detection over loaded files.
    ///
    /// # Errors
    /// Only under strict path handling, when a path cannot be normalized.
    pub fn from_raw_files(files: Vec<RawFile>, config: &Config) -> Result<Self> {
        let sources = SourceSet::from_raw(
            files.into_iter().map(|f| (f.path, f.content)),
            config.path_policy(),
        )?;
        Ok(Self::from_sources(&sources, config))
    }

    #[must_use]
    pub fn from_sources(sources: &SourceSet, config: &Config) -> Self {
        let graph = build_dependency_graph_with(sources, &config.resolve_options());
        let cycles = find_cycles(&graph);
        let stats = GraphStats::compute(&graph, &cycles);
        debug!(cycles = cycles.len(), "cycle detection finished");
        Self { graph, cycles, stats }
    }

    /// True when no source files were found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    #[must_use]
    pub fn has_cycles(&self) -> bool {
        !self.cycles.is_empty()
    }
}

/// Analyses a zip archive or a directory.
///
/// # Errors
/// Any failure is returned as a single `AnalysisFailed` error; no partial
/// result is produced.
pub fn analyze(input: &Path, config: &Config) -> Result<Analysis> {
    let span = info_span!("analyze", input = %input.display());
    let _guard = span.enter();

    run(input, config).map_err(KnotError::consolidate)
}

fn run(input: &Path, config: &Config) -> Result<Analysis> {
    let filter = config.filters()?;
    let project = ProjectInput::detect(input)?;
    let files = loader::load(&project, &filter)?;
    Analysis::from_raw_files(files, config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(list: &[(&str, &str)]) -> Vec<RawFile> {
        list.iter()
            .map(|(p, c)| RawFile { path: (*p).to_string(), content: (*c).to_string() })
            .collect()
    }

    #[test]
    fn test_from_raw_files_end_to_end() {
        let files = raw(&[
            ("a.ts", "import './b'"),
            ("b.ts", "import './c'"),
            ("c.ts", "import './a'"),
        ]);
        let analysis = Analysis::from_raw_files(files, &Config::default());
        assert!(analysis.is_ok());
        if let Ok(a) = analysis {
            assert_eq!(a.graph.node_count(), 3);
            assert_eq!(a.graph.edge_count(), 3);
            assert_eq!(a.cycles.len(), 1);
            assert_eq!(a.cycles[0].readable_path, "a.ts -> b.ts -> c.ts");
            assert_eq!(a.stats.cycle_node_count, 3);
        }
    }

    #[test]
    fn test_strict_paths_fail_whole_run() {
        let config = Config { strict_paths: true, ..Config::default() };
        let result = Analysis::from_raw_files(raw(&[("a.ts", ""), ("../b.ts", "")]), &config);
        assert!(matches!(result, Err(KnotError::MalformedPath { .. })));
    }

    #[test]
    fn test_missing_input_consolidated() {
        let result = analyze(Path::new("/no/such/project.zip"), &Config::default());
        match result {
            Err(KnotError::AnalysisFailed { message, input_failure }) => {
                assert!(input_failure);
                assert!(message.contains("/no/such/project.zip"));
            }
            other => panic!("expected AnalysisFailed, got {other:?}"),
        }
    }
}
