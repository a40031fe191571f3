// src/graph/builder.rs
//! Graph construction: extraction and resolution over the whole Source Set.

use std::collections::{BTreeMap, HashSet};

use tracing::debug;

use super::resolver::{self, ResolveOptions};
use super::{imports, DependencyEdge, DependencyGraph, FileNode};
use crate::source::{NormalizedPath, SourceFile, SourceSet};

/// Builds the dependency graph with the default extension priority.
#[must_use]
pub fn build_dependency_graph(files: &SourceSet) -> DependencyGraph {
    build_dependency_graph_with(files, &ResolveOptions::default())
}

/// Builds the dependency graph.
///
/// Unresolved imports are dropped. Each (from, to) pair appears at most
/// once, and adjacency lists keep first-import order.
#[must_use]
pub fn build_dependency_graph_with(files: &SourceSet, options: &ResolveOptions) -> DependencyGraph {
    let known: HashSet<NormalizedPath> = files.iter().map(|f| f.path().clone()).collect();

    let nodes: Vec<FileNode> = files.iter().map(|f| FileNode::new(f.path())).collect();
    let mut edges = Vec::new();
    let mut adjacency = BTreeMap::new();

    for file in files {
        let targets = resolve_file(file, &known, options);
        edges.extend(targets.iter().map(|to| DependencyEdge {
            from: file.path().clone(),
            to: to.clone(),
        }));
        adjacency.insert(file.path().clone(), targets);
    }

    debug!(nodes = nodes.len(), edges = edges.len(), "dependency graph built");
    DependencyGraph::from_parts(nodes, edges, adjacency)
}

fn resolve_file(
    file: &SourceFile,
    known: &HashSet<NormalizedPath>,
    options: &ResolveOptions,
) -> Vec<NormalizedPath> {
    let mut seen = HashSet::new();
    let mut targets = Vec::new();

    for spec in imports::extract(file.content()) {
        let Some(target) = resolver::resolve(file.path(), &spec, known, options) else {
            debug!(from = %file.path(), import = %spec, "unresolved import");
            continue;
        };
        if seen.insert(target.clone()) {
            targets.push(target);
        }
    }

    targets
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::PathPolicy;

    fn set(files: &[(&str, &str)]) -> SourceSet {
        SourceSet::from_raw(files.iter().copied(), PathPolicy::Strict)
            .unwrap_or_else(|e| panic!("{e}"))
    }

    #[test]
    fn test_single_edge() {
        let graph = build_dependency_graph(&set(&[
            ("a.ts", "import x from './b'"),
            ("b.ts", ""),
        ]));
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.edges()[0].from.as_str(), "a.ts");
        assert_eq!(graph.edges()[0].to.as_str(), "b.ts");
        assert_eq!(graph.dependencies("a.ts").len(), 1);
        assert!(graph.dependencies("b.ts").is_empty());
        assert!(graph.contains("b.ts"));
    }

    #[test]
    fn test_repeated_import_is_one_edge() {
        let graph = build_dependency_graph(&set(&[
            ("a.ts", "import x from './b';\nimport './b.ts';\nrequire('./b');"),
            ("b.ts", ""),
        ]));
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_adjacency_keeps_import_order() {
        let graph = build_dependency_graph(&set(&[
            ("main.ts", "import './z';\nimport './a';\nimport './m';"),
            ("a.ts", ""),
            ("m.ts", ""),
            ("z.ts", ""),
        ]));
        let deps: Vec<&str> = graph.dependencies("main.ts").iter().map(NormalizedPath::as_str).collect();
        assert_eq!(deps, vec!["z.ts", "a.ts", "m.ts"]);
    }

    #[test]
    fn test_node_names() {
        let graph = build_dependency_graph(&set(&[("src/views/Home.vue", "")]));
        assert_eq!(graph.nodes()[0].name, "Home.vue");
        assert_eq!(graph.nodes()[0].id, graph.nodes()[0].path);
    }
}
