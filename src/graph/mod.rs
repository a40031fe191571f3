// src/graph/mod.rs
//! Module dependency graph: construction, cycle detection and coupling.

pub mod builder;
pub mod coupling;
pub mod cycles;
pub mod imports;
pub mod resolver;

use std::collections::BTreeMap;

use serde::Serialize;

use crate::source::NormalizedPath;

pub use builder::{build_dependency_graph, build_dependency_graph_with};
pub use coupling::{compute_coupling, Coupling, GraphStats};
pub use cycles::{find_cycles, CycleResult};
pub use resolver::{ResolveOptions, DEFAULT_EXTENSIONS};

/// One project file in the graph. `id` and `path` are the same string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileNode {
    pub id: NormalizedPath,
    pub name: String,
    pub path: NormalizedPath,
}

impl FileNode {
    #[must_use]
    pub fn new(path: &NormalizedPath) -> Self {
        Self {
            id: path.clone(),
            name: path.file_name().to_string(),
            path: path.clone(),
        }
    }
}

/// `from` contains a relative import that resolves to `to`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct DependencyEdge {
    pub from: NormalizedPath,
    pub to: NormalizedPath,
}

/// Read-only snapshot of file-level dependencies.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DependencyGraph {
    nodes: Vec<FileNode>,
    edges: Vec<DependencyEdge>,
    adjacency: BTreeMap<NormalizedPath, Vec<NormalizedPath>>,
}

impl DependencyGraph {
    pub(crate) fn from_parts(
        nodes: Vec<FileNode>,
        edges: Vec<DependencyEdge>,
        adjacency: BTreeMap<NormalizedPath, Vec<NormalizedPath>>,
    ) -> Self {
        Self { nodes, edges, adjacency }
    }

    /// Nodes in Source Set order.
    #[must_use]
    pub fn nodes(&self) -> &[FileNode] {
        &self.nodes
    }

    #[must_use]
    pub fn edges(&self) -> &[DependencyEdge] {
        &self.edges
    }

    #[must_use]
    pub fn adjacency(&self) -> &BTreeMap<NormalizedPath, Vec<NormalizedPath>> {
        &self.adjacency
    }

    /// Resolved targets of `id`, in import order. Empty for unknown ids.
    #[must_use]
    pub fn dependencies(&self, id: &str) -> &[NormalizedPath] {
        self.adjacency.get(id).map(Vec::as_slice).unwrap_or_default()
    }

    /// Files that import `id`, in node order.
    #[must_use]
    pub fn dependents(&self, id: &str) -> Vec<&NormalizedPath> {
        self.edges
            .iter()
            .filter(|e| e.to.as_str() == id)
            .map(|e| &e.from)
            .collect()
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.adjacency.contains_key(id)
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}
