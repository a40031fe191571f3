// src/graph/coupling.rs
//! Afferent and efferent coupling, and whole-graph statistics.

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use super::{CycleResult, DependencyGraph};
use crate::source::NormalizedPath;

const TOP_N: usize = 5;

/// Coupling metrics for a single file node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Coupling {
    /// Afferent coupling (fan-in): files that import this file.
    afferent: usize,
    /// Efferent coupling (fan-out): files this file imports.
    efferent: usize,
}

impl Coupling {
    #[must_use]
    pub fn afferent(&self) -> usize {
        self.afferent
    }

    #[must_use]
    pub fn efferent(&self) -> usize {
        self.efferent
    }
}

/// Computes coupling for every node, including isolated ones.
#[must_use]
pub fn compute_coupling(graph: &DependencyGraph) -> HashMap<NormalizedPath, Coupling> {
    let mut coupling: HashMap<NormalizedPath, Coupling> = graph
        .nodes()
        .iter()
        .map(|n| (n.id.clone(), Coupling::default()))
        .collect();

    for edge in graph.edges() {
        if let Some(c) = coupling.get_mut(&edge.from) {
            c.efferent += 1;
        }
        if let Some(c) = coupling.get_mut(&edge.to) {
            c.afferent += 1;
        }
    }

    coupling
}

/// A node and its degree in one direction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedNode {
    pub path: NormalizedPath,
    pub count: usize,
}

/// Summary figures for a dependency graph and its cycles.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphStats {
    pub node_count: usize,
    pub edge_count: usize,
    pub cycle_count: usize,
    /// Mean out-degree (equal to mean in-degree).
    pub average_degree: f64,
    /// Files with the most outgoing imports.
    pub top_dependents: Vec<RankedNode>,
    /// Files imported by the most other files.
    pub top_dependencies: Vec<RankedNode>,
    /// Distinct files that sit on at least one cycle.
    pub cycle_node_count: usize,
    pub cycle_node_percentage: f64,
}

impl GraphStats {
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn compute(graph: &DependencyGraph, cycles: &[CycleResult]) -> Self {
        let node_count = graph.node_count();
        let edge_count = graph.edge_count();
        let coupling = compute_coupling(graph);

        let cycle_nodes: HashSet<&NormalizedPath> =
            cycles.iter().flat_map(|c| c.nodes.iter()).collect();

        let ratio = |n: usize| {
            if node_count == 0 {
                0.0
            } else {
                n as f64 / node_count as f64
            }
        };

        Self {
            node_count,
            edge_count,
            cycle_count: cycles.len(),
            average_degree: ratio(edge_count),
            top_dependents: top_by(&coupling, Coupling::efferent),
            top_dependencies: top_by(&coupling, Coupling::afferent),
            cycle_node_count: cycle_nodes.len(),
            cycle_node_percentage: ratio(cycle_nodes.len()) * 100.0,
        }
    }
}

fn top_by(
    coupling: &HashMap<NormalizedPath, Coupling>,
    metric: fn(&Coupling) -> usize,
) -> Vec<RankedNode> {
    let mut ranked: Vec<RankedNode> = coupling
        .iter()
        .map(|(path, c)| RankedNode {
            path: path.clone(),
            count: metric(c),
        })
        .collect();
    ranked.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.path.cmp(&b.path)));
    ranked.truncate(TOP_N);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{build_dependency_graph, find_cycles};
    use crate::source::{PathPolicy, SourceSet};

    fn hub_graph() -> DependencyGraph {
        let files = vec![
            ("a.ts", "import './hub'"),
            ("b.ts", "import './hub'"),
            ("c.ts", "import './hub'"),
            ("hub.ts", "import './types'"),
            ("types.ts", ""),
            ("lonely.ts", ""),
        ];
        let set = SourceSet::from_raw(files, PathPolicy::Strict).unwrap_or_default();
        build_dependency_graph(&set)
    }

    #[test]
    fn test_compute_coupling() {
        let coupling = compute_coupling(&hub_graph());

        let hub = coupling.get("hub.ts").copied().unwrap_or_default();
        assert_eq!(hub.afferent(), 3);
        assert_eq!(hub.efferent(), 1);

        let a = coupling.get("a.ts").copied().unwrap_or_default();
        assert_eq!(a.afferent(), 0);
        assert_eq!(a.efferent(), 1);

        let lonely = coupling.get("lonely.ts").copied();
        assert_eq!(lonely, Some(Coupling::default()));
    }

    #[test]
    fn test_stats_rankings() {
        let graph = hub_graph();
        let stats = GraphStats::compute(&graph, &find_cycles(&graph));

        assert_eq!(stats.node_count, 6);
        assert_eq!(stats.edge_count, 4);
        assert_eq!(stats.cycle_count, 0);
        assert_eq!(stats.cycle_node_count, 0);
        assert_eq!(stats.top_dependencies[0].path.as_str(), "hub.ts");
        assert_eq!(stats.top_dependencies[0].count, 3);
        // Ties on out-degree break by path.
        let names: Vec<&str> = stats.top_dependents.iter().map(|r| r.path.as_str()).collect();
        assert_eq!(names, vec!["a.ts", "b.ts", "c.ts", "hub.ts", "lonely.ts"]);
    }

    #[test]
    fn test_stats_cycle_share() {
        let files = vec![("a.ts", "import './b'"), ("b.ts", "import './a'"), ("c.ts", ""), ("d.ts", "")];
        let graph = build_dependency_graph(&SourceSet::from_raw(files, PathPolicy::Strict).unwrap_or_default());
        let stats = GraphStats::compute(&graph, &find_cycles(&graph));
        assert_eq!(stats.cycle_node_count, 2);
        assert!((stats.cycle_node_percentage - 50.0).abs() < 1e-9);
        assert!((stats.average_degree - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_stats_empty_graph() {
        let stats = GraphStats::compute(&DependencyGraph::default(), &[]);
        assert_eq!(stats.node_count, 0);
        assert!(stats.average_degree.abs() < f64::EPSILON);
        assert!(stats.top_dependents.is_empty());
    }
}
