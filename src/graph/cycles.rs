// src/graph/cycles.rs
//! Circular import detection.
//!
//! A three-colour depth-first search over the dependency graph. Every
//! back-edge (an edge into a node that is still in progress) closes a cycle,
//! which is rotated into canonical form so the same loop is reported once no
//! matter where the search entered it.
//!
//! The traversal keeps its own frame stack instead of recursing, so long
//! import chains cannot overflow the call stack.

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use super::DependencyGraph;
use crate::source::NormalizedPath;

const ARROW: &str = " -> ";

/// A distinct import cycle.
///
/// `nodes` is open (the first node is not repeated at the end) and starts at
/// its lexicographically smallest path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CycleResult {
    pub id: usize,
    pub nodes: Vec<NormalizedPath>,
    pub readable_path: String,
}

impl CycleResult {
    fn new(id: usize, nodes: Vec<NormalizedPath>) -> Self {
        let readable_path = join(&nodes);
        Self { id, nodes, readable_path }
    }

    #[must_use]
    pub fn is_self_loop(&self) -> bool {
        self.nodes.len() == 1
    }

    /// Renders the loop with its closing arrow, e.g. `a -> b -> a`.
    #[must_use]
    pub fn closed_path(&self) -> String {
        match self.nodes.first() {
            Some(first) => format!("{}{ARROW}{first}", self.readable_path),
            None => String::new(),
        }
    }
}

fn join(nodes: &[NormalizedPath]) -> String {
    nodes
        .iter()
        .map(NormalizedPath::as_str)
        .collect::<Vec<_>>()
        .join(ARROW)
}

/// Finds every distinct cycle reachable through a back-edge.
///
/// Roots are taken in node order and successors in adjacency order, so the
/// result (including ids) is the same on every call for the same graph.
#[must_use]
pub fn find_cycles(graph: &DependencyGraph) -> Vec<CycleResult> {
    let mut state = DfsState::default();

    for node in graph.nodes() {
        if !state.colors.contains_key(node.id.as_str()) {
            explore(graph, &node.id, &mut state);
        }
    }

    state.cycles
}

#[derive(Clone, Copy)]
enum Color {
    /// On the traversal stack at this index.
    InProgress(usize),
    Done,
}

struct Frame<'g> {
    node: &'g NormalizedPath,
    next_edge: usize,
}

/// Per-call traversal state. Absent from `colors` means unvisited.
#[derive(Default)]
struct DfsState<'g> {
    colors: HashMap<&'g str, Color>,
    stack: Vec<Frame<'g>>,
    seen: HashSet<Vec<NormalizedPath>>,
    cycles: Vec<CycleResult>,
}

impl<'g> DfsState<'g> {
    fn enter(&mut self, node: &'g NormalizedPath) {
        self.colors
            .insert(node.as_str(), Color::InProgress(self.stack.len()));
        self.stack.push(Frame { node, next_edge: 0 });
    }

    fn leave(&mut self) {
        if let Some(frame) = self.stack.pop() {
            self.colors.insert(frame.node.as_str(), Color::Done);
        }
    }

    fn record_cycle(&mut self, start: usize) {
        let Some(members) = self.stack.get(start..) else {
            return;
        };
        let canonical = canonicalize(members.iter().map(|f| f.node));
        if self.seen.contains(&canonical) {
            return;
        }
        self.seen.insert(canonical.clone());
        let id = self.cycles.len() + 1;
        self.cycles.push(CycleResult::new(id, canonical));
    }
}

fn explore<'g>(graph: &'g DependencyGraph, root: &'g NormalizedPath, state: &mut DfsState<'g>) {
    state.enter(root);

    while let Some(frame) = state.stack.last_mut() {
        let successors = graph.dependencies(frame.node.as_str());
        let Some(next) = successors.get(frame.next_edge) else {
            state.leave();
            continue;
        };
        frame.next_edge += 1;

        match state.colors.get(next.as_str()).copied() {
            None => state.enter(next),
            Some(Color::InProgress(start)) => state.record_cycle(start),
            Some(Color::Done) => {}
        }
    }
}

/// Rotates a cycle so it starts at its smallest path.
///
/// Cycle members are distinct, so the rotation starting at the minimum
/// element is also the element-wise lexicographically smallest rotation.
fn canonicalize<'a, I>(members: I) -> Vec<NormalizedPath>
where
    I: Iterator<Item = &'a NormalizedPath>,
{
    let mut nodes: Vec<NormalizedPath> = members.cloned().collect();
    let start = nodes
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| a.cmp(b))
        .map_or(0, |(i, _)| i);
    nodes.rotate_left(start);
    nodes
}
