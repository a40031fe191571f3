//! Circular import detection for JavaScript, TypeScript and Vue projects.
//!
//! The core pipeline is [`build_dependency_graph`] followed by
//! [`find_cycles`]; [`analyze`] wraps both behind archive and directory
//! loading.

pub mod analyze;
pub mod cli;
pub mod config;
pub mod error;
pub mod exit;
pub mod graph;
pub mod loader;
pub mod logging;
pub mod reporting;
pub mod source;

pub use analyze::{analyze, Analysis};
pub use error::{KnotError, Result};
pub use graph::{
    build_dependency_graph, build_dependency_graph_with, find_cycles, CycleResult,
    DependencyEdge, DependencyGraph, FileNode, ResolveOptions,
};
pub use source::{NormalizedPath, PathPolicy, SourceFile, SourceSet};
