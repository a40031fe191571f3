// src/graph/resolver.rs
use std::collections::HashSet;

use crate::source::path::resolve_relative;
use crate::source::NormalizedPath;

/// Extensions tried when an import omits one, highest priority first.
pub const DEFAULT_EXTENSIONS: &[&str] = &[".ts", ".tsx", ".js", ".jsx", ".vue"];

/// Resolution settings. Extension order is priority order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveOptions {
    pub extensions: Vec<String>,
    /// Also try `<dir>/index<ext>` when nothing else matched.
    pub index_files: bool,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| (*e).to_string()).collect(),
            index_files: false,
        }
    }
}

impl ResolveOptions {
    fn has_known_extension(&self, candidate: &str) -> bool {
        let lower = candidate.to_lowercase();
        self.extensions
            .iter()
            .any(|ext| lower.ends_with(&ext.to_lowercase()))
    }
}

/// Resolves a relative import to a file in the project.
///
/// Returns `None` when nothing matches; that is the normal outcome for
/// assets and misnamed imports, not an error.
#[must_use]
pub fn resolve(
    importer: &NormalizedPath,
    spec: &str,
    known: &HashSet<NormalizedPath>,
    options: &ResolveOptions,
) -> Option<NormalizedPath> {
    let candidate = resolve_relative(importer.parent(), spec);
    if candidate.is_empty() {
        return None;
    }

    if options.has_known_extension(&candidate) {
        if let Some(hit) = known.get(candidate.as_str()) {
            return Some(hit.clone());
        }
    }

    check_extensions(&candidate, known, options)
        .or_else(|| check_index(&candidate, known, options))
}

fn check_extensions(
    candidate: &str,
    known: &HashSet<NormalizedPath>,
    options: &ResolveOptions,
) -> Option<NormalizedPath> {
    options
        .extensions
        .iter()
        .find_map(|ext| known.get(format!("{candidate}{ext}").as_str()))
        .cloned()
}

fn check_index(
    candidate: &str,
    known: &HashSet<NormalizedPath>,
    options: &ResolveOptions,
) -> Option<NormalizedPath> {
    if !options.index_files {
        return None;
    }
    options
        .extensions
        .iter()
        .find_map(|ext| known.get(format!("{candidate}/index{ext}").as_str()))
        .cloned()
}
