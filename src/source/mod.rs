// src/source/mod.rs
//! The Source Set: decoded project files keyed by normalized path.

pub mod path;

use std::collections::HashMap;

use serde::Serialize;
use tracing::warn;

use crate::error::Result;
pub use path::NormalizedPath;

/// A single decoded source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceFile {
    path: NormalizedPath,
    content: String,
}

impl SourceFile {
    /// # Errors
    /// Returns `MalformedPath` if `path` cannot be normalized.
    pub fn new(path: &str, content: impl Into<String>) -> Result<Self> {
        Ok(Self {
            path: NormalizedPath::parse(path)?,
            content: content.into(),
        })
    }

    #[must_use]
    pub fn path(&self) -> &NormalizedPath {
        &self.path
    }

    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }
}

/// What to do with a file whose path cannot be normalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PathPolicy {
    /// Log and drop the file, keep going.
    #[default]
    Skip,
    /// Abort with the first malformed path.
    Strict,
}

/// Immutable, ordered collection of unique source files.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceSet {
    files: Vec<SourceFile>,
}

impl SourceSet {
    /// Builds a set from raw `(path, content)` pairs.
    ///
    /// Duplicate paths are last-wins: the later content replaces the earlier
    /// entry in place, so ordering stays that of first appearance.
    ///
    /// # Errors
    /// Only under `PathPolicy::Strict`, on the first malformed path.
    pub fn from_raw<I, P, C>(raw: I, policy: PathPolicy) -> Result<Self>
    where
        I: IntoIterator<Item = (P, C)>,
        P: AsRef<str>,
        C: Into<String>,
    {
        let mut files = Vec::new();
        for (path, content) in raw {
            match SourceFile::new(path.as_ref(), content) {
                Ok(file) => files.push(file),
                Err(e) if policy == PathPolicy::Skip => {
                    warn!(error = %e, "skipping source file");
                }
                Err(e) => return Err(e),
            }
        }
        Ok(Self::from_files(files))
    }

    /// Builds a set from already validated files, applying last-wins dedup.
    #[must_use]
    pub fn from_files(files: Vec<SourceFile>) -> Self {
        let mut index: HashMap<NormalizedPath, usize> = HashMap::new();
        let mut unique: Vec<SourceFile> = Vec::with_capacity(files.len());

        for file in files {
            if let Some(&slot) = index.get(&file.path) {
                if let Some(existing) = unique.get_mut(slot) {
                    warn!(path = %file.path, "duplicate source path, keeping the later copy");
                    *existing = file;
                }
                continue;
            }
            index.insert(file.path.clone(), unique.len());
            unique.push(file);
        }

        Self { files: unique }
    }

    #[must_use]
    pub fn files(&self) -> &[SourceFile] {
        &self.files
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SourceFile> {
        self.files.iter()
    }
}

impl<'a> IntoIterator for &'a SourceSet {
    type Item = &'a SourceFile;
    type IntoIter = std::slice::Iter<'a, SourceFile>;

    fn into_iter(self) -> Self::IntoIter {
        self.files.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::KnotError;

    #[test]
    fn test_skip_policy_drops_malformed() {
        let raw = vec![("a.ts", "x"), ("../evil.ts", "y"), ("b.ts", "z")];
        let set = SourceSet::from_raw(raw, PathPolicy::Skip);
        assert!(set.is_ok());
        let set = set.unwrap_or_default();
        let paths: Vec<&str> = set.iter().map(|f| f.path().as_str()).collect();
        assert_eq!(paths, vec!["a.ts", "b.ts"]);
    }

    #[test]
    fn test_strict_policy_aborts() {
        let raw = vec![("a.ts", "x"), ("", "y")];
        let result = SourceSet::from_raw(raw, PathPolicy::Strict);
        assert!(matches!(result, Err(KnotError::MalformedPath { .. })));
    }

    #[test]
    fn test_duplicates_are_last_wins_in_place() {
        let raw = vec![("a.ts", "first"), ("b.ts", "b"), ("./a.ts", "second")];
        let set = SourceSet::from_raw(raw, PathPolicy::Skip).unwrap_or_default();
        assert_eq!(set.len(), 2);
        assert_eq!(set.files()[0].path().as_str(), "a.ts");
        assert_eq!(set.files()[0].content(), "second");
        assert_eq!(set.files()[1].path().as_str(), "b.ts");
    }
}
