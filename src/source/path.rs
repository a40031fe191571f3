// src/source/path.rs
//! Forward-slash path handling for project-relative module paths.
//!
//! Everything here is plain string manipulation. Nothing touches the host
//! filesystem, so results are identical on every platform.

use std::borrow::Borrow;
use std::fmt;

use serde::Serialize;

use crate::error::{KnotError, Result};

/// A root-relative, `/`-separated path with no leading slash and no
/// `.`/`..` segments.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct NormalizedPath(String);

impl NormalizedPath {
    /// Normalizes a raw archive or filesystem path.
    ///
    /// # Errors
    /// Returns `MalformedPath` if the path is empty, contains NUL, or climbs
    /// above the project root.
    pub fn parse(raw: &str) -> Result<Self> {
        if raw.contains('\0') {
            return Err(malformed(raw, "contains a NUL character"));
        }

        let unified = raw.replace('\\', "/");
        let mut segments: Vec<&str> = Vec::new();

        for segment in unified.split('/') {
            match segment {
                "" | "." => {}
                ".." => {
                    if segments.pop().is_none() {
                        return Err(malformed(raw, "escapes the project root"));
                    }
                }
                other => segments.push(other),
            }
        }

        if segments.is_empty() {
            return Err(malformed(raw, "is empty"));
        }

        Ok(Self(segments.join("/")))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Final path segment, e.g. `b.ts` for `src/a/b.ts`.
    #[must_use]
    pub fn file_name(&self) -> &str {
        basename(&self.0)
    }

    /// Directory part, `""` for files at the root.
    #[must_use]
    pub fn parent(&self) -> &str {
        dirname(&self.0)
    }
}

impl fmt::Display for NormalizedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for NormalizedPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for NormalizedPath {
    fn borrow(&self) -> &str {
        &self.0
    }
}

fn malformed(raw: &str, reason: &'static str) -> KnotError {
    KnotError::MalformedPath {
        path: raw.to_string(),
        reason,
    }
}

/// Directory portion of a normalized path (`""` at the root).
#[must_use]
pub fn dirname(path: &str) -> &str {
    path.rfind('/').map_or("", |i| &path[..i])
}

/// Final segment of a normalized path.
#[must_use]
pub fn basename(path: &str) -> &str {
    path.rfind('/').map_or(path, |i| &path[i + 1..])
}

/// Resolves `spec` against `dir` as if `dir` sat under a virtual `/` root,
/// then drops the leading slash.
///
/// `..` segments that would climb above the root stay at the root. Returns
/// an empty string when the result is the root itself.
#[must_use]
pub fn resolve_relative(dir: &str, spec: &str) -> String {
    let mut segments: Vec<&str> = Vec::new();

    let spec_is_absolute = spec.starts_with('/');
    let base = if spec_is_absolute { "" } else { dir };

    for segment in base.split('/').chain(spec.split('/')) {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            other => segments.push(other),
        }
    }

    segments.join("/")
}
