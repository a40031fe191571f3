// src/config/types.rs
use serde::{Deserialize, Serialize};

use crate::graph::DEFAULT_EXTENSIONS;

/// Contents of `knotscan.toml`. Every key is optional.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Source extensions, highest resolution priority first.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    /// Resolve `./dir` to `./dir/index.<ext>`.
    #[serde(default)]
    pub resolve_index: bool,
    /// Abort on malformed paths instead of skipping the file.
    #[serde(default)]
    pub strict_paths: bool,
    /// Exit non-zero when any cycle is found.
    #[serde(default)]
    pub deny_cycles: bool,
    /// Regexes a path must match to be analysed (empty = everything).
    #[serde(default)]
    pub include: Vec<String>,
    /// Regexes that remove a path from analysis.
    #[serde(default = "default_exclude")]
    pub exclude: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            resolve_index: false,
            strict_paths: false,
            deny_cycles: false,
            include: Vec::new(),
            exclude: default_exclude(),
        }
    }
}

fn default_extensions() -> Vec<String> {
    DEFAULT_EXTENSIONS.iter().map(|e| (*e).to_string()).collect()
}

fn default_exclude() -> Vec<String> {
    vec![r"(^|/)node_modules/".into()]
}
