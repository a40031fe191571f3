// src/config/mod.rs
pub mod types;

pub use self::types::Config;

use std::fs;
use std::path::{Path, PathBuf};

use regex::Regex;
use tracing::debug;

use crate::error::{KnotError, Result};
use crate::graph::ResolveOptions;
use crate::source::PathPolicy;

pub const CONFIG_FILE: &str = "knotscan.toml";

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads `knotscan.toml` from the working directory, or `explicit` if given.
    ///
    /// A missing default file yields the defaults; a missing explicit file is
    /// an error.
    ///
    /// # Errors
    /// Returns error if the file cannot be read or is not valid TOML.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = explicit.map_or_else(|| PathBuf::from(CONFIG_FILE), Path::to_path_buf);

        if explicit.is_none() && !path.exists() {
            debug!("no {CONFIG_FILE}, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|source| KnotError::Io {
            source,
            path: path.clone(),
        })?;
        let config = Self::parse_toml(&content, &path)?;
        config.validate(&path)?;
        debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// # Errors
    /// Returns `Config` error on invalid TOML.
    pub fn parse_toml(content: &str, path: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|e| KnotError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Checks that the extension list is usable and every pattern compiles.
    ///
    /// # Errors
    /// Returns the first problem found.
    pub fn validate(&self, path: &Path) -> Result<()> {
        if self.extensions.is_empty() {
            return Err(config_error(path, "`extensions` must not be empty"));
        }
        if let Some(bad) = self.extensions.iter().find(|e| !e.starts_with('.') || e.len() < 2) {
            return Err(config_error(path, &format!("extension '{bad}' must look like '.ts'")));
        }
        self.filters()?;
        Ok(())
    }

    #[must_use]
    pub fn resolve_options(&self) -> ResolveOptions {
        ResolveOptions {
            extensions: self.extensions.clone(),
            index_files: self.resolve_index,
        }
    }

    #[must_use]
    pub fn path_policy(&self) -> PathPolicy {
        if self.strict_paths {
            PathPolicy::Strict
        } else {
            PathPolicy::Skip
        }
    }

    /// Compiles the include/exclude patterns.
    ///
    /// # Errors
    /// Returns `InvalidPattern` for the first regex that fails to compile.
    pub fn filters(&self) -> Result<PathFilter> {
        Ok(PathFilter {
            extensions: self.extensions.iter().map(|e| e.to_lowercase()).collect(),
            include: compile_all(&self.include)?,
            exclude: compile_all(&self.exclude)?,
        })
    }
}

fn config_error(path: &Path, message: &str) -> KnotError {
    KnotError::Config {
        path: path.to_path_buf(),
        message: message.to_string(),
    }
}

fn compile_all(patterns: &[String]) -> Result<Vec<Regex>> {
    patterns
        .iter()
        .map(|p| Regex::new(p).map_err(KnotError::from))
        .collect()
}

/// Decides which archive or directory entries become source files.
#[derive(Debug, Clone)]
pub struct PathFilter {
    extensions: Vec<String>,
    include: Vec<Regex>,
    exclude: Vec<Regex>,
}

impl Default for PathFilter {
    fn default() -> Self {
        Self {
            extensions: crate::graph::DEFAULT_EXTENSIONS
                .iter()
                .map(|e| (*e).to_string())
                .collect(),
            include: Vec::new(),
            exclude: Vec::new(),
        }
    }
}

impl PathFilter {
    /// True for `/`-separated paths with an allowed extension that pass the
    /// include and exclude patterns.
    #[must_use]
    pub fn accepts(&self, path: &str) -> bool {
        let lower = path.to_lowercase();
        if !self.extensions.iter().any(|ext| lower.ends_with(ext.as_str())) {
            return false;
        }
        if !self.include.is_empty() && !self.include.iter().any(|re| re.is_match(path)) {
            return false;
        }
        !self.exclude.iter().any(|re| re.is_match(path))
    }
}
