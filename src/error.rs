// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum KnotError {
    #[error("malformed path '{path}': {reason}")]
    MalformedPath { path: String, reason: &'static str },

    #[error("failed to parse zip file: {0}")]
    ArchiveParse(String),

    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("invalid configuration in {path}: {message}")]
    Config { path: PathBuf, message: String },

    #[error("invalid filter pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("analysis failed: {message}")]
    AnalysisFailed { message: String, input_failure: bool },
}

pub type Result<T> = std::result::Result<T, KnotError>;

impl KnotError {
    /// Wraps any failure as the single message surfaced to the user.
    #[must_use]
    pub fn consolidate(self) -> Self {
        match self {
            Self::AnalysisFailed { .. } => self,
            other => Self::AnalysisFailed {
                input_failure: other.is_input_failure(),
                message: other.to_string(),
            },
        }
    }

    /// True when the input itself could not be read as a project.
    #[must_use]
    pub fn is_input_failure(&self) -> bool {
        match self {
            Self::ArchiveParse(_) | Self::Io { .. } => true,
            Self::AnalysisFailed { input_failure, .. } => *input_failure,
            _ => false,
        }
    }
}

impl From<walkdir::Error> for KnotError {
    fn from(e: walkdir::Error) -> Self {
        let path = e.path().map_or_else(|| PathBuf::from("<unknown>"), PathBuf::from);
        match e.into_io_error() {
            Some(source) => KnotError::Io { source, path },
            None => KnotError::Io {
                source: std::io::Error::new(std::io::ErrorKind::Other, "filesystem loop"),
                path,
            },
        }
    }
}

impl From<zip::result::ZipError> for KnotError {
    fn from(e: zip::result::ZipError) -> Self {
        KnotError::ArchiveParse(e.to_string())
    }
}
