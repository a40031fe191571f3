// src/loader.rs
//! Turns a project archive or directory into raw `(path, content)` pairs.

use std::fs::{self, File};
use std::io::{BufReader, Read, Seek};
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::debug;
use walkdir::{DirEntry, WalkDir};
use zip::ZipArchive;

use crate::config::PathFilter;
use crate::error::{KnotError, Result};

const PRUNE_DIRS: &[&str] = &[".git", "node_modules"];

/// Largest decompressed archive entry that will be read.
pub const MAX_ENTRY_BYTES: u64 = 16 * 1024 * 1024;

/// A file as it came out of the archive or directory, before normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawFile {
    pub path: String,
    pub content: String,
}

/// Where a project comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectInput {
    Archive(PathBuf),
    Directory(PathBuf),
}

impl ProjectInput {
    /// Directories are walked; anything else is treated as a zip archive.
    ///
    /// # Errors
    /// Returns `Io` if the path does not exist.
    pub fn detect(path: &Path) -> Result<Self> {
        let meta = fs::metadata(path).map_err(|source| KnotError::Io {
            source,
            path: path.to_path_buf(),
        })?;
        Ok(if meta.is_dir() {
            Self::Directory(path.to_path_buf())
        } else {
            Self::Archive(path.to_path_buf())
        })
    }
}

/// Loads every accepted source file, sorted by path.
///
/// # Errors
/// Archive errors surface as `ArchiveParse`, filesystem errors as `Io`.
pub fn load(input: &ProjectInput, filter: &PathFilter) -> Result<Vec<RawFile>> {
    let mut files = match input {
        ProjectInput::Archive(path) => load_archive(path, filter)?,
        ProjectInput::Directory(root) => load_directory(root, filter)?,
    };
    files.sort_by(|a, b| a.path.cmp(&b.path));
    debug!(count = files.len(), "source files loaded");
    Ok(files)
}

/// # Errors
/// Returns `ArchiveParse` if the file is not a readable zip archive.
pub fn load_archive(path: &Path, filter: &PathFilter) -> Result<Vec<RawFile>> {
    let file = File::open(path).map_err(|source| KnotError::Io {
        source,
        path: path.to_path_buf(),
    })?;
    load_archive_from(BufReader::new(file), filter)
}

/// Reads a zip archive from any seekable reader.
///
/// # Errors
/// Returns `ArchiveParse` on a corrupt archive, an unreadable entry, or an
/// entry larger than [`MAX_ENTRY_BYTES`].
pub fn load_archive_from<R: Read + Seek>(reader: R, filter: &PathFilter) -> Result<Vec<RawFile>> {
    load_archive_capped(reader, filter, MAX_ENTRY_BYTES)
}

fn load_archive_capped<R: Read + Seek>(
    reader: R,
    filter: &PathFilter,
    max_entry: u64,
) -> Result<Vec<RawFile>> {
    let mut archive = ZipArchive::new(reader)?;
    let mut files = Vec::new();

    for index in 0..archive.len() {
        let mut entry = archive.by_index(index)?;
        if entry.is_dir() {
            continue;
        }

        let path = entry.name().replace('\\', "/");
        if !filter.accepts(&path) {
            continue;
        }

        let mut bytes = Vec::new();
        entry
            .by_ref()
            .take(max_entry + 1)
            .read_to_end(&mut bytes)
            .map_err(|e| KnotError::ArchiveParse(format!("{path}: {e}")))?;
        if bytes.len() as u64 > max_entry {
            return Err(KnotError::ArchiveParse(format!(
                "{path}: entry exceeds {max_entry} bytes"
            )));
        }
        files.push(RawFile {
            path,
            content: String::from_utf8_lossy(&bytes).into_owned(),
        });
    }

    Ok(files)
}

/// Walks `root` and reads accepted files in parallel.
///
/// # Errors
/// Returns `Io` on the first directory that cannot be listed or accepted
/// file that cannot be read.
pub fn load_directory(root: &Path, filter: &PathFilter) -> Result<Vec<RawFile>> {
    let walker = WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !should_prune(e));

    let paths = accumulate_walker(walker, root, filter)?;

    paths
        .par_iter()
        .map(|(relative, full)| read_source(relative, full))
        .collect()
}

fn should_prune(entry: &DirEntry) -> bool {
    entry.file_type().is_dir()
        && PRUNE_DIRS
            .iter()
            .any(|d| entry.file_name().to_string_lossy() == *d)
}

/// Collects accepted files. A skipped directory would drop its files from
/// the graph, so the first walk error aborts.
fn accumulate_walker<I>(walker: I, root: &Path, filter: &PathFilter) -> Result<Vec<(String, PathBuf)>>
where
    I: Iterator<Item = walkdir::Result<DirEntry>>,
{
    let mut paths = Vec::new();
    for item in walker {
        let entry = item?;
        if !entry.file_type().is_file() {
            continue;
        }
        let relative = relative_path(entry.path(), root);
        if filter.accepts(&relative) {
            paths.push((relative, entry.into_path()));
        }
    }
    Ok(paths)
}

/// Root-relative path with forward slashes.
fn relative_path(path: &Path, root: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    rel.to_string_lossy().replace('\\', "/")
}

fn read_source(relative: &str, full: &Path) -> Result<RawFile> {
    let bytes = fs::read(full).map_err(|source| KnotError::Io {
        source,
        path: full.to_path_buf(),
    })?;
    Ok(RawFile {
        path: relative.to_string(),
        content: String::from_utf8_lossy(&bytes).into_owned(),
    })
}
