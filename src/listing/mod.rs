//! Directory listing for the sequence engine
//!
//! The engine works on plain base names; this module is the host side that
//! reads them from disk. Only regular files directly inside the directory are
//! listed. Folders are skipped and nothing is traversed recursively.

pub mod error;

pub use error::ListingError;

use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

/// Listing snapshot of one directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryListing {
    pub directory: PathBuf,
    pub entries: Vec<String>,
}

/// List base names of the regular files in `path`
///
/// Entries with non UTF-8 names are skipped with a warning. The returned
/// order is the filesystem's; the engine sorts on its own.
///
/// # Errors
///
/// Returns `ListingError::NotADirectory` if `path` is not a directory and
/// `ListingError::Read` if the directory or one of its entries cannot be read.
pub fn list_directory_entries(path: &Path) -> Result<Vec<String>, ListingError> {
    if !path.is_dir() {
        return Err(ListingError::NotADirectory(path.to_path_buf()));
    }

    let read_err = |source: std::io::Error| ListingError::Read {
        path: path.to_path_buf(),
        source,
    };

    let mut entries = Vec::new();
    for entry in fs::read_dir(path).map_err(read_err)? {
        let entry = entry.map_err(read_err)?;
        // Follow symlinks so linked frames still count as files
        let is_file = fs::metadata(entry.path()).is_ok_and(|m| m.is_file());
        if !is_file {
            continue;
        }
        match entry.file_name().into_string() {
            Ok(name) => entries.push(name),
            Err(raw) => tracing::warn!("Skipping non UTF-8 filename {raw:?} in {}", path.display()),
        }
    }

    tracing::info!("Listed {} file(s) in {}", entries.len(), path.display());
    Ok(entries)
}

/// List several directories in parallel
///
/// Each directory gets its own snapshot; results keep the order of `paths`.
#[must_use]
pub fn list_many(paths: &[PathBuf]) -> Vec<Result<DirectoryListing, ListingError>> {
    paths
        .par_iter()
        .map(|directory| {
            list_directory_entries(directory).map(|entries| DirectoryListing {
                directory: directory.clone(),
                entries,
            })
        })
        .collect()
}
