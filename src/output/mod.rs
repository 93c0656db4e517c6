//! Output formatting for CLI display
//!
//! Human output highlights collapsed sequences, quiet output prints bare
//! lines for scripting, and JSON output carries the full records.

use colored::Colorize;
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::sequence::DisplayEntry;

/// How results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OutputOptions {
    /// Only print results
    pub quiet: bool,
    /// Print JSON documents instead of lines
    pub json: bool,
}

/// Format a display entry as one line
#[must_use]
pub fn display_entry(entry: &DisplayEntry, quiet: bool) -> String {
    let text = entry.to_string();
    if quiet {
        text
    } else if entry.is_sequence() {
        format!("  {}", text.cyan())
    } else {
        format!("  {text}")
    }
}

/// Header printed above a directory's entries
#[must_use]
pub fn directory_header(directory: &Path, count: usize) -> String {
    format!("{} ({count} entries)", directory.display().to_string().bold())
}

#[derive(Serialize)]
struct JsonEntry<'a> {
    display: String,
    #[serde(flatten)]
    entry: &'a DisplayEntry,
}

#[derive(Serialize)]
struct JsonListing<'a> {
    directory: &'a Path,
    entries: Vec<JsonEntry<'a>>,
}

#[derive(Serialize)]
struct JsonFiles<'a> {
    files: &'a [String],
}

fn listing_doc<'a>(directory: &'a Path, entries: &'a [DisplayEntry]) -> JsonListing<'a> {
    JsonListing {
        directory,
        entries: entries
            .iter()
            .map(|entry| JsonEntry {
                display: entry.to_string(),
                entry,
            })
            .collect(),
    }
}

/// JSON document for one directory's display list
///
/// # Errors
/// Returns `serde_json::Error` if serialization fails.
pub fn listing_json(directory: &Path, entries: &[DisplayEntry]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&listing_doc(directory, entries))
}

/// JSON array of listing documents, one per directory
///
/// # Errors
/// Returns `serde_json::Error` if serialization fails.
pub fn listings_json(listings: &[(PathBuf, Vec<DisplayEntry>)]) -> Result<String, serde_json::Error> {
    let docs: Vec<JsonListing<'_>> = listings
        .iter()
        .map(|(directory, entries)| listing_doc(directory, entries))
        .collect();
    serde_json::to_string_pretty(&docs)
}

/// JSON document for an expanded selection
///
/// # Errors
/// Returns `serde_json::Error` if serialization fails.
pub fn files_json(files: &[String]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&JsonFiles { files })
}
