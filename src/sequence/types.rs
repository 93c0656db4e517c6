//! Core data types for the sequence engine
//!
//! These types are recomputed from a directory listing on every call and are
//! never persisted.

use serde::Serialize;
use std::fmt;

use super::codec;

/// A filename that syntactically fits the sequence-member pattern
///
/// Produced by [`super::matcher::match_filename`] before any extension
/// allowlist filtering takes place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilenameCandidate {
    /// Everything before the digit run, minus one `.` separator
    pub prefix: String,
    /// The digit run, leading zeros preserved
    pub index: String,
    /// Final extension without the dot
    pub extension: String,
}

impl FilenameCandidate {
    /// Numeric value of the index
    ///
    /// Returns `None` only when the digit run does not fit in a `u64`; the
    /// matcher never yields such candidates.
    #[must_use]
    pub fn number(&self) -> Option<u64> {
        self.index.parse().ok()
    }

    /// Digit count of the index, including leading zeros
    #[must_use]
    pub fn padding(&self) -> usize {
        self.index.len()
    }
}

/// One collapsed sequence, keyed by prefix
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SequenceRecord {
    /// Shared prefix of every member
    pub key: String,
    /// Extension of the first member seen
    pub extension: String,
    /// Index shown at the start of the range
    pub start_index: u64,
    /// Index shown at the end of the range
    pub end_index: u64,
    /// Digit count of the first member's index
    pub padding: usize,
}

impl SequenceRecord {
    /// Start a record from the first candidate seen for its prefix
    #[must_use]
    pub fn first(candidate: &FilenameCandidate, number: u64) -> Self {
        Self {
            key: candidate.prefix.clone(),
            extension: candidate.extension.clone(),
            start_index: number,
            end_index: number,
            padding: candidate.padding(),
        }
    }

    /// True when the record stands for exactly one file
    #[must_use]
    pub const fn is_single(&self) -> bool {
        self.start_index == self.end_index
    }
}

impl fmt::Display for SequenceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&codec::encode(self))
    }
}

/// One line of the display list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DisplayEntry {
    /// A collapsed sequence descriptor
    Sequence(SequenceRecord),
    /// A filename that is not part of any sequence
    File { name: String },
}

impl DisplayEntry {
    #[must_use]
    pub const fn is_sequence(&self) -> bool {
        matches!(self, Self::Sequence(_))
    }
}

impl fmt::Display for DisplayEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sequence(record) => fmt::Display::fmt(record, f),
            Self::File { name } => f.write_str(name),
        }
    }
}

/// Outcome of expanding a user selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Nothing was selected; hosts report this as an informational message
    Empty,
    /// Ordered member filenames of everything selected
    Files(Vec<String>),
}

impl Selection {
    /// Member filenames, empty for [`Selection::Empty`]
    #[must_use]
    pub fn files(&self) -> &[String] {
        match self {
            Self::Empty => &[],
            Self::Files(files) => files,
        }
    }
}
