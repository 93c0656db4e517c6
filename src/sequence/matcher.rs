//! Filename pattern matcher
//!
//! Classifies a single filename as a sequence candidate or a plain file.
//!
//! A candidate is a non-empty prefix, a maximal run of ASCII digits, a literal
//! `.` and a final extension of 3 or 4 characters without any further dot or
//! whitespace:
//!
//! ```text
//! render.0042.exr   -> prefix "render", index "0042", extension "exr"
//! long.file.7.pdf   -> prefix "long.file", index "7", extension "pdf"
//! shot_v012.tif     -> prefix "shot_v", index "012", extension "tif"
//! ```
//!
//! Exactly one `.` directly in front of the digit run is treated as the
//! separator and dropped from the prefix. Any other separator (`_`, `-`, ...)
//! stays part of the literal prefix. The descriptor format always writes the
//! separator back as `.`.

use regex::Regex;
use std::sync::LazyLock;

use super::types::FilenameCandidate;

/// Separator stripped between prefix and digit run
pub const SEPARATOR: char = '.';

static CANDIDATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^(?P<head>.*[^0-9])(?P<index>[0-9]+)\.(?P<ext>[^.\s]{3,4})$")
        .expect("candidate pattern is a valid regex")
});

/// Classify one filename
///
/// Returns `None` (never an error) for names without a digit run right before
/// the extension, for purely numeric names, for names whose prefix is only a
/// separator, and for extensions shorter than 3 or longer than 4 characters.
/// Digit runs too large for a `u64` are also rejected.
#[must_use]
pub fn match_filename(filename: &str) -> Option<FilenameCandidate> {
    let caps = CANDIDATE_RE.captures(filename)?;
    let head = &caps["head"];
    let prefix = head.strip_suffix(SEPARATOR).unwrap_or(head);
    if prefix.is_empty() {
        return None;
    }

    let candidate = FilenameCandidate {
        prefix: prefix.to_string(),
        index: caps["index"].to_string(),
        extension: caps["ext"].to_string(),
    };
    // An index must be representable to take part in a range
    candidate.number()?;
    Some(candidate)
}
