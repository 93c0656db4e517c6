//! Collapsed notation codec
//!
//! A multi-member sequence is written as
//! `<prefix>.%0<padding>d.<extension> <start>-<end>`, a single-member one as
//! `<prefix>.<start>.<extension>` with no padding token and no zero fill.
//! Only the multi-member form decodes; everything else is a literal filename.

use regex::Regex;
use std::sync::LazyLock;

use super::types::SequenceRecord;

static DESCRIPTOR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?s)^(?P<prefix>.+)\.%0(?P<padding>[0-9]+)d\.(?P<ext>[^.\s]{3,4}) (?P<start>[0-9]+)-(?P<end>[0-9]+)$",
    )
    .expect("descriptor pattern is a valid regex")
});

/// Format a record for display
#[must_use]
pub fn encode(record: &SequenceRecord) -> String {
    if record.is_single() {
        format!("{}.{}.{}", record.key, record.start_index, record.extension)
    } else {
        format!(
            "{}.%0{}d.{} {}-{}",
            record.key, record.padding, record.extension, record.start_index, record.end_index
        )
    }
}

/// Parse a collapsed descriptor back into its record
///
/// Returns `None` for anything that is not a multi-member descriptor,
/// including single-member encodings, which callers treat as literal names.
#[must_use]
pub fn decode(text: &str) -> Option<SequenceRecord> {
    let caps = DESCRIPTOR_RE.captures(text)?;
    let padding: usize = caps["padding"].parse().ok()?;
    if padding == 0 {
        return None;
    }
    Some(SequenceRecord {
        key: caps["prefix"].to_string(),
        extension: caps["ext"].to_string(),
        start_index: caps["start"].parse().ok()?,
        end_index: caps["end"].parse().ok()?,
        padding,
    })
}

/// Whether `text` is a multi-member descriptor
#[must_use]
pub fn is_collapsed(text: &str) -> bool {
    decode(text).is_some()
}
