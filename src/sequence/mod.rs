//! File-sequence detection and collapsing engine
//!
//! Pipeline: listing -> [`matcher`] -> [`aggregate`](mod@aggregate) -> [`codec`] -> display
//! list, and selection -> [`codec`] (decode) -> [`expand`] -> member filenames.
//!
//! Every entry point is a pure function of its inputs. Nothing touches the
//! filesystem here; listings come from the host (see [`crate::listing`]).
//!
//! # Examples
//!
//! ```
//! use seqview::sequence::{build_display_list, expand_selection, SequenceConfig};
//!
//! let listing = ["a.0001.jpg", "a.0002.jpg", "a.0003.jpg", "notes.txt"];
//! let display = build_display_list(&listing, &SequenceConfig::default());
//! assert_eq!(display, vec!["a.%04d.jpg 1-3", "notes.txt"]);
//!
//! let files = expand_selection(&display[0], &listing);
//! assert_eq!(files, vec!["a.0001.jpg", "a.0002.jpg", "a.0003.jpg"]);
//! ```

pub mod aggregate;
pub mod codec;
pub mod config;
pub mod expand;
pub mod matcher;
pub mod types;

pub use aggregate::{Aggregator, SequenceMap, aggregate};
pub use codec::{decode, encode, is_collapsed};
pub use config::{DEFAULT_EXTENSIONS, RangePolicy, SequenceConfig};
pub use expand::{expand_selection, expand_selections};
pub use matcher::match_filename;
pub use types::{DisplayEntry, FilenameCandidate, Selection, SequenceRecord};

use std::collections::HashSet;

/// Sort and de-duplicate a raw listing
fn sorted_listing<S: AsRef<str>>(entries: &[S]) -> Vec<&str> {
    let mut names: Vec<&str> = entries.iter().map(AsRef::<str>::as_ref).collect();
    names.sort_unstable();
    names.dedup();
    names
}

/// Build the typed display list for a directory listing
///
/// The listing is sorted lexicographically before matching, which fixes the
/// start/end indices under [`RangePolicy::Sorted`]. Each entry takes the
/// position of its first member in that order.
#[must_use]
pub fn build_display_entries<S: AsRef<str>>(
    entries: &[S],
    config: &SequenceConfig,
) -> Vec<DisplayEntry> {
    let names = sorted_listing(entries);

    // Classify once, remembering which names joined a sequence
    let mut aggregator = Aggregator::new(config);
    let classified: Vec<(&str, Option<String>)> = names
        .iter()
        .map(|&name| {
            let key = match_filename(name)
                .filter(|candidate| aggregator.push(name, candidate))
                .map(|candidate| candidate.prefix);
            (name, key)
        })
        .collect();
    let sequences = aggregator.finish();

    let mut emitted: HashSet<&str> = HashSet::with_capacity(sequences.len());
    let mut lines = Vec::with_capacity(names.len());
    for (name, key) in &classified {
        match key {
            Some(key) => {
                if emitted.insert(key.as_str())
                    && let Some(record) = sequences.get(key)
                {
                    lines.push(DisplayEntry::Sequence(record.clone()));
                }
            }
            None => lines.push(DisplayEntry::File {
                name: (*name).to_string(),
            }),
        }
    }

    tracing::debug!(
        listed = names.len(),
        sequences = sequences.len(),
        displayed = lines.len(),
        "built display list"
    );
    lines
}

/// Build the display strings for a directory listing
///
/// Plain files pass through unchanged; each sequence appears once as its
/// collapsed descriptor.
#[must_use]
pub fn build_display_list<S: AsRef<str>>(entries: &[S], config: &SequenceConfig) -> Vec<String> {
    build_display_entries(entries, config)
        .iter()
        .map(ToString::to_string)
        .collect()
}
