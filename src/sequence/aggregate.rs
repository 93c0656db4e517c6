//! Sequence aggregator
//!
//! Groups an ordered stream of candidates into one [`SequenceRecord`] per
//! prefix. Under [`RangePolicy::Sorted`] the input order is load-bearing: the
//! first candidate of a prefix fixes its start index and padding, the last one
//! fixes its end index. Callers must feed candidates in lexicographic filename
//! order, which [`super::build_display_entries`] does.

use std::collections::HashMap;

use super::config::{RangePolicy, SequenceConfig};
use super::types::{FilenameCandidate, SequenceRecord};

/// Insertion-ordered map from prefix to record
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SequenceMap {
    records: Vec<SequenceRecord>,
    by_key: HashMap<String, usize>,
}

impl SequenceMap {
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&SequenceRecord> {
        self.by_key.get(key).map(|&i| &self.records[i])
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.by_key.contains_key(key)
    }

    /// Records in order of first appearance
    pub fn iter(&self) -> impl Iterator<Item = &SequenceRecord> {
        self.records.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn into_records(self) -> Vec<SequenceRecord> {
        self.records
    }
}

/// Incremental grouping state for one listing
#[derive(Debug)]
pub struct Aggregator<'a> {
    config: &'a SequenceConfig,
    map: SequenceMap,
}

impl<'a> Aggregator<'a> {
    #[must_use]
    pub fn new(config: &'a SequenceConfig) -> Self {
        Self {
            config,
            map: SequenceMap::default(),
        }
    }

    /// Feed the next candidate
    ///
    /// Returns `false` when the candidate is rejected by the extension
    /// allowlist; such files are plain files for display purposes.
    pub fn push(&mut self, filename: &str, candidate: &FilenameCandidate) -> bool {
        if !self.config.allows(&candidate.extension) {
            tracing::trace!(filename, extension = %candidate.extension, "extension not allowed");
            return false;
        }
        let Some(number) = candidate.number() else {
            return false;
        };

        if let Some(&i) = self.map.by_key.get(&candidate.prefix) {
            let record = &mut self.map.records[i];
            match self.config.range_policy {
                RangePolicy::Sorted => record.end_index = number,
                RangePolicy::MinMax => {
                    record.start_index = record.start_index.min(number);
                    record.end_index = record.end_index.max(number);
                }
            }
        } else {
            tracing::trace!(filename, prefix = %candidate.prefix, "new sequence");
            self.map
                .by_key
                .insert(candidate.prefix.clone(), self.map.records.len());
            self.map.records.push(SequenceRecord::first(candidate, number));
        }
        true
    }

    /// Finalize; records are not mutated afterwards
    #[must_use]
    pub fn finish(self) -> SequenceMap {
        self.map
    }
}

/// Group an ordered candidate stream
pub fn aggregate<'f, I>(candidates: I, config: &SequenceConfig) -> SequenceMap
where
    I: IntoIterator<Item = (&'f str, FilenameCandidate)>,
{
    let mut aggregator = Aggregator::new(config);
    for (filename, candidate) in candidates {
        aggregator.push(filename, &candidate);
    }
    let map = aggregator.finish();
    tracing::debug!(sequences = map.len(), "aggregated candidates");
    map
}
