//! Engine configuration
//!
//! Passed explicitly into every engine entry point; the engine keeps no
//! global state.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Image formats collapsed into sequences unless configured otherwise
pub const DEFAULT_EXTENSIONS: [&str; 4] = ["jpg", "png", "tif", "exr"];

/// How a sequence's start and end indices are chosen
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum RangePolicy {
    /// First and last member in lexicographic filename order
    ///
    /// Matches numeric order only when every member shares the same padding.
    #[default]
    Sorted,
    /// Numeric minimum and maximum over all members
    MinMax,
}

impl std::str::FromStr for RangePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sorted" => Ok(Self::Sorted),
            "min-max" | "minmax" => Ok(Self::MinMax),
            other => Err(format!("Unknown range policy '{other}'. Use 'sorted' or 'min-max'")),
        }
    }
}

impl std::fmt::Display for RangePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sorted => f.write_str("sorted"),
            Self::MinMax => f.write_str("min-max"),
        }
    }
}

/// Configuration consumed by the aggregator and the entry points
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct SequenceConfig {
    /// Extensions (case-sensitive) whose candidates are grouped into sequences
    #[serde(default = "default_extensions")]
    pub allowed_extensions: BTreeSet<String>,

    /// Group every candidate regardless of extension
    #[serde(default)]
    pub all_extensions: bool,

    /// Start/end selection for each sequence
    #[serde(default)]
    pub range_policy: RangePolicy,
}

fn default_extensions() -> BTreeSet<String> {
    DEFAULT_EXTENSIONS.iter().map(|e| (*e).to_string()).collect()
}

impl Default for SequenceConfig {
    fn default() -> Self {
        Self {
            allowed_extensions: default_extensions(),
            all_extensions: false,
            range_policy: RangePolicy::default(),
        }
    }
}

impl SequenceConfig {
    /// Replace the allowlist
    #[must_use]
    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_extensions = extensions.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub const fn with_all_extensions(mut self, v: bool) -> Self {
        self.all_extensions = v;
        self
    }

    #[must_use]
    pub const fn with_range_policy(mut self, policy: RangePolicy) -> Self {
        self.range_policy = policy;
        self
    }

    /// Whether candidates with this extension may join a sequence
    #[must_use]
    pub fn allows(&self, extension: &str) -> bool {
        self.all_extensions || self.allowed_extensions.contains(extension)
    }
}
