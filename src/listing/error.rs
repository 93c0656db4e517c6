//! Listing-specific error types
//!
//! Errors raised while reading a directory for the sequence engine. The engine
//! itself never fails; only the host side touching the filesystem does.

use std::path::PathBuf;
use thiserror::Error;

/// Directory listing errors
#[derive(Debug, Error)]
pub enum ListingError {
    /// The path does not exist or is not a directory
    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// The directory or one of its entries could not be read
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
