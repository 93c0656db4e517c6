//! Seqview - collapse numbered file sequences in directory listings
//!
//! The [`sequence`] engine turns a flat listing such as `render.0001.jpg` ...
//! `render.0012.jpg` into a single descriptor `render.%04d.jpg 1-12` and can
//! expand a descriptor back into its member filenames. The remaining modules
//! are the command-line host around it: directory listing, configuration and
//! output formatting.

use thiserror::Error;

pub mod cli;
pub mod commands;
pub mod config;
pub mod listing;
pub mod output;
pub mod sequence;

/// Error enum, contains all failure states of the program
///
/// The sequence engine itself never fails; every variant comes from the host.
#[derive(Debug, Error)]
pub enum SeqviewError {
    /// Directory listing error
    #[error("Listing error: {0}")]
    ListingError(#[from] listing::ListingError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// Interactive prompt failed
    #[error("Prompt error: {0}")]
    PromptError(#[from] dialoguer::Error),
    /// JSON output could not be produced
    #[error("Serialization error: {0}")]
    SerializeError(#[from] serde_json::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, SeqviewError>;
