//! Command-line interface definitions and parsing
//!
//! This module defines the CLI structure for seqview using the `clap` crate.
//!
//! # Commands
//!
//! - **list**: Show directory contents with numbered sequences collapsed (default)
//! - **expand**: Print the real filenames behind selected display entries
//! - **pick**: Interactively select entries and print their filenames
//! - **config**: Read and write configuration values
//! - **completions**: Generate shell completion scripts
//!
//! # Examples
//!
//! ```
//! use seqview::cli::{Cli, Commands};
//!
//! let cli = Cli::parse_from_args(["seqview", "expand", "shots", "a.%04d.jpg 1-3"]);
//! assert!(matches!(cli.get_command(), Commands::Expand { .. }));
//! ```

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::ffi::OsString;
use std::path::PathBuf;

use crate::sequence::{RangePolicy, SequenceConfig};

/// Configuration management subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Set a configuration value
    Set {
        /// Configuration key=value (e.g., range_policy=min-max)
        #[arg(value_name = "KEY=VALUE")]
        setting: String,
    },

    /// Get a configuration value
    Get {
        /// Configuration key to retrieve (e.g., allowed_extensions)
        #[arg(value_name = "KEY")]
        key: String,
    },
}

/// Overrides for the sequence engine settings
#[derive(Args, Debug, Clone, Default)]
pub struct SequenceArgs {
    /// Only collapse files with these extensions (replaces the configured list)
    #[arg(short = 'e', long = "ext", value_name = "EXT", value_delimiter = ',')]
    pub extensions: Vec<String>,

    /// Collapse sequences of any extension
    #[arg(short = 'a', long = "all-extensions")]
    pub all_extensions: bool,

    /// Use numeric min/max for ranges instead of sorted first/last
    #[arg(long = "min-max")]
    pub min_max: bool,
}

impl SequenceArgs {
    /// Apply command-line overrides on top of the configured settings
    #[must_use]
    pub fn apply(&self, base: &SequenceConfig) -> SequenceConfig {
        let mut config = base.clone();
        if !self.extensions.is_empty() {
            config = config.with_extensions(self.extensions.iter().cloned());
        }
        if self.all_extensions {
            config = config.with_all_extensions(true);
        }
        if self.min_max {
            config = config.with_range_policy(RangePolicy::MinMax);
        }
        config
    }
}

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "seqview")]
#[command(about = "Collapse numbered file sequences in a directory listing", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// Print results as JSON
    #[arg(long = "json", global = true)]
    pub json: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// List directories with sequences collapsed (default)
    #[command(visible_alias = "l")]
    List {
        /// Directories to list (defaults to the configured root or the current directory)
        #[arg(value_name = "DIR")]
        directories: Vec<PathBuf>,

        #[command(flatten)]
        sequence: SequenceArgs,
    },

    /// Expand display entries into the filenames they stand for
    #[command(visible_alias = "x")]
    Expand {
        /// Directory the entries were listed from
        #[arg(value_name = "DIR")]
        directory: PathBuf,

        /// Display entries, e.g. "render.%04d.exr 1-120" or a plain filename
        #[arg(value_name = "ENTRY")]
        entries: Vec<String>,
    },

    /// Interactively pick entries and print their filenames
    #[command(visible_alias = "p")]
    Pick {
        /// Directory to browse (defaults to the configured root or the current directory)
        #[arg(value_name = "DIR")]
        directory: Option<PathBuf>,

        #[command(flatten)]
        sequence: SequenceArgs,
    },

    /// Manage configuration settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate a shell completion script
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parse from an explicit argument list
    #[must_use]
    pub fn parse_from_args<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::parse_from(args)
    }

    /// Get the command, defaulting to List if none specified
    #[must_use]
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::List {
            directories: Vec::new(),
            sequence: SequenceArgs::default(),
        })
    }
}
