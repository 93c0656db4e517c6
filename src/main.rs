//! Seqview CLI application entry point
//!
//! Lists directories with numbered file sequences collapsed into a single
//! descriptor, and expands descriptors back into their member files.
//!
//! # Usage
//!
//! ```bash
//! # List the configured root (or the current directory)
//! seqview
//!
//! # List several directories, collapsing only EXR and DPX frames
//! seqview list shots/sq010 shots/sq020 -e exr,dpx
//!
//! # Expand a descriptor back into filenames
//! seqview expand shots/sq010 "render.%04d.exr 1-120"
//!
//! # Pick entries interactively
//! seqview pick shots/sq010
//!
//! # Machine-readable output
//! seqview --json list shots/sq010
//! ```
//!
//! # Logging
//!
//! Diagnostics go to stderr and are controlled with `SEQVIEW_LOG`
//! (e.g. `SEQVIEW_LOG=debug`). The default level is `warn`.
//!
//! # Configuration
//!
//! Configuration is stored in the user's config directory
//! (`~/.config/seqview/config.toml` on Linux) and created on first run.

use seqview::{
    Result,
    cli::{Cli, Commands},
    commands,
    config::SeqviewConfig,
    output::OutputOptions,
};
use tracing_subscriber::EnvFilter;

fn init_logging() {
    let filter = EnvFilter::try_from_env("SEQVIEW_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Main entry point for the seqview application
///
/// Loads configuration, parses command-line arguments, and dispatches to the
/// appropriate command handler.
///
/// # Errors
///
/// Returns `SeqviewError` if configuration loading fails or any command
/// handler returns an error.
fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse_args();
    let command = cli.get_command();

    // Completions must not depend on a readable config file
    if let Commands::Completions { shell } = command {
        commands::completions(shell);
        return Ok(());
    }

    let config = SeqviewConfig::load()?;
    let opts = OutputOptions {
        quiet: cli.quiet || config.quiet,
        json: cli.json,
    };

    match &command {
        Commands::List { directories, sequence } => {
            let directories = if directories.is_empty() {
                vec![config.default_directory()]
            } else {
                directories.clone()
            };
            commands::list(&directories, &sequence.apply(&config.sequence), opts)?;
        }
        Commands::Expand { directory, entries } => {
            commands::expand(directory, entries, opts)?;
        }
        Commands::Pick { directory, sequence } => {
            let directory = directory.clone().unwrap_or_else(|| config.default_directory());
            commands::pick(&directory, &sequence.apply(&config.sequence), opts)?;
        }
        Commands::Config { command } => {
            commands::config(config, command, opts.quiet)?;
        }
        Commands::Completions { .. } => unreachable!(),
    }

    Ok(())
}
