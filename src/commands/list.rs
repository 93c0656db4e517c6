//! List command - show directories with sequences collapsed

use std::path::PathBuf;

use crate::{
    listing,
    output::{self, OutputOptions},
    sequence::{self, SequenceConfig},
    Result,
};

/// Execute the list command
///
/// Directories are read in parallel and printed in the order given. With
/// `--json`, one directory prints a single document and several print one
/// JSON array.
///
/// # Errors
/// Returns `SeqviewError` if a directory cannot be listed or JSON output fails.
pub fn execute(directories: &[PathBuf], config: &SequenceConfig, opts: OutputOptions) -> Result<()> {
    let show_headers = directories.len() > 1 && !opts.quiet;
    let mut documents = Vec::new();

    for result in listing::list_many(directories) {
        let listing = result?;
        let entries = sequence::build_display_entries(&listing.entries, config);

        if opts.json {
            documents.push((listing.directory, entries));
            continue;
        }

        if show_headers {
            println!("{}", output::directory_header(&listing.directory, entries.len()));
        }
        if entries.is_empty() && !opts.quiet {
            println!("No files found in {}.", listing.directory.display());
        }
        for entry in &entries {
            println!("{}", output::display_entry(entry, opts.quiet));
        }
    }

    if opts.json {
        let json = match documents.as_slice() {
            [(directory, entries)] => output::listing_json(directory, entries)?,
            _ => output::listings_json(&documents)?,
        };
        println!("{json}");
    }
    Ok(())
}
