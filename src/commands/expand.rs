//! Expand command - print the filenames behind display entries

use std::path::Path;

use crate::{
    listing,
    output::{self, OutputOptions},
    sequence::{self, Selection},
    Result,
};

/// Execute the expand command
///
/// # Errors
/// Returns `SeqviewError` if the directory cannot be listed or JSON output fails.
pub fn execute(directory: &Path, selected: &[String], opts: OutputOptions) -> Result<()> {
    if selected.is_empty() {
        return print_selection(&Selection::Empty, opts);
    }
    let entries = listing::list_directory_entries(directory)?;
    let selection = sequence::expand_selections(selected, &entries);
    print_selection(&selection, opts)
}

/// Print an expanded selection
///
/// An empty selection is informational: it prints "No files selected" unless
/// quiet, or an empty file list in JSON mode.
///
/// # Errors
/// Returns `SeqviewError` if JSON output fails.
pub fn print_selection(selection: &Selection, opts: OutputOptions) -> Result<()> {
    if opts.json {
        println!("{}", output::files_json(selection.files())?);
        return Ok(());
    }

    match selection {
        Selection::Empty => {
            if !opts.quiet {
                println!("No files selected");
            }
        }
        Selection::Files(files) => {
            if !opts.quiet {
                println!("{} file(s):", files.len());
            }
            for file in files {
                println!("{file}");
            }
        }
    }
    Ok(())
}
