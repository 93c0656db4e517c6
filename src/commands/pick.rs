//! Pick command - interactive multi-select over a collapsed listing

use dialoguer::{MultiSelect, theme::ColorfulTheme};
use std::path::Path;

use crate::{
    commands::expand::print_selection,
    listing,
    output::OutputOptions,
    sequence::{self, SequenceConfig},
    Result,
};

/// Execute the pick command
///
/// Shows the display list, lets the user select entries, then prints the
/// expanded filenames. Pressing Esc cancels without output.
///
/// # Errors
/// Returns `SeqviewError` if the directory cannot be listed, the prompt fails,
/// or JSON output fails.
pub fn execute(directory: &Path, config: &SequenceConfig, opts: OutputOptions) -> Result<()> {
    let entries = listing::list_directory_entries(directory)?;
    let lines = sequence::build_display_list(&entries, config);

    if lines.is_empty() {
        if !opts.quiet {
            println!("No files found in {}.", directory.display());
        }
        return Ok(());
    }

    let Some(picked) = MultiSelect::with_theme(&ColorfulTheme::default())
        .with_prompt(format!("Select entries in {} (space to toggle)", directory.display()))
        .items(&lines)
        .interact_opt()?
    else {
        if !opts.quiet {
            println!("Selection cancelled.");
        }
        return Ok(());
    };

    let selected: Vec<&str> = picked.iter().map(|&i| lines[i].as_str()).collect();
    tracing::info!("Picked {} of {} entries", selected.len(), lines.len());
    print_selection(&sequence::expand_selections(&selected, &entries), opts)
}
