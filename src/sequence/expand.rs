//! Selection expander
//!
//! Turns a selected display string back into the real filenames it stands for.

use super::codec;
use super::matcher::match_filename;
use super::types::Selection;

/// Expand one selected display string against the full listing
///
/// A collapsed descriptor yields every listed filename whose matcher-derived
/// prefix equals the descriptor's prefix, sorted ascending. Anything else is
/// returned verbatim as a single literal filename without consulting the
/// listing.
#[must_use]
pub fn expand_selection<S: AsRef<str>>(selected: &str, entries: &[S]) -> Vec<String> {
    let Some(record) = codec::decode(selected) else {
        return vec![selected.to_string()];
    };

    let mut members: Vec<String> = entries
        .iter()
        .map(AsRef::<str>::as_ref)
        .filter(|name| match_filename(name).is_some_and(|c| c.prefix == record.key))
        .map(str::to_string)
        .collect();
    members.sort_unstable();
    members.dedup();
    tracing::debug!(descriptor = selected, members = members.len(), "expanded selection");
    members
}

/// Expand a multi-selection
///
/// Results are merged, sorted and de-duplicated. An empty selection is
/// reported as [`Selection::Empty`] rather than an empty file list.
#[must_use]
pub fn expand_selections<T, S>(selected: &[T], entries: &[S]) -> Selection
where
    T: AsRef<str>,
    S: AsRef<str>,
{
    if selected.is_empty() {
        return Selection::Empty;
    }
    let mut files: Vec<String> = selected
        .iter()
        .flat_map(|item| expand_selection(item.as_ref(), entries))
        .collect();
    files.sort_unstable();
    files.dedup();
    Selection::Files(files)
}

#[cfg(test)]
mod tests {
    use super::*;

    const LISTING: [&str; 4] = ["a.0003.jpg", "a.0001.jpg", "a.0002.jpg", "b.jpg"];

    #[test]
    fn test_expand_descriptor_excludes_other_files() {
        assert_eq!(
            expand_selection("a.%04d.jpg 1-3", &LISTING),
            vec!["a.0001.jpg", "a.0002.jpg", "a.0003.jpg"]
        );
    }

    #[test]
    fn test_expand_literal_is_passthrough() {
        assert_eq!(expand_selection("b.jpg", &LISTING), vec!["b.jpg"]);
        // Literal names are not checked against the listing
        assert_eq!(expand_selection("missing.txt", &LISTING), vec!["missing.txt"]);
    }

    #[test]
    fn test_expand_single_member_descriptor_is_literal() {
        assert_eq!(expand_selection("panel.7.png", &["panel.7.png"]), vec!["panel.7.png"]);
    }

    #[test]
    fn test_expand_matches_prefix_not_leading_segment() {
        let listing = ["long.file.name.0001.pdf", "long.file.name.0002.pdf", "long.txt"];
        assert_eq!(
            expand_selection("long.file.name.%04d.pdf 1-2", &listing),
            vec!["long.file.name.0001.pdf", "long.file.name.0002.pdf"]
        );
    }

    #[test]
    fn test_expand_unknown_descriptor_is_empty() {
        assert!(expand_selection("zzz.%02d.jpg 1-2", &LISTING).is_empty());
    }

    #[test]
    fn test_expand_selections_empty() {
        let none: [&str; 0] = [];
        assert_eq!(expand_selections(&none, &LISTING), Selection::Empty);
        assert!(Selection::Empty.files().is_empty());
    }

    #[test]
    fn test_expand_selections_merges_and_dedups() {
        let selection = expand_selections(&["b.jpg", "a.%04d.jpg 1-3", "b.jpg"], &LISTING);
        assert_eq!(
            selection.files(),
            ["a.0001.jpg", "a.0002.jpg", "a.0003.jpg", "b.jpg"]
        );
    }
}
