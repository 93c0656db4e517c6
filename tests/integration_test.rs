//! Integration tests for seqview
//!
//! These tests materialise a directory of sample frames and plain files on
//! disk and run the complete list / expand workflows against it.

use std::fs;
use std::path::Path;

use seqview::{
    commands,
    listing::{self, ListingError},
    output::OutputOptions,
    sequence::{
        DisplayEntry, RangePolicy, Selection, SequenceConfig, build_display_entries,
        build_display_list, expand_selection, expand_selections,
    },
    SeqviewError,
};
use tempfile::TempDir;

/// Sample files: (printf-style name, count)
const FIXTURE: &[(&str, u32)] = &[
    ("taco.%04d.jpg", 5),
    ("tuesday.%02d.jpg", 2),
    ("reel.mov", 1),
    ("box.mb", 1),
    ("box2.mb", 1),
    ("box3.mb", 1),
    ("comp_v001.mb", 1),
    ("comp_v002.mb", 1),
    ("comp_v003.mb", 1),
    ("split.001.jpg", 1),
    ("split.003.jpg", 1),
    ("split.004.jpg", 1),
    ("underOverTen.0009.png", 1),
    ("underOverTen.0010.png", 1),
    ("underOverTen.0011.png", 1),
    ("underOverTen.0012.png", 1),
    ("long.file.name.%04d.pdf", 4),
    ("another.one.%01d.jpg", 3),
];

/// Expand a `%0Nd` name the way the sample generator does
fn frame_name(pattern: &str, frame: u32) -> String {
    let Some(start) = pattern.find("%0") else {
        return pattern.to_string();
    };
    let end = start + pattern[start..].find('d').unwrap();
    let width: usize = pattern[start + 2..end].parse().unwrap();
    format!("{}{:0width$}{}", &pattern[..start], frame, &pattern[end + 1..])
}

/// Helper function to create the sample directory
fn setup_fixture_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    for (pattern, count) in FIXTURE {
        if *count == 1 {
            fs::File::create(dir.path().join(pattern)).unwrap();
        } else {
            for frame in 1..=*count {
                fs::File::create(dir.path().join(frame_name(pattern, frame))).unwrap();
            }
        }
    }
    // Folders are never part of the listing
    fs::create_dir(dir.path().join("renders")).unwrap();
    dir
}

fn list(dir: &Path) -> Vec<String> {
    listing::list_directory_entries(dir).unwrap()
}

#[test]
fn test_fixture_display_list() {
    let dir = setup_fixture_dir();
    let display = build_display_list(&list(dir.path()), &SequenceConfig::default());

    assert_eq!(
        display,
        vec![
            "another.one.%01d.jpg 1-3",
            "box.mb",
            "box2.mb",
            "box3.mb",
            "comp_v001.mb",
            "comp_v002.mb",
            "comp_v003.mb",
            "long.file.name.0001.pdf",
            "long.file.name.0002.pdf",
            "long.file.name.0003.pdf",
            "long.file.name.0004.pdf",
            "reel.mov",
            "split.%03d.jpg 1-4",
            "taco.%04d.jpg 1-5",
            "tuesday.%02d.jpg 1-2",
            "underOverTen.%04d.png 9-12",
        ]
    );
}

#[test]
fn test_fixture_all_extensions_collapses_pdf() {
    let dir = setup_fixture_dir();
    let config = SequenceConfig::default().with_all_extensions(true);
    let display = build_display_list(&list(dir.path()), &config);

    assert!(display.contains(&"long.file.name.%04d.pdf 1-4".to_string()));
    assert!(!display.iter().any(|d| d == "long.file.name.0001.pdf"));
    // Two-letter extensions never match, even without an allowlist
    assert!(display.contains(&"comp_v001.mb".to_string()));
}

#[test]
fn test_fixture_expand_each_sequence() {
    let dir = setup_fixture_dir();
    let entries = list(dir.path());
    let config = SequenceConfig::default();

    for entry in build_display_entries(&entries, &config) {
        let DisplayEntry::Sequence(record) = &entry else {
            continue;
        };
        let files = expand_selection(&entry.to_string(), &entries);
        assert!(!files.is_empty(), "{entry} expanded to nothing");
        assert!(files.windows(2).all(|w| w[0] < w[1]), "{entry} not sorted");
        assert!(files.iter().all(|f| f.starts_with(&record.key)));
    }
}

#[test]
fn test_fixture_expand_gapped_sequence() {
    let dir = setup_fixture_dir();
    let files = expand_selection("split.%03d.jpg 1-4", &list(dir.path()));
    assert_eq!(files, vec!["split.001.jpg", "split.003.jpg", "split.004.jpg"]);
}

#[test]
fn test_fixture_multi_selection() {
    let dir = setup_fixture_dir();
    let selection = expand_selections(
        &["reel.mov", "tuesday.%02d.jpg 1-2", "box.mb"],
        &list(dir.path()),
    );
    assert_eq!(
        selection,
        Selection::Files(vec![
            "box.mb".into(),
            "reel.mov".into(),
            "tuesday.01.jpg".into(),
            "tuesday.02.jpg".into(),
        ])
    );
}

#[test]
fn test_fixture_listing_is_idempotent() {
    let dir = setup_fixture_dir();
    let config = SequenceConfig::default();
    let first = build_display_list(&list(dir.path()), &config);
    let second = build_display_list(&list(dir.path()), &config);
    assert_eq!(first, second);
}

#[test]
fn test_mixed_padding_on_disk() {
    let dir = TempDir::new().unwrap();
    for name in ["a.9.jpg", "a.10.jpg", "a.11.jpg"] {
        fs::File::create(dir.path().join(name)).unwrap();
    }
    let entries = list(dir.path());

    // Sorted order is a.10, a.11, a.9
    let sorted = build_display_list(&entries, &SequenceConfig::default());
    assert_eq!(sorted, vec!["a.%02d.jpg 10-9"]);

    let min_max = SequenceConfig::default().with_range_policy(RangePolicy::MinMax);
    assert_eq!(build_display_list(&entries, &min_max), vec!["a.%02d.jpg 9-11"]);

    // Either descriptor expands to every member
    assert_eq!(
        expand_selection(&sorted[0], &entries),
        vec!["a.10.jpg", "a.11.jpg", "a.9.jpg"]
    );
}

#[test]
fn test_list_command_runs_on_fixture() {
    let dir = setup_fixture_dir();
    let opts = OutputOptions { quiet: true, json: false };
    commands::list(&[dir.path().to_path_buf()], &SequenceConfig::default(), opts).unwrap();

    let json = OutputOptions { quiet: false, json: true };
    commands::list(&[dir.path().to_path_buf()], &SequenceConfig::default(), json).unwrap();
}

#[test]
fn test_list_command_json_over_several_directories() {
    let first = setup_fixture_dir();
    let second = setup_fixture_dir();
    let json = OutputOptions { quiet: false, json: true };
    let dirs = [first.path().to_path_buf(), second.path().to_path_buf()];
    commands::list(&dirs, &SequenceConfig::default(), json).unwrap();
}

#[test]
fn test_list_command_missing_directory() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing");
    let result = commands::list(&[missing], &SequenceConfig::default(), OutputOptions::default());
    assert!(matches!(
        result,
        Err(SeqviewError::ListingError(ListingError::NotADirectory(_)))
    ));
}

#[test]
fn test_expand_command_empty_selection_is_not_an_error() {
    let dir = TempDir::new().unwrap();
    // The directory is not even read for an empty selection
    let missing = dir.path().join("missing");
    assert!(commands::expand(&missing, &[], OutputOptions::default()).is_ok());
}

#[test]
fn test_expand_command_on_fixture() {
    let dir = setup_fixture_dir();
    let selected = vec!["taco.%04d.jpg 1-5".to_string()];
    let opts = OutputOptions { quiet: true, json: false };
    assert!(commands::expand(dir.path(), &selected, opts).is_ok());
}

#[test]
fn test_frame_name_helper() {
    assert_eq!(frame_name("taco.%04d.jpg", 5), "taco.0005.jpg");
    assert_eq!(frame_name("another.one.%01d.jpg", 3), "another.one.3.jpg");
    assert_eq!(frame_name("reel.mov", 1), "reel.mov");
}
