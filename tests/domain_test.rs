use chrono::{TimeZone, Utc};

use keepsake::domain::{derive_folders, Attachments, Entry, DEFAULT_FOLDERS};

fn entry(text: &str, folder: &str, location: &str) -> Entry {
    Entry::new(
        text.to_string(),
        folder.to_string(),
        location.to_string(),
        None,
        None,
        Attachments::default(),
    )
}

#[test]
fn given_no_entries_when_deriving_folders_then_defaults_returned() {
    let folders = derive_folders(&[]);

    assert_eq!(folders, DEFAULT_FOLDERS.map(String::from).to_vec());
}

#[test]
fn given_entries_when_deriving_folders_then_deduplicated_in_first_seen_order() {
    let entries = vec![
        entry("a", "Travel", ""),
        entry("b", "Letters", ""),
        entry("c", "Travel", ""),
    ];

    let folders = derive_folders(&entries);

    assert_eq!(folders, vec!["Travel".to_string(), "Letters".to_string()]);
}

#[test]
fn given_query_when_matching_then_text_location_and_folder_are_searched() {
    let entry = entry("Plum jam recipe", "Childhood Memories", "Warsaw");

    assert!(entry.matches_query("plum"));
    assert!(entry.matches_query("WARSAW"));
    assert!(entry.matches_query("childhood"));
    assert!(!entry.matches_query("bicycle"));
}

#[test]
fn given_explicit_timestamp_when_creating_entry_then_it_is_kept() {
    let when = Utc.with_ymd_and_hms(1987, 6, 21, 12, 0, 0).unwrap();
    let entry = Entry::new(
        "text".to_string(),
        "Travel".to_string(),
        String::new(),
        Some(when),
        None,
        Attachments {
            photos: 3,
            audio: true,
        },
    );

    assert_eq!(entry.timestamp, when);
    assert!(entry.timestamp_end.is_none());
    assert_eq!(entry.attachments.photos, 3);
    assert!(entry.attachments.audio);
}

#[test]
fn given_no_timestamp_when_creating_entry_then_archival_time_is_used() {
    let entry = entry("text", "Travel", "");

    assert_eq!(entry.timestamp, entry.created_at);
}
