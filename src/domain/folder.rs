use super::Entry;

/// Folders shown to a user who has not archived anything yet.
pub const DEFAULT_FOLDERS: [&str; 3] = ["Personal Journal", "Travel", "Childhood Memories"];

/// Distinct folder names across entries, in first-seen order. Folders are not
/// stored anywhere; they only exist as long as an entry references them.
pub fn derive_folders(entries: &[Entry]) -> Vec<String> {
    let mut folders: Vec<String> = Vec::new();
    for entry in entries {
        if !folders.iter().any(|f| f == &entry.folder) {
            folders.push(entry.folder.clone());
        }
    }

    if folders.is_empty() {
        return DEFAULT_FOLDERS.iter().map(|f| (*f).to_string()).collect();
    }

    folders
}
