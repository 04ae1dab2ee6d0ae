mod entry;
mod folder;

pub use entry::{Attachments, Entry, EntryId};
pub use folder::{derive_folders, DEFAULT_FOLDERS};
