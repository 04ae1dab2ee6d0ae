use chrono::{DateTime, Utc};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntryId(Uuid);

impl EntryId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for EntryId {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Attachments {
    pub photos: u32,
    pub audio: bool,
}

/// An archived journal entry. Entries are immutable once created.
#[derive(Debug, Clone)]
pub struct Entry {
    pub id: EntryId,
    pub text: String,
    pub folder: String,
    pub location: String,
    pub timestamp: DateTime<Utc>,
    pub timestamp_end: Option<DateTime<Utc>>,
    pub attachments: Attachments,
    pub created_at: DateTime<Utc>,
}

impl Entry {
    pub fn new(
        text: String,
        folder: String,
        location: String,
        timestamp: Option<DateTime<Utc>>,
        timestamp_end: Option<DateTime<Utc>>,
        attachments: Attachments,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: EntryId::new(),
            text,
            folder,
            location,
            timestamp: timestamp.unwrap_or(now),
            timestamp_end,
            attachments,
            created_at: now,
        }
    }

    /// Case-insensitive substring match against text, location, and folder name.
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.text.to_lowercase().contains(&query)
            || self.location.to_lowercase().contains(&query)
            || self.folder.to_lowercase().contains(&query)
    }
}
