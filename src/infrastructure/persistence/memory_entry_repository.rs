use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::application::ports::{EntryRepository, RepositoryError};
use crate::domain::Entry;

/// Entry store backed by process memory. Entries live as long as the process.
pub struct InMemoryEntryRepository {
    entries: RwLock<Vec<Entry>>,
}

impl InMemoryEntryRepository {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(Vec::new()),
        }
    }
}

impl Default for InMemoryEntryRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EntryRepository for InMemoryEntryRepository {
    async fn insert(&self, entry: &Entry) -> Result<(), RepositoryError> {
        let mut entries = self.entries.write().await;
        entries.push(entry.clone());
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Entry>, RepositoryError> {
        let entries = self.entries.read().await;
        let mut listed = entries.clone();
        listed.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(listed)
    }
}
