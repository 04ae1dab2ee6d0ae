use async_trait::async_trait;

use crate::domain::Entry;

#[async_trait]
pub trait EntryRepository: Send + Sync {
    async fn insert(&self, entry: &Entry) -> Result<(), RepositoryError>;

    /// All entries, newest first by archival time.
    async fn list(&self) -> Result<Vec<Entry>, RepositoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("store unavailable: {0}")]
    Unavailable(String),
    #[error("query failed: {0}")]
    QueryFailed(String),
}
