use std::sync::Arc;

use crate::application::ports::{ChatClient, ChatClientError, EntryRepository, RepositoryError};

use super::digitize_service::{DigitizeCommand, DigitizeService, MAX_PROMPT_CHARS};
use super::prompts;

#[derive(Debug, Clone)]
pub struct BiographySelection {
    pub folders: Vec<String>,
    pub word_count: u32,
    pub focus_topic: Option<String>,
}

pub struct BiographyService<C>
where
    C: ChatClient,
{
    entry_repository: Arc<dyn EntryRepository>,
    digitize_service: Arc<DigitizeService<C>>,
}

impl<C> BiographyService<C>
where
    C: ChatClient,
{
    pub fn new(
        entry_repository: Arc<dyn EntryRepository>,
        digitize_service: Arc<DigitizeService<C>>,
    ) -> Self {
        Self {
            entry_repository,
            digitize_service,
        }
    }

    /// Collects entries from the selected folders, assembles the synthesis
    /// prompt, and runs it through the digitization pipeline.
    pub async fn generate(&self, selection: &BiographySelection) -> Result<String, BiographyError> {
        let entries = self.entry_repository.list().await?;
        let selected: Vec<_> = entries
            .into_iter()
            .filter(|e| selection.folders.iter().any(|f| f == &e.folder))
            .collect();

        if selected.is_empty() {
            return Err(BiographyError::NoMatchingEntries);
        }

        let prompt = prompts::build_biography_prompt(
            &selected,
            selection.word_count,
            selection.focus_topic.as_deref(),
        );

        if prompt.len() > MAX_PROMPT_CHARS {
            return Err(BiographyError::PromptTooLong { chars: prompt.len() });
        }

        tracing::info!(
            entries = selected.len(),
            folders = selection.folders.len(),
            word_count = selection.word_count,
            "Synthesizing biography"
        );

        let text = self
            .digitize_service
            .digitize(&DigitizeCommand::Synthesize { prompt })
            .await?;

        Ok(text)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum BiographyError {
    #[error("no entries in the selected folders")]
    NoMatchingEntries,
    #[error("assembled prompt too long: {chars} characters")]
    PromptTooLong { chars: usize },
    #[error("repository: {0}")]
    Repository(#[from] RepositoryError),
    #[error("completion: {0}")]
    Completion(#[from] ChatClientError),
}
