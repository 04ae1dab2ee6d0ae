use std::sync::Arc;

use crate::application::ports::{ChatClient, EntryRepository, TokenVerifier};
use crate::application::services::{BiographyService, DigitizeService};
use crate::presentation::config::Settings;

pub struct AppState<C, V>
where
    C: ChatClient,
    V: TokenVerifier,
{
    pub digitize_service: Arc<DigitizeService<C>>,
    pub biography_service: Arc<BiographyService<C>>,
    pub token_verifier: Arc<V>,
    pub entry_repository: Arc<dyn EntryRepository>,
    pub settings: Settings,
}

impl<C, V> Clone for AppState<C, V>
where
    C: ChatClient,
    V: TokenVerifier,
{
    fn clone(&self) -> Self {
        Self {
            digitize_service: Arc::clone(&self.digitize_service),
            biography_service: Arc::clone(&self.biography_service),
            token_verifier: Arc::clone(&self.token_verifier),
            entry_repository: Arc::clone(&self.entry_repository),
            settings: self.settings.clone(),
        }
    }
}
