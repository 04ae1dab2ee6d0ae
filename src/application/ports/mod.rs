mod chat_client;
mod entry_repository;
mod token_verifier;

pub use chat_client::{
    ChatClient, ChatClientError, ChatMessage, ChatPrompt, ContentPart, ImageUrl, MessageContent,
};
pub use entry_repository::{EntryRepository, RepositoryError};
pub use token_verifier::{Claims, TokenVerifier, TokenVerifierError};
