use std::sync::Arc;

use crate::application::ports::{ChatClient, ChatClientError};

use super::prompts;

/// Ceiling on caller-supplied prompts, in characters.
pub const MAX_PROMPT_CHARS: usize = 50_000;
/// Ceiling on base64-encoded image payloads, in encoded characters (~7.5MB decoded).
pub const MAX_IMAGE_CHARS: usize = 10_000_000;

/// A validated digitization request. Exactly one mode; "both" and "neither"
/// are unrepresentable.
#[derive(Debug, Clone)]
pub enum DigitizeCommand {
    Transcribe { image_base64: String },
    Synthesize { prompt: String },
}

pub struct DigitizeService<C>
where
    C: ChatClient,
{
    chat_client: Arc<C>,
}

impl<C> DigitizeService<C>
where
    C: ChatClient,
{
    pub fn new(chat_client: Arc<C>) -> Self {
        Self { chat_client }
    }

    /// Builds the mode-specific prompt and relays it in a single attempt.
    /// Failures are terminal; nothing is retried.
    pub async fn digitize(&self, command: &DigitizeCommand) -> Result<String, ChatClientError> {
        let prompt = match command {
            DigitizeCommand::Transcribe { image_base64 } => {
                tracing::debug!(encoded_chars = image_base64.len(), "Processing image for transcription");
                prompts::build_transcription_prompt(image_base64)
            }
            DigitizeCommand::Synthesize { prompt } => {
                tracing::debug!(prompt_chars = prompt.len(), "Processing prompt for narrative synthesis");
                prompts::build_synthesis_prompt(prompt)
            }
        };

        let text = self.chat_client.complete(&prompt).await?;
        tracing::info!(text_chars = text.len(), "Digitization completed");

        Ok(text)
    }
}
