use async_trait::async_trait;

use crate::application::ports::{ChatClient, ChatClientError, ChatPrompt};

/// Deterministic stand-in for the AI gateway.
pub struct MockChatClient {
    response: String,
}

impl MockChatClient {
    pub fn with_response(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
        }
    }
}

#[async_trait]
impl ChatClient for MockChatClient {
    async fn complete(&self, _prompt: &ChatPrompt) -> Result<String, ChatClientError> {
        Ok(self.response.clone())
    }
}
