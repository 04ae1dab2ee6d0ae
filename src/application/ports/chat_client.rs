use async_trait::async_trait;
use serde::Serialize;

/// A fully constructed chat-completion prompt, ready to be relayed. The model
/// identifier is supplied by the adapter; callers only decide the messages and
/// the generation budget.
#[derive(Debug, Clone, Serialize)]
pub struct ChatPrompt {
    pub messages: Vec<ChatMessage>,
    pub max_tokens: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: MessageContent,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: MessageContent::Text(content.into()),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: MessageContent::Text(content.into()),
        }
    }

    pub fn user_parts(parts: Vec<ContentPart>) -> Self {
        Self {
            role: "user".to_string(),
            content: MessageContent::Parts(parts),
        }
    }
}

/// Message content is either a plain string or a list of typed parts, per the
/// chat-completions wire schema.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum MessageContent {
    Text(String),
    Parts(Vec<ContentPart>),
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentPart {
    Text { text: String },
    ImageUrl { image_url: ImageUrl },
}

#[derive(Debug, Clone, Serialize)]
pub struct ImageUrl {
    pub url: String,
}

#[async_trait]
pub trait ChatClient: Send + Sync {
    /// Single attempt against the completion provider; returns the first
    /// completion's text content, empty if the provider returned none.
    async fn complete(&self, prompt: &ChatPrompt) -> Result<String, ChatClientError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ChatClientError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("rate limited")]
    RateLimited,
    #[error("credits exhausted")]
    QuotaExhausted,
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
