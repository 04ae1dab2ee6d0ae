use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::application::ports::{ChatClient, ChatClientError, ChatMessage, ChatPrompt};

/// Relay against an OpenAI-compatible chat-completions endpoint. One attempt
/// per call; the request deadline comes from configuration.
pub struct AiGatewayClient {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
    request_timeout: Duration,
}

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    max_tokens: u32,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: AssistantMessage,
}

#[derive(Deserialize)]
struct AssistantMessage {
    #[serde(default)]
    content: Option<String>,
}

impl AiGatewayClient {
    pub fn new(
        base_url: String,
        api_key: String,
        model: String,
        request_timeout: Duration,
    ) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            model,
            request_timeout,
        }
    }
}

#[async_trait]
impl ChatClient for AiGatewayClient {
    async fn complete(&self, prompt: &ChatPrompt) -> Result<String, ChatClientError> {
        let request_body = ChatCompletionRequest {
            model: &self.model,
            messages: &prompt.messages,
            max_tokens: prompt.max_tokens,
        };

        let response = self
            .client
            .post(format!("{}/v1/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .timeout(self.request_timeout)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| ChatClientError::ApiRequestFailed(e.to_string()))?;

        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(ChatClientError::RateLimited);
        }

        if response.status() == reqwest::StatusCode::PAYMENT_REQUIRED {
            return Err(ChatClientError::QuotaExhausted);
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::error!(status = %status, body = %body, "AI gateway returned an error");
            return Err(ChatClientError::ApiRequestFailed(format!(
                "HTTP {}: {}",
                status, body
            )));
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| ChatClientError::InvalidResponse(e.to_string()))?;

        Ok(completion
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .unwrap_or_default())
    }
}
