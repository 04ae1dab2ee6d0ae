use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use tokio::sync::Mutex;

use keepsake::application::ports::{ChatClient, ChatClientError, ChatPrompt};
use keepsake::application::services::{DigitizeCommand, DigitizeService};
use keepsake::infrastructure::llm::MockChatClient;

struct RecordingChatClient {
    calls: AtomicUsize,
    last_prompt: Mutex<Option<ChatPrompt>>,
}

impl RecordingChatClient {
    fn new() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            last_prompt: Mutex::new(None),
        }
    }
}

#[async_trait::async_trait]
impl ChatClient for RecordingChatClient {
    async fn complete(&self, prompt: &ChatPrompt) -> Result<String, ChatClientError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_prompt.lock().await = Some(prompt.clone());
        Ok("recorded".to_string())
    }
}

struct RateLimitedChatClient;

#[async_trait::async_trait]
impl ChatClient for RateLimitedChatClient {
    async fn complete(&self, _prompt: &ChatPrompt) -> Result<String, ChatClientError> {
        Err(ChatClientError::RateLimited)
    }
}

#[tokio::test]
async fn given_synthesize_command_when_digitizing_then_single_relay_call_with_synthesis_budget() {
    let client = Arc::new(RecordingChatClient::new());
    let service = DigitizeService::new(Arc::clone(&client));

    let text = service
        .digitize(&DigitizeCommand::Synthesize {
            prompt: "Tell my story".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(text, "recorded");
    assert_eq!(client.calls.load(Ordering::SeqCst), 1);

    let prompt = client.last_prompt.lock().await;
    assert_eq!(prompt.as_ref().unwrap().max_tokens, 8192);
}

#[tokio::test]
async fn given_transcribe_command_when_digitizing_then_transcription_budget_applies() {
    let client = Arc::new(RecordingChatClient::new());
    let service = DigitizeService::new(Arc::clone(&client));

    service
        .digitize(&DigitizeCommand::Transcribe {
            image_base64: "aGVsbG8=".to_string(),
        })
        .await
        .unwrap();

    let prompt = client.last_prompt.lock().await;
    assert_eq!(prompt.as_ref().unwrap().max_tokens, 4096);
}

#[tokio::test]
async fn given_rate_limited_client_when_digitizing_then_error_passes_through() {
    let service = DigitizeService::new(Arc::new(RateLimitedChatClient));

    let result = service
        .digitize(&DigitizeCommand::Transcribe {
            image_base64: "aGVsbG8=".to_string(),
        })
        .await;

    assert!(matches!(result, Err(ChatClientError::RateLimited)));
}

#[tokio::test]
async fn given_mock_client_when_digitizing_then_returns_configured_response() {
    let service = DigitizeService::new(Arc::new(MockChatClient::with_response("Dear diary")));

    let text = service
        .digitize(&DigitizeCommand::Synthesize {
            prompt: "anything".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(text, "Dear diary");
}
