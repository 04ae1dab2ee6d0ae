mod ai_gateway_client;
mod mock_chat_client;

pub use ai_gateway_client::AiGatewayClient;
pub use mock_chat_client::MockChatClient;
