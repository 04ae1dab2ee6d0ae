use async_trait::async_trait;

/// Claims returned by the identity service for a valid bearer token.
#[derive(Debug, Clone)]
pub struct Claims {
    pub subject: String,
    pub email: Option<String>,
}

#[async_trait]
pub trait TokenVerifier: Send + Sync {
    async fn verify(&self, token: &str) -> Result<Claims, TokenVerifierError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TokenVerifierError {
    #[error("invalid token")]
    InvalidToken,
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
}
