use async_trait::async_trait;

use crate::application::ports::{Claims, TokenVerifier, TokenVerifierError};

/// Accepts every non-empty token with a fixed subject.
pub struct MockTokenVerifier {
    subject: String,
}

impl MockTokenVerifier {
    pub fn with_subject(subject: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
        }
    }
}

#[async_trait]
impl TokenVerifier for MockTokenVerifier {
    async fn verify(&self, token: &str) -> Result<Claims, TokenVerifierError> {
        if token.is_empty() {
            return Err(TokenVerifierError::InvalidToken);
        }

        Ok(Claims {
            subject: self.subject.clone(),
            email: None,
        })
    }
}
