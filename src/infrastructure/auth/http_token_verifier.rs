use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::application::ports::{Claims, TokenVerifier, TokenVerifierError};

/// Validates bearer tokens against the identity service's user endpoint. The
/// service's public API key rides along on every call.
pub struct HttpTokenVerifier {
    client: Client,
    base_url: String,
    api_key: String,
}

#[derive(Deserialize)]
struct UserResponse {
    id: String,
    #[serde(default)]
    email: Option<String>,
}

impl HttpTokenVerifier {
    pub fn new(base_url: String, api_key: String) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }
}

#[async_trait]
impl TokenVerifier for HttpTokenVerifier {
    async fn verify(&self, token: &str) -> Result<Claims, TokenVerifierError> {
        let response = self
            .client
            .get(format!("{}/auth/v1/user", self.base_url))
            .header("Authorization", format!("Bearer {}", token))
            .header("apikey", &self.api_key)
            .send()
            .await
            .map_err(|e| TokenVerifierError::ApiRequestFailed(e.to_string()))?;

        if response.status() == reqwest::StatusCode::UNAUTHORIZED
            || response.status() == reqwest::StatusCode::FORBIDDEN
        {
            return Err(TokenVerifierError::InvalidToken);
        }

        if !response.status().is_success() {
            let status = response.status();
            return Err(TokenVerifierError::ApiRequestFailed(format!(
                "HTTP {}",
                status
            )));
        }

        let user: UserResponse = response
            .json()
            .await
            .map_err(|e| TokenVerifierError::ApiRequestFailed(e.to_string()))?;

        Ok(Claims {
            subject: user.id,
            email: user.email,
        })
    }
}
