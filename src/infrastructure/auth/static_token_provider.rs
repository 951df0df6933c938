use async_trait::async_trait;

use crate::application::ports::{CredentialError, TokenProvider};

pub struct StaticTokenProvider {
    token: String,
}

impl StaticTokenProvider {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

#[async_trait]
impl TokenProvider for StaticTokenProvider {
    async fn access_token(&self) -> Result<String, CredentialError> {
        let token = self.token.trim();
        if token.is_empty() {
            return Err(CredentialError::EmptyToken);
        }
        Ok(token.to_string())
    }
}
