use async_trait::async_trait;

#[async_trait]
pub trait TokenProvider: Send + Sync {
    async fn access_token(&self) -> Result<String, CredentialError>;
}

#[derive(Debug, thiserror::Error)]
pub enum CredentialError {
    #[error("failed to get bearer token: {0}")]
    Unavailable(String),
    #[error("credential provider returned an empty token")]
    EmptyToken,
}
