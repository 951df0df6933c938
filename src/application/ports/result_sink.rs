use async_trait::async_trait;

use super::CredentialError;
use crate::domain::LogRecord;

/// Append-only destination for processed results.
#[async_trait]
pub trait ResultSink: Send + Sync {
    async fn append(&self, record: &LogRecord) -> Result<(), SinkError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    #[error("sink credentials: {0}")]
    Auth(#[from] CredentialError),
    #[error("sink append failed: {0}")]
    AppendFailed(String),
}
