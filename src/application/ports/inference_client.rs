use async_trait::async_trait;

use super::CredentialError;
use crate::domain::{FixedWaveform, InferenceResult};

#[async_trait]
pub trait InferenceClient: Send + Sync {
    async fn predict(&self, waveform: &FixedWaveform) -> Result<InferenceResult, InferenceError>;
}

#[derive(Debug, thiserror::Error)]
pub enum InferenceError {
    #[error(transparent)]
    Auth(#[from] CredentialError),
    #[error("inference service error (HTTP {status}): {body}")]
    Service { status: u16, body: String },
    #[error("inference request failed: {0}")]
    Request(String),
    #[error("invalid inference response: {0}")]
    InvalidResponse(String),
}
