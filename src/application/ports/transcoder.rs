use std::io;
use std::path::Path;

use async_trait::async_trait;

/// Converts a file on disk into the decoder's native container.
#[async_trait]
pub trait Transcoder: Send + Sync {
    async fn transcode(&self, input: &Path, output: &Path) -> Result<(), TranscodeError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TranscodeError {
    #[error("transcoder not found at {path}: {source}")]
    ToolNotFound {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("transcoding failed: {0}")]
    Failed(String),
    #[error("transcoding io error: {0}")]
    Io(#[from] io::Error),
}
