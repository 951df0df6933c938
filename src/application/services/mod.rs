mod embedding_service;
mod format_bridge;
mod framer;

pub use embedding_service::{
    DEFAULT_SINK_TIMEOUT, EmbeddingService, PipelineError, PipelineStage,
};
pub use format_bridge::FormatBridge;
pub use framer::{frame, reframe};
