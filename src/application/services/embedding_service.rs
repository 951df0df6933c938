use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use super::format_bridge::FormatBridge;
use super::framer::frame;
use crate::application::ports::{
    AudioDecoder, AudioDecoderError, InferenceClient, InferenceError, ResultSink, TranscodeError,
};
use crate::domain::{AudioClip, FixedWaveform, InferenceResult, LogRecord};

/// Upper bound on a single sink append before the result is returned without it.
pub const DEFAULT_SINK_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStage {
    Decoding,
    Inferring,
    Logging,
}

impl PipelineStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            PipelineStage::Decoding => "decoding",
            PipelineStage::Inferring => "inferring",
            PipelineStage::Logging => "logging",
        }
    }
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Turns an uploaded clip into model predictions.
///
/// Runs the clip through the format bridge, decoder and framer, submits the
/// framed samples for inference and finally appends the outcome to the result
/// sink. Every stage before logging is terminal on failure; logging is best
/// effort and cannot change the returned result.
pub struct EmbeddingService {
    format_bridge: FormatBridge,
    decoder: Arc<dyn AudioDecoder>,
    inference_client: Arc<dyn InferenceClient>,
    result_sink: Option<Arc<dyn ResultSink>>,
    sink_timeout: Duration,
    required_samples: usize,
}

impl EmbeddingService {
    pub fn new(
        format_bridge: FormatBridge,
        decoder: Arc<dyn AudioDecoder>,
        inference_client: Arc<dyn InferenceClient>,
        result_sink: Option<Arc<dyn ResultSink>>,
        required_samples: usize,
    ) -> Self {
        Self {
            format_bridge,
            decoder,
            inference_client,
            result_sink,
            sink_timeout: DEFAULT_SINK_TIMEOUT,
            required_samples,
        }
    }

    pub fn with_sink_timeout(mut self, sink_timeout: Duration) -> Self {
        self.sink_timeout = sink_timeout;
        self
    }

    pub fn required_samples(&self) -> usize {
        self.required_samples
    }

    pub async fn process(&self, clip: AudioClip) -> Result<InferenceResult, PipelineError> {
        let waveform = self.prepare(clip).await?;

        tracing::debug!(
            stage = %PipelineStage::Inferring,
            samples = waveform.len(),
            "Submitting waveform"
        );
        let result = self.inference_client.predict(&waveform).await?;

        self.record(&result).await;

        Ok(result)
    }

    /// Bridges, decodes and frames a clip without contacting the model.
    pub async fn prepare(&self, clip: AudioClip) -> Result<FixedWaveform, PipelineError> {
        tracing::debug!(
            stage = %PipelineStage::Decoding,
            mime_type = %clip.mime_type(),
            bytes = clip.len(),
            "Preparing clip"
        );

        let native = self.format_bridge.to_native(clip).await?;
        let decoder = Arc::clone(&self.decoder);
        let waveform = tokio::task::spawn_blocking(move || decoder.decode(&native))
            .await
            .map_err(|e| AudioDecoderError::DecodingFailed(format!("task join error: {e}")))??;

        tracing::debug!(
            samples = waveform.len(),
            duration_secs = waveform.duration_secs(),
            "Clip decoded"
        );

        Ok(frame(waveform, self.required_samples))
    }

    async fn record(&self, result: &InferenceResult) {
        let Some(sink) = &self.result_sink else {
            return;
        };

        let record = LogRecord::new(result);
        match tokio::time::timeout(self.sink_timeout, sink.append(&record)).await {
            Ok(Ok(())) => {
                tracing::debug!(stage = %PipelineStage::Logging, "Result appended to sink")
            }
            Ok(Err(e)) => tracing::warn!(
                stage = %PipelineStage::Logging,
                error = %e,
                "Failed to append result to sink"
            ),
            Err(_) => tracing::warn!(
                stage = %PipelineStage::Logging,
                timeout_ms = self.sink_timeout.as_millis() as u64,
                "Sink append timed out, result returned without it"
            ),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error(transparent)]
    Transcode(#[from] TranscodeError),
    #[error(transparent)]
    Decode(#[from] AudioDecoderError),
    #[error(transparent)]
    Inference(#[from] InferenceError),
}

impl PipelineError {
    pub fn stage(&self) -> PipelineStage {
        match self {
            PipelineError::Transcode(_) | PipelineError::Decode(_) => PipelineStage::Decoding,
            PipelineError::Inference(_) => PipelineStage::Inferring,
        }
    }
}
