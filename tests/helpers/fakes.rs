use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use hearken::application::ports::{
    AudioDecoder, AudioDecoderError, CredentialError, InferenceClient, InferenceError, ResultSink, SinkError, TokenProvider,
    TranscodeError, Transcoder,
};
use hearken::application::services::{EmbeddingService, FormatBridge};
use hearken::domain::{FixedWaveform, InferenceResult, LogRecord, REQUIRED_SAMPLES, Waveform};
use hearken::infrastructure::audio::WavDecoder;

use super::wav::build_mono_wav;

#[derive(Debug, Clone)]
pub struct TranscodeCall {
    pub input: PathBuf,
    pub output: PathBuf,
    pub input_bytes: Vec<u8>,
}

/// Writes a fixed WAV to the output path, standing in for ffmpeg.
pub struct WavWritingTranscoder {
    wav: Vec<u8>,
    pub calls: Mutex<Vec<TranscodeCall>>,
}

impl WavWritingTranscoder {
    pub fn new(wav: Vec<u8>) -> Self {
        Self {
            wav,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_samples(samples: &[i16]) -> Self {
        Self::new(build_mono_wav(samples))
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn last_call(&self) -> Option<TranscodeCall> {
        self.calls.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl Transcoder for WavWritingTranscoder {
    async fn transcode(&self, input: &Path, output: &Path) -> Result<(), TranscodeError> {
        let input_bytes = tokio::fs::read(input).await?;
        self.calls.lock().unwrap().push(TranscodeCall {
            input: input.to_path_buf(),
            output: output.to_path_buf(),
            input_bytes,
        });
        tokio::fs::write(output, &self.wav).await?;
        Ok(())
    }
}

/// Fails like a tool that rejected its input, after confirming the input was staged.
pub struct FailingTranscoder {
    pub diagnostic: String,
    pub seen_input: Mutex<Option<PathBuf>>,
}

impl FailingTranscoder {
    pub fn new(diagnostic: &str) -> Self {
        Self {
            diagnostic: diagnostic.to_string(),
            seen_input: Mutex::new(None),
        }
    }
}

#[async_trait]
impl Transcoder for FailingTranscoder {
    async fn transcode(&self, input: &Path, output: &Path) -> Result<(), TranscodeError> {
        assert!(input.exists());
        tokio::fs::write(output, b"partial").await?;
        *self.seen_input.lock().unwrap() = Some(input.to_path_buf());
        Err(TranscodeError::Failed(self.diagnostic.clone()))
    }
}

pub struct PanickingTranscoder;

#[async_trait]
impl Transcoder for PanickingTranscoder {
    async fn transcode(&self, input: &Path, _output: &Path) -> Result<(), TranscodeError> {
        assert!(input.exists());
        panic!("transcoder crashed");
    }
}

/// Records every waveform it is asked to score and answers with a fixed value.
pub struct RecordingInferenceClient {
    response: serde_json::Value,
    pub waveforms: Mutex<Vec<Vec<f32>>>,
}

impl RecordingInferenceClient {
    pub fn new(response: serde_json::Value) -> Self {
        Self {
            response,
            waveforms: Mutex::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.waveforms.lock().unwrap().len()
    }

    pub fn last_waveform(&self) -> Option<Vec<f32>> {
        self.waveforms.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl InferenceClient for RecordingInferenceClient {
    async fn predict(&self, waveform: &FixedWaveform) -> Result<InferenceResult, InferenceError> {
        self.waveforms
            .lock()
            .unwrap()
            .push(waveform.samples().to_vec());
        Ok(InferenceResult::new(self.response.clone()))
    }
}

pub struct FailingInferenceClient {
    pub status: u16,
    pub body: String,
}

#[async_trait]
impl InferenceClient for FailingInferenceClient {
    async fn predict(&self, _waveform: &FixedWaveform) -> Result<InferenceResult, InferenceError> {
        Err(InferenceError::Service {
            status: self.status,
            body: self.body.clone(),
        })
    }
}

#[derive(Default)]
pub struct RecordingSink {
    pub records: Mutex<Vec<LogRecord>>,
}

impl RecordingSink {
    pub fn count(&self) -> usize {
        self.records.lock().unwrap().len()
    }
}

#[async_trait]
impl ResultSink for RecordingSink {
    async fn append(&self, record: &LogRecord) -> Result<(), SinkError> {
        self.records.lock().unwrap().push(record.clone());
        Ok(())
    }
}

#[derive(Default)]
pub struct FailingSink {
    pub attempts: AtomicUsize,
}

#[async_trait]
impl ResultSink for FailingSink {
    async fn append(&self, _record: &LogRecord) -> Result<(), SinkError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Err(SinkError::AppendFailed("HTTP 503: sheet unavailable".to_string()))
    }
}

/// Never completes an append, like a sheet endpoint that stopped answering.
#[derive(Default)]
pub struct HangingSink {
    pub attempts: AtomicUsize,
}

#[async_trait]
impl ResultSink for HangingSink {
    async fn append(&self, _record: &LogRecord) -> Result<(), SinkError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        std::future::pending().await
    }
}

pub struct PanickingDecoder;

impl AudioDecoder for PanickingDecoder {
    fn decode(&self, _data: &[u8]) -> Result<Waveform, AudioDecoderError> {
        panic!("decoder crashed");
    }
}

pub struct FailingTokenProvider;

#[async_trait]
impl TokenProvider for FailingTokenProvider {
    async fn access_token(&self) -> Result<String, CredentialError> {
        Err(CredentialError::Unavailable("not logged in".to_string()))
    }
}

pub fn default_predictions() -> serde_json::Value {
    serde_json::json!([{ "embedding": [0.25, -0.5, 0.75] }])
}

pub fn build_service(
    transcoder: Arc<dyn Transcoder>,
    inference_client: Arc<dyn InferenceClient>,
    sink: Option<Arc<dyn ResultSink>>,
) -> EmbeddingService {
    EmbeddingService::new(
        FormatBridge::new(transcoder, None),
        Arc::new(WavDecoder),
        inference_client,
        sink,
        REQUIRED_SAMPLES,
    )
}
