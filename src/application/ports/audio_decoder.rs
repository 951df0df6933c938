use crate::domain::Waveform;

pub trait AudioDecoder: Send + Sync {
    fn decode(&self, data: &[u8]) -> Result<Waveform, AudioDecoderError>;
}

#[derive(Debug, thiserror::Error)]
pub enum AudioDecoderError {
    #[error("invalid WAV file: {0}")]
    DecodingFailed(String),
}
