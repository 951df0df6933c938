mod audio_clip;
mod inference_result;
mod log_record;
mod mime_type;
mod waveform;

pub use audio_clip::AudioClip;
pub use inference_result::InferenceResult;
pub use log_record::LogRecord;
pub use mime_type::{MimeType, NATIVE_MIME_TYPE};
pub use waveform::{FixedWaveform, REQUIRED_SAMPLES, SAMPLE_RATE, Waveform};
