mod health;
mod process_audio;

pub use health::health_handler;
pub use process_audio::{
    ErrorResponse, MISSING_AUDIO_MESSAGE, ProcessAudioRequest, ProcessAudioResponse,
    method_not_allowed_handler, pipeline_error_status, process_audio_handler,
};
