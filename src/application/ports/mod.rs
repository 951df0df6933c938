mod audio_decoder;
mod inference_client;
mod result_sink;
mod token_provider;
mod transcoder;

pub use audio_decoder::{AudioDecoder, AudioDecoderError};
pub use inference_client::{InferenceClient, InferenceError};
pub use result_sink::{ResultSink, SinkError};
pub use token_provider::{CredentialError, TokenProvider};
pub use transcoder::{TranscodeError, Transcoder};
