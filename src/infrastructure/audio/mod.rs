mod ffmpeg_transcoder;
mod wav_decoder;

pub use ffmpeg_transcoder::FfmpegTranscoder;
pub use wav_decoder::WavDecoder;
