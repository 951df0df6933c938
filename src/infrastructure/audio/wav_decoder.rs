use std::io::Cursor;

use symphonia::core::audio::SampleBuffer;
use symphonia::core::codecs::DecoderOptions;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;

use crate::application::ports::{AudioDecoder, AudioDecoderError};
use crate::domain::{SAMPLE_RATE, Waveform};

/// Decodes WAV bytes into the samples of the first channel.
///
/// Further channels are dropped, not mixed. Samples are passed through at the
/// file's own rate; a rate other than 16 kHz is only reported in the logs.
#[derive(Debug, Clone, Copy, Default)]
pub struct WavDecoder;

impl AudioDecoder for WavDecoder {
    fn decode(&self, data: &[u8]) -> Result<Waveform, AudioDecoderError> {
        let cursor = Cursor::new(data.to_vec());
        let mss = MediaSourceStream::new(Box::new(cursor), Default::default());

        let mut hint = Hint::new();
        hint.with_extension("wav");
        let format_opts = FormatOptions::default();
        let metadata_opts = MetadataOptions::default();
        let decoder_opts = DecoderOptions::default();

        let probed = symphonia::default::get_probe()
            .format(&hint, mss, &format_opts, &metadata_opts)
            .map_err(|e| AudioDecoderError::DecodingFailed(format!("probe: {}", e)))?;

        let mut format = probed.format;

        let track = format
            .default_track()
            .ok_or_else(|| AudioDecoderError::DecodingFailed("no audio track found".to_string()))?;

        let track_id = track.id;
        let codec_params = track.codec_params.clone();
        let source_rate = codec_params
            .sample_rate
            .ok_or_else(|| AudioDecoderError::DecodingFailed("unknown sample rate".to_string()))?;

        let mut decoder = symphonia::default::get_codecs()
            .make(&codec_params, &decoder_opts)
            .map_err(|e| AudioDecoderError::DecodingFailed(format!("codec: {}", e)))?;

        let mut first_channel: Vec<f32> = Vec::new();
        let mut channels = codec_params.channels.map(|c| c.count()).unwrap_or(1);

        loop {
            let packet = match format.next_packet() {
                Ok(p) => p,
                Err(symphonia::core::errors::Error::IoError(ref e))
                    if e.kind() == std::io::ErrorKind::UnexpectedEof =>
                {
                    break;
                }
                Err(e) => {
                    return Err(AudioDecoderError::DecodingFailed(format!("packet: {}", e)));
                }
            };

            if packet.track_id() != track_id {
                continue;
            }

            let decoded = match decoder.decode(&packet) {
                Ok(d) => d,
                Err(symphonia::core::errors::Error::DecodeError(e)) => {
                    tracing::warn!(error = %e, "Skipping corrupt audio frame");
                    continue;
                }
                Err(e) => {
                    return Err(AudioDecoderError::DecodingFailed(format!("decode: {}", e)));
                }
            };

            let spec = *decoded.spec();
            let num_frames = decoded.frames();
            if num_frames == 0 {
                continue;
            }
            channels = spec.channels.count().max(1);

            let mut sample_buf = SampleBuffer::<f32>::new(num_frames as u64, spec);
            sample_buf.copy_interleaved_ref(decoded);

            first_channel.extend(sample_buf.samples().iter().step_by(channels).copied());
        }

        if source_rate != SAMPLE_RATE {
            tracing::warn!(
                source_rate,
                expected_rate = SAMPLE_RATE,
                "WAV sample rate differs from the model rate, samples passed through"
            );
        }

        tracing::debug!(
            samples = first_channel.len(),
            channels,
            source_rate,
            "WAV decoded to mono PCM"
        );

        Ok(Waveform::new(first_channel))
    }
}
