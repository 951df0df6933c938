use crate::domain::{FixedWaveform, Waveform};

/// Forces `waveform` to exactly `required` samples.
///
/// Longer input keeps its prefix; shorter input is zero-padded at the end.
/// Never fails: an empty waveform becomes `required` samples of silence.
pub fn frame(waveform: Waveform, required: usize) -> FixedWaveform {
    let mut samples = waveform.samples;
    let original_len = samples.len();

    if original_len > required {
        samples.truncate(required);
    } else if original_len < required {
        samples.resize(required, 0.0);
    }

    tracing::debug!(
        original_len,
        required,
        padded = original_len < required,
        truncated = original_len > required,
        "Waveform framed"
    );

    FixedWaveform::from_framed(samples)
}

/// Frames an already fixed waveform again, e.g. when the required length is
/// changed at runtime. A no-op when the length already matches.
pub fn reframe(waveform: FixedWaveform, required: usize) -> FixedWaveform {
    if waveform.len() == required {
        return waveform;
    }
    frame(waveform.into_waveform(), required)
}
