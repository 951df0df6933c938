use hearken::application::services::{frame, reframe};
use hearken::domain::{REQUIRED_SAMPLES, Waveform};

fn numbered(len: usize) -> Vec<f32> {
    (0..len).map(|i| i as f32 * 0.001).collect()
}

#[test]
fn given_longer_waveform_when_framing_then_keeps_prefix() {
    let input = numbered(40_000);

    let framed = frame(Waveform::new(input.clone()), REQUIRED_SAMPLES);

    assert_eq!(framed.len(), REQUIRED_SAMPLES);
    assert_eq!(framed.samples(), &input[..REQUIRED_SAMPLES]);
}

#[test]
fn given_shorter_waveform_when_framing_then_zero_pads_the_end() {
    let input = numbered(10_000);

    let framed = frame(Waveform::new(input.clone()), REQUIRED_SAMPLES);

    assert_eq!(framed.len(), REQUIRED_SAMPLES);
    assert_eq!(&framed.samples()[..10_000], input.as_slice());
    assert!(framed.samples()[10_000..].iter().all(|&s| s == 0.0));
    assert_eq!(framed.samples()[10_000..].len(), 22_000);
}

#[test]
fn given_exact_length_waveform_when_framing_then_passes_through() {
    let input = numbered(REQUIRED_SAMPLES);

    let framed = frame(Waveform::new(input.clone()), REQUIRED_SAMPLES);

    assert_eq!(framed.samples(), input.as_slice());
}

#[test]
fn given_empty_waveform_when_framing_then_returns_silence() {
    let framed = frame(Waveform::default(), REQUIRED_SAMPLES);

    assert_eq!(framed.len(), REQUIRED_SAMPLES);
    assert!(framed.samples().iter().all(|&s| s == 0.0));
}

#[test]
fn given_various_lengths_when_framing_then_length_is_always_required() {
    for len in [0, 1, 31_999, 32_000, 32_001, 100_000] {
        let input = numbered(len);
        let framed = frame(Waveform::new(input.clone()), REQUIRED_SAMPLES);

        assert_eq!(framed.len(), REQUIRED_SAMPLES, "input length {}", len);
        let kept = len.min(REQUIRED_SAMPLES);
        assert_eq!(&framed.samples()[..kept], &input[..kept]);
        assert!(framed.samples()[kept..].iter().all(|&s| s == 0.0));
    }
}

#[test]
fn given_framed_waveform_when_framed_again_then_is_unchanged() {
    let once = frame(Waveform::new(numbered(12_345)), REQUIRED_SAMPLES);

    let twice = frame(once.clone().into_waveform(), REQUIRED_SAMPLES);
    let reframed = reframe(once.clone(), REQUIRED_SAMPLES);

    assert_eq!(twice, once);
    assert_eq!(reframed, once);
}

#[test]
fn given_custom_required_length_when_reframing_then_adopts_new_length() {
    let framed = frame(Waveform::new(numbered(100)), 64);

    let reframed = reframe(framed, 128);

    assert_eq!(reframed.len(), 128);
    assert_eq!(&reframed.samples()[..64], &numbered(64)[..]);
}
