/// Sample count the prediction service expects: two seconds at 16 kHz.
pub const REQUIRED_SAMPLES: usize = 32_000;
pub const SAMPLE_RATE: u32 = 16_000;

/// Mono samples as produced by the decoder, at their natural length.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Waveform {
    pub samples: Vec<f32>,
}

impl Waveform {
    pub fn new(samples: Vec<f32>) -> Self {
        Self { samples }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn duration_secs(&self) -> f32 {
        self.samples.len() as f32 / SAMPLE_RATE as f32
    }
}

/// A waveform whose length has been forced to the service-mandated sample
/// count. Only the framer constructs one.
#[derive(Debug, Clone, PartialEq)]
pub struct FixedWaveform {
    samples: Vec<f32>,
}

impl FixedWaveform {
    pub(crate) fn from_framed(samples: Vec<f32>) -> Self {
        Self { samples }
    }

    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn into_waveform(self) -> Waveform {
        Waveform::new(self.samples)
    }
}
