//! Tone cues and the audio output seam.
//!
//! Playback works with two fixed cues, a short "dot" pulse and a long
//! "dash" pulse, synthesized once at startup and replayed on demand.

use std::f32::consts::PI;
use std::sync::Arc;

use ndarray::Array1;
use rodio::{buffer::SamplesBuffer, OutputStreamHandle, Source};

const SAMPLE_RATE: u32 = 48000;
const CUE_FREQUENCY: f32 = 750.0;
const DOT_CUE_SECONDS: f32 = 0.06;
const DASH_CUE_SECONDS: f32 = 0.18;
const FADE_SECONDS: f32 = 0.004;

/// The two tone cues a Morse playback can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToneKind {
    Dot,
    Dash,
}

/// Audio collaborator for the playback scheduler.
///
/// Dispatch is fire-and-forget: implementations have no error channel
/// and playback correctness never depends on a tone being heard.
pub trait ToneSink: Send + Sync {
    fn play(&self, kind: ToneKind, volume: f32);
}

/// Silent backend for headless environments and tests.
pub struct NullSink;

impl ToneSink for NullSink {
    fn play(&self, _kind: ToneKind, _volume: f32) {}
}

/// Rodio-backed sink holding the two synthesized cues.
pub struct CueBank {
    handle: OutputStreamHandle,
    dot: Arc<Vec<f32>>,
    dash: Arc<Vec<f32>>,
}

impl CueBank {
    pub fn new(handle: OutputStreamHandle) -> Self {
        Self {
            handle,
            dot: Arc::new(sine_cue(DOT_CUE_SECONDS)),
            dash: Arc::new(sine_cue(DASH_CUE_SECONDS)),
        }
    }
}

impl ToneSink for CueBank {
    fn play(&self, kind: ToneKind, volume: f32) {
        let cue = match kind {
            ToneKind::Dot => &self.dot,
            ToneKind::Dash => &self.dash,
        };
        let source = SamplesBuffer::new(1, SAMPLE_RATE, cue.to_vec()).amplify(volume);
        if let Err(err) = self.handle.play_raw(source) {
            log::warn!("failed to dispatch {kind:?} tone: {err}");
        }
    }
}

/// Synthesizes one sine cue with Hann fades at both ends to avoid
/// clicks when the pulse starts and stops.
fn sine_cue(seconds: f32) -> Vec<f32> {
    let sample_count = (SAMPLE_RATE as f32 * seconds) as usize;
    let t = Array1::linspace(0.0, seconds, sample_count);
    let mut wave = (2.0 * PI * CUE_FREQUENCY * t).mapv(f32::sin);

    let fade_samples = (SAMPLE_RATE as f32 * FADE_SECONDS) as usize;
    apply_hann_fades(&mut wave, fade_samples);

    wave.to_vec()
}

fn apply_hann_fades(samples: &mut Array1<f32>, fade_samples: usize) {
    let hann_in = Array1::linspace(0.0, PI, fade_samples).mapv(|x| 0.5 * (1.0 - f32::cos(x)));
    let hann_out = Array1::linspace(PI, 0.0, fade_samples).mapv(|x| 0.5 * (1.0 - f32::cos(x)));

    for i in 0..fade_samples {
        samples[i] *= hann_in[i];
    }

    let len = samples.len();
    for i in 0..fade_samples {
        samples[len - fade_samples + i] *= hann_out[i];
    }
}
