//! Session state behind the converter page: the typed text, its derived
//! Morse string, and the two playback controls. Plain mutable fields with
//! direct setters; whatever front end sits on top binds its widgets here.

use std::ops::RangeInclusive;
use std::sync::Arc;

use rodio::OutputStream;

use crate::encoder::encode;
use crate::player::{PlaybackHandle, PlaybackRequest, PlaybackScheduler};
use crate::tone::{CueBank, NullSink, ToneSink};

/// Slider range for the per-unit duration control, in milliseconds.
pub const UNIT_RANGE_MS: RangeInclusive<u64> = 100..=1000;
pub const UNIT_STEP_MS: u64 = 50;
/// Slider step for the volume control; the range is 0.0..=1.0.
pub const VOLUME_STEP: f32 = 0.05;

const DEFAULT_UNIT_MS: u64 = 500;
const DEFAULT_VOLUME: f32 = 1.0;

pub struct MorseSession {
    text: String,
    morse: String,
    unit_ms: u64,
    volume: f32,
    scheduler: PlaybackScheduler,
    _stream: Option<OutputStream>,
}

impl MorseSession {
    /// Opens the default audio output. When no device is available the
    /// session still works, it just plays nothing.
    pub fn new() -> Self {
        match OutputStream::try_default() {
            Ok((stream, handle)) => {
                let mut session = Self::with_sink(Arc::new(CueBank::new(handle)));
                session._stream = Some(stream);
                session
            }
            Err(err) => {
                log::warn!("no audio output available, tones will be silent: {err}");
                Self::with_sink(Arc::new(NullSink))
            }
        }
    }

    /// Builds a session on top of any tone sink.
    pub fn with_sink(sink: Arc<dyn ToneSink>) -> Self {
        Self {
            text: String::new(),
            morse: String::new(),
            unit_ms: DEFAULT_UNIT_MS,
            volume: DEFAULT_VOLUME,
            scheduler: PlaybackScheduler::new(sink),
            _stream: None,
        }
    }

    /// Replaces the typed text and re-encodes the Morse string.
    pub fn set_text(&mut self, text: &str) {
        self.text = text.to_owned();
        self.morse = encode(text);
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// The space-delimited Morse rendering of the current text.
    pub fn morse(&self) -> &str {
        &self.morse
    }

    pub fn set_unit_ms(&mut self, unit_ms: u64) {
        self.unit_ms = unit_ms.clamp(*UNIT_RANGE_MS.start(), *UNIT_RANGE_MS.end());
    }

    pub fn unit_ms(&self) -> u64 {
        self.unit_ms
    }

    pub fn set_volume(&mut self, volume: f32) {
        self.volume = volume.clamp(0.0, 1.0);
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }

    /// Plays the current Morse string with the current controls.
    ///
    /// Returns `None` when there is nothing to play or a playback is
    /// already running; the pending campaign is unaffected either way.
    pub fn play(&self) -> Option<PlaybackHandle> {
        self.scheduler
            .schedule(PlaybackRequest::new(&self.morse, self.unit_ms, self.volume))
    }

    pub fn is_playing(&self) -> bool {
        self.scheduler.is_playing()
    }

    pub fn connect_playback_started<F>(&mut self, callback: F)
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.scheduler.connect_playback_started(callback);
    }

    pub fn connect_playback_ended<F>(&mut self, callback: F)
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.scheduler.connect_playback_ended(callback);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn silent_session() -> MorseSession {
        MorseSession::with_sink(Arc::new(NullSink))
    }

    #[test]
    fn set_text_reencodes_synchronously() {
        let mut session = silent_session();
        session.set_text("sos");
        assert_eq!(session.morse(), "... --- ...");
        session.set_text("");
        assert_eq!(session.morse(), "");
    }

    #[test]
    fn controls_are_clamped_to_their_ranges() {
        let mut session = silent_session();
        session.set_unit_ms(50);
        assert_eq!(session.unit_ms(), 100);
        session.set_unit_ms(5000);
        assert_eq!(session.unit_ms(), 1000);
        session.set_volume(2.0);
        assert_eq!(session.volume(), 1.0);
        session.set_volume(-1.0);
        assert_eq!(session.volume(), 0.0);
    }

    #[tokio::test(start_paused = true)]
    async fn play_with_empty_text_is_rejected() {
        let session = silent_session();
        assert!(session.play().is_none());
        assert!(!session.is_playing());
    }
}
