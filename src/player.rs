//! Timed playback of an encoded Morse message.
//!
//! The scheduler walks the raw encoded string character by character:
//! every position occupies one unit of time, `.` and `-` trigger a tone
//! at their offset, everything else (token delimiters, `/`) is a silent
//! slot. Triggers are independent fire-and-forget timer tasks; the only
//! shared state is the single in-progress flag guarding against a second
//! campaign starting while one is running.

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};
use std::time::Duration;

use tokio::sync::oneshot;
use tokio::time::sleep;

use crate::tone::{ToneKind, ToneSink};

pub type PlaybackStartedCallback = Arc<dyn Fn() + Send + Sync + 'static>;
pub type PlaybackEndedCallback = Arc<dyn Fn() + Send + Sync + 'static>;

/// One playback invocation: the encoded message plus the controls in
/// effect when play was pressed. Immutable once scheduling begins.
pub struct PlaybackRequest {
    message: String,
    unit: Duration,
    volume: f32,
}

impl PlaybackRequest {
    pub fn new(message: impl Into<String>, unit_ms: u64, volume: f32) -> Self {
        Self {
            message: message.into(),
            unit: Duration::from_millis(unit_ms.max(1)),
            volume: volume.clamp(0.0, 1.0),
        }
    }
}

/// Completion observable for one campaign.
pub struct PlaybackHandle {
    done: oneshot::Receiver<()>,
}

impl PlaybackHandle {
    /// Resolves when the campaign's time horizon has elapsed.
    pub async fn finished(self) {
        let _ = self.done.await;
    }
}

pub struct PlaybackScheduler {
    sink: Arc<dyn ToneSink>,
    in_progress: Arc<AtomicBool>,
    started_callback: Option<PlaybackStartedCallback>,
    ended_callback: Option<PlaybackEndedCallback>,
}

impl PlaybackScheduler {
    pub fn new(sink: Arc<dyn ToneSink>) -> Self {
        Self {
            sink,
            in_progress: Arc::new(AtomicBool::new(false)),
            started_callback: None,
            ended_callback: None,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.in_progress.load(Ordering::SeqCst)
    }

    pub fn connect_playback_started<F>(&mut self, callback: F)
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.started_callback = Some(Arc::new(callback));
    }

    pub fn connect_playback_ended<F>(&mut self, callback: F)
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.ended_callback = Some(Arc::new(callback));
    }

    /// Starts one playback campaign.
    ///
    /// Returns `None` without side effects when the message is empty or
    /// a campaign is already running. Otherwise every `.` and `-` in the
    /// message gets a tone trigger at `position x unit`, and completion
    /// fires at `message length x unit`, at which point the scheduler
    /// accepts requests again. There is no cancellation: once committed,
    /// a campaign runs to its time horizon.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn schedule(&self, request: PlaybackRequest) -> Option<PlaybackHandle> {
        if request.message.is_empty() {
            log::debug!("playback rejected: empty message");
            return None;
        }
        if self
            .in_progress
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            log::debug!("playback rejected: campaign already in progress");
            return None;
        }

        let char_count = request.message.chars().count();
        log::debug!(
            "playback started: {} slots, unit {:?}, volume {}",
            char_count,
            request.unit,
            request.volume
        );
        if let Some(callback) = &self.started_callback {
            callback();
        }

        for (i, symbol) in request.message.chars().enumerate() {
            let kind = match symbol {
                '.' => ToneKind::Dot,
                '-' => ToneKind::Dash,
                _ => continue,
            };
            let sink = Arc::clone(&self.sink);
            let offset = request.unit * i as u32;
            let volume = request.volume;
            tokio::spawn(async move {
                sleep(offset).await;
                sink.play(kind, volume);
            });
        }

        let horizon = request.unit * char_count as u32;
        let in_progress = Arc::clone(&self.in_progress);
        let ended_callback = self.ended_callback.clone();
        let (done_tx, done_rx) = oneshot::channel();
        tokio::spawn(async move {
            sleep(horizon).await;
            in_progress.store(false, Ordering::SeqCst);
            if let Some(callback) = ended_callback {
                callback();
            }
            let _ = done_tx.send(());
        });

        Some(PlaybackHandle { done: done_rx })
    }
}
