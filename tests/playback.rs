use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc, Mutex,
};
use std::time::Duration;

use morse_converter::{MorseSession, ToneKind, ToneSink};
use tokio::time::Instant;

struct RecordingSink {
    start: Instant,
    events: Mutex<Vec<(ToneKind, Duration)>>,
}

impl RecordingSink {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            start: Instant::now(),
            events: Mutex::new(Vec::new()),
        })
    }
}

impl ToneSink for RecordingSink {
    fn play(&self, kind: ToneKind, _volume: f32) {
        self.events
            .lock()
            .unwrap()
            .push((kind, self.start.elapsed()));
    }
}

#[tokio::test(start_paused = true)]
async fn full_session_campaign() {
    let sink = RecordingSink::new();
    let mut session = MorseSession::with_sink(sink.clone());

    let ended = Arc::new(AtomicBool::new(false));
    {
        let ended = ended.clone();
        session.connect_playback_ended(move || ended.store(true, Ordering::SeqCst));
    }

    session.set_text("sos");
    assert_eq!(session.morse(), "... --- ...");
    session.set_unit_ms(100);
    session.set_volume(0.5);

    let start = Instant::now();
    let handle = session.play().expect("playback should start");
    assert!(session.is_playing());
    // Pressing play again during the campaign is ignored.
    assert!(session.play().is_none());

    handle.finished().await;

    // "... --- ..." has 11 character slots: 9 tones and 2 gaps.
    let events = sink.events.lock().unwrap();
    assert_eq!(events.len(), 9);
    assert_eq!(
        events.iter().filter(|(k, _)| *k == ToneKind::Dash).count(),
        3
    );
    assert!(events
        .iter()
        .all(|(_, offset)| *offset < Duration::from_millis(1100)));

    assert_eq!(start.elapsed(), Duration::from_millis(1100));
    assert!(ended.load(Ordering::SeqCst));
    assert!(!session.is_playing());

    // The session is idle again and accepts the next campaign.
    assert!(session.play().is_some());
}
