pub mod encoder;
pub mod player;
pub mod session;
pub mod tone;

pub use encoder::encode;
pub use player::{PlaybackHandle, PlaybackRequest, PlaybackScheduler};
pub use session::MorseSession;
pub use tone::{CueBank, NullSink, ToneKind, ToneSink};
