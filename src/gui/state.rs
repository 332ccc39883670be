//! GUI state + messages.
//! Pure data definitions used by update/ + view/.

use crate::core::driver::TickDriver;
use crate::core::session::Session;
use crate::core::tone::ToneSink;
use crate::core::types::{SessionKind, Settings, Waveform};

/// What the user typed into the duration fields.
/// Strings, so half-typed or bogus input survives until it parses.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct DurationDrafts {
    pub work: String,
    pub short_break: String,
    pub long_break: String,
}

impl DurationDrafts {
    pub(crate) fn from_settings(settings: &Settings) -> Self {
        Self {
            work: settings.work_minutes.to_string(),
            short_break: settings.short_break_minutes.to_string(),
            long_break: settings.long_break_minutes.to_string(),
        }
    }

    pub(crate) fn get(&self, kind: SessionKind) -> &str {
        match kind {
            SessionKind::Work => &self.work,
            SessionKind::ShortBreak => &self.short_break,
            SessionKind::LongBreak => &self.long_break,
        }
    }

    pub(crate) fn set(&mut self, kind: SessionKind, value: String) {
        match kind {
            SessionKind::Work => self.work = value,
            SessionKind::ShortBreak => self.short_break = value,
            SessionKind::LongBreak => self.long_break = value,
        }
    }
}

/// App state
pub(crate) struct Tomato {
    pub settings: Settings,
    pub drafts: DurationDrafts,

    pub session: Session,
    pub driver: TickDriver,

    // Audio thread handle (or a recorder in tests)
    pub tones: Box<dyn ToneSink>,
}

impl Tomato {
    pub(crate) fn new(settings: Settings, tones: Box<dyn ToneSink>) -> Self {
        Self {
            drafts: DurationDrafts::from_settings(&settings),
            session: Session::new(&settings),
            driver: TickDriver::default(),
            settings,
            tones,
        }
    }
}

/// Message = "something happened".
#[derive(Debug, Clone)]
pub(crate) enum Message {
    // Timer controls
    Start,
    Pause,
    Reset,
    /// Space bar
    ToggleRun,
    /// One second passed for the given driver generation.
    Tick(u64),

    // Settings
    DurationChanged(SessionKind, String),
    SoundToggled(bool),
    VolumeChanged(f32),
    WaveformSelected(Waveform),
    TestSound,
}
