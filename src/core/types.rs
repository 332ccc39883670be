//! core/types.rs
//! Plain data shared by the session machine, the tone synth and the GUI.

use std::fmt;

/// Which interval the timer is counting down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionKind {
    Work,
    ShortBreak,
    LongBreak,
}

impl SessionKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Work => "Work",
            Self::ShortBreak => "Short Break",
            Self::LongBreak => "Long Break",
        }
    }
}

impl fmt::Display for SessionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Oscillator shape for the completion tone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Waveform {
    #[default]
    Sine,
    Square,
    Triangle,
    Sawtooth,
}

impl Waveform {
    pub const ALL: [Waveform; 4] = [Self::Sine, Self::Square, Self::Triangle, Self::Sawtooth];
}

impl fmt::Display for Waveform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Sine => "Sine",
            Self::Square => "Square",
            Self::Triangle => "Triangle",
            Self::Sawtooth => "Sawtooth",
        };
        f.write_str(name)
    }
}

/// Run phase of the current session.
///
/// `Idle` = never started since the last reset/transition (durations editable).
/// `Paused` keeps the remaining time and still counts as started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Running,
    Paused,
}

pub const DEFAULT_WORK_MINUTES: u32 = 25;
pub const DEFAULT_SHORT_BREAK_MINUTES: u32 = 5;
pub const DEFAULT_LONG_BREAK_MINUTES: u32 = 15;
pub const DEFAULT_VOLUME: f32 = 0.5;

pub const MIN_VOLUME: f32 = 0.1;
pub const MAX_VOLUME: f32 = 1.0;

/// Work sessions per long break.
pub const LONG_BREAK_EVERY: u32 = 4;

/// User configuration. Durations are whole minutes and are NOT clamped:
/// whatever the user typed (as long as it parses) flows into the countdown.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    pub work_minutes: u32,
    pub short_break_minutes: u32,
    pub long_break_minutes: u32,

    pub sound_enabled: bool,
    /// 0.1..=1.0
    pub volume: f32,
    pub waveform: Waveform,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            work_minutes: DEFAULT_WORK_MINUTES,
            short_break_minutes: DEFAULT_SHORT_BREAK_MINUTES,
            long_break_minutes: DEFAULT_LONG_BREAK_MINUTES,

            sound_enabled: true,
            volume: DEFAULT_VOLUME,
            waveform: Waveform::Sine,
        }
    }
}

impl Settings {
    pub fn minutes(&self, kind: SessionKind) -> u32 {
        match kind {
            SessionKind::Work => self.work_minutes,
            SessionKind::ShortBreak => self.short_break_minutes,
            SessionKind::LongBreak => self.long_break_minutes,
        }
    }

    pub fn set_minutes(&mut self, kind: SessionKind, minutes: u32) {
        match kind {
            SessionKind::Work => self.work_minutes = minutes,
            SessionKind::ShortBreak => self.short_break_minutes = minutes,
            SessionKind::LongBreak => self.long_break_minutes = minutes,
        }
    }

    /// Configured length of `kind` in seconds.
    pub fn duration_secs(&self, kind: SessionKind) -> u32 {
        self.minutes(kind).saturating_mul(60)
    }
}
