//! core/session.rs
//! Session state machine.
//!
//! Owns the countdown for one session at a time and decides what comes next
//! when it runs out. Everything here is pure: no timers, no audio.
//! The GUI turns `TickOutcome::Expired` into a tone request.

use tracing::debug;

use super::types::{LONG_BREAK_EVERY, Phase, SessionKind, Settings};

/// Result of a session running out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Expiry {
    /// The session that just ended (drives the tone pitch).
    pub finished: SessionKind,
    pub next: SessionKind,
    /// Remaining seconds of `next`.
    pub next_secs: u32,
    /// Completed work sessions after this expiry.
    pub completed_work: u32,
}

impl Expiry {
    pub fn earned_long_break(&self) -> bool {
        self.next == SessionKind::LongBreak
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not running; nothing changed.
    Ignored,
    /// One second came off the clock.
    Counted,
    Expired(Expiry),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    kind: SessionKind,
    remaining_secs: u32,
    phase: Phase,
    completed_work: u32,
}

impl Session {
    /// Fresh Work session, idle, full duration.
    pub fn new(settings: &Settings) -> Self {
        Self {
            kind: SessionKind::Work,
            remaining_secs: settings.duration_secs(SessionKind::Work),
            phase: Phase::Idle,
            completed_work: 0,
        }
    }

    pub fn kind(&self) -> SessionKind {
        self.kind
    }

    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn completed_work(&self) -> u32 {
        self.completed_work
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    pub fn has_started(&self) -> bool {
        self.phase != Phase::Idle
    }

    /// Start or resume. Returns true if the phase actually changed
    /// (starting an already running session is a no-op).
    pub fn start(&mut self) -> bool {
        if self.is_running() {
            return false;
        }
        self.phase = Phase::Running;
        true
    }

    /// Pause, keeping the remaining time. Returns true if it was running.
    pub fn pause(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        self.phase = Phase::Paused;
        true
    }

    /// Back to idle with the full configured duration of the current kind.
    /// The completed-work count and session kind survive a reset.
    pub fn reset(&mut self, settings: &Settings) {
        self.phase = Phase::Idle;
        self.remaining_secs = settings.duration_secs(self.kind);
    }

    /// Follow a configuration edit. Only an idle session picks up the new
    /// duration; a started one keeps counting what it had.
    pub fn resync(&mut self, settings: &Settings) -> bool {
        if self.has_started() {
            return false;
        }
        self.remaining_secs = settings.duration_secs(self.kind);
        true
    }

    /// What happens if the current session ends now.
    pub fn expire(&self, settings: &Settings) -> Expiry {
        let (next, completed_work) = match self.kind {
            SessionKind::Work => {
                let count = self.completed_work.saturating_add(1);
                if count % LONG_BREAK_EVERY == 0 {
                    (SessionKind::LongBreak, count)
                } else {
                    (SessionKind::ShortBreak, count)
                }
            }
            SessionKind::ShortBreak | SessionKind::LongBreak => {
                (SessionKind::Work, self.completed_work)
            }
        };

        Expiry {
            finished: self.kind,
            next,
            next_secs: settings.duration_secs(next),
            completed_work,
        }
    }

    /// One second of countdown. The clock never shows 00:00: the tick that
    /// would get there switches to the next session instead.
    pub fn tick(&mut self, settings: &Settings) -> TickOutcome {
        if !self.is_running() {
            return TickOutcome::Ignored;
        }

        if self.remaining_secs > 1 {
            self.remaining_secs -= 1;
            return TickOutcome::Counted;
        }

        let expiry = self.expire(settings);
        self.apply(&expiry);
        debug!(
            finished = %expiry.finished,
            next = %expiry.next,
            completed_work = expiry.completed_work,
            "session expired"
        );
        TickOutcome::Expired(expiry)
    }

    fn apply(&mut self, expiry: &Expiry) {
        self.phase = Phase::Idle;
        self.kind = expiry.next;
        self.remaining_secs = expiry.next_secs;
        self.completed_work = expiry.completed_work;
    }
}
