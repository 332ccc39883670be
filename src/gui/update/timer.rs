//! gui/update/timer.rs
//! Start / pause / reset and the one-second tick.
//!
//! The session machine decides *what* happens; this file keeps the tick
//! driver in step with it so at most one timer is ever live:
//! - phase becomes Running -> arm (fresh generation)
//! - pause / reset / expiry -> cancel

use iced::Task;
use tracing::{debug, info};

use super::super::state::{Message, Tomato};
use super::sound;
use crate::core::session::TickOutcome;

pub(crate) fn start(state: &mut Tomato) -> Task<Message> {
    if state.session.start() {
        let generation = state.driver.arm();
        info!(
            session = %state.session.kind(),
            remaining = state.session.remaining_secs(),
            generation,
            "timer started"
        );
    }
    Task::none()
}

pub(crate) fn pause(state: &mut Tomato) -> Task<Message> {
    if state.session.pause() {
        state.driver.cancel();
        info!(remaining = state.session.remaining_secs(), "timer paused");
    }
    Task::none()
}

pub(crate) fn toggle(state: &mut Tomato) -> Task<Message> {
    if state.session.is_running() {
        pause(state)
    } else {
        start(state)
    }
}

pub(crate) fn reset(state: &mut Tomato) -> Task<Message> {
    state.session.reset(&state.settings);
    state.driver.cancel();
    info!(session = %state.session.kind(), "timer reset");
    Task::none()
}

pub(crate) fn tick(state: &mut Tomato, generation: u64) -> Task<Message> {
    if !state.driver.accepts(generation) {
        debug!(generation, "dropping stale tick");
        return Task::none();
    }

    match state.session.tick(&state.settings) {
        TickOutcome::Ignored | TickOutcome::Counted => {}
        TickOutcome::Expired(expiry) => {
            state.driver.cancel();
            info!(
                finished = %expiry.finished,
                next = %expiry.next,
                completed_work = expiry.completed_work,
                long_break = expiry.earned_long_break(),
                "session complete"
            );
            sound::notify(state, expiry.finished);
        }
    }

    Task::none()
}
