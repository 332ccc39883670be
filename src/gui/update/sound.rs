//! gui/update/sound.rs
//! Sound preferences + the bridge to the tone engine.
//!
//! GUI never touches rodio directly; it only builds a `ToneRequest`.

use iced::Task;
use tracing::debug;

use super::super::state::{Message, Tomato};
use crate::core::tone::ToneRequest;
use crate::core::types::{MAX_VOLUME, MIN_VOLUME, SessionKind, Waveform};

/// Play the completion tone for `finished`, if sound is on.
pub(crate) fn notify(state: &Tomato, finished: SessionKind) {
    if !state.settings.sound_enabled {
        debug!(%finished, "sound disabled, skipping tone");
        return;
    }

    state.tones.play(ToneRequest {
        finished,
        waveform: state.settings.waveform,
        volume: state.settings.volume,
    });
}

pub(crate) fn test_sound(state: &mut Tomato) -> Task<Message> {
    notify(state, state.session.kind());
    Task::none()
}

pub(crate) fn set_enabled(state: &mut Tomato, enabled: bool) -> Task<Message> {
    state.settings.sound_enabled = enabled;
    Task::none()
}

pub(crate) fn set_volume(state: &mut Tomato, volume: f32) -> Task<Message> {
    // Slider steps are 0.1; snap so 0.30000001 doesn't leak into the label.
    let volume = (volume.clamp(MIN_VOLUME, MAX_VOLUME) * 10.0).round() / 10.0;
    state.settings.volume = volume;
    Task::none()
}

pub(crate) fn set_waveform(state: &mut Tomato, waveform: Waveform) -> Task<Message> {
    state.settings.waveform = waveform;
    Task::none()
}
