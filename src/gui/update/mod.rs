//! gui/update/mod.rs
//! Update logic (router).
//! Mutates state in response to `Message` events.

use iced::Task;

use super::state::{Message, Tomato};

mod durations;
mod sound;
mod timer;

pub(crate) fn update(state: &mut Tomato, message: Message) -> Task<Message> {
    match message {
        // Timer
        Message::Start => timer::start(state),
        Message::Pause => timer::pause(state),
        Message::Reset => timer::reset(state),
        Message::ToggleRun => timer::toggle(state),
        Message::Tick(generation) => timer::tick(state, generation),

        // Settings
        Message::DurationChanged(kind, value) => durations::duration_changed(state, kind, value),
        Message::SoundToggled(enabled) => sound::set_enabled(state, enabled),
        Message::VolumeChanged(volume) => sound::set_volume(state, volume),
        Message::WaveformSelected(waveform) => sound::set_waveform(state, waveform),
        Message::TestSound => sound::test_sound(state),
    }
}
