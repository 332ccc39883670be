//! gui/subscription.rs
//! Background event sources:
//! - the one-second tick, only while the driver is armed
//! - global keyboard shortcuts (Space = start/pause, R = reset)

use iced::keyboard::{self, Key, key::Named};
use iced::{Event, Subscription, event, time, window};
use std::time::Duration;

use super::state::{Message, Tomato};

const TICK: Duration = Duration::from_secs(1);

pub(crate) fn subscription(state: &Tomato) -> Subscription<Message> {
    let shortcuts = event::listen_with(shortcut);

    // Keyed on the generation: a new generation replaces the old timer stream.
    match state.driver.armed() {
        Some(generation) => Subscription::batch([
            shortcuts,
            time::every(TICK)
                .with(generation)
                .map(|(generation, _)| Message::Tick(generation)),
        ]),
        None => shortcuts,
    }
}

/// Maps a raw window event to a shortcut.
/// Only sees events after widgets have had them, so it fires for keys no
/// widget captured (typing in a duration field is left alone).
fn shortcut(event: Event, status: event::Status, _window: window::Id) -> Option<Message> {
    if status == event::Status::Captured {
        return None;
    }

    let Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) = event else {
        return None;
    };

    if modifiers.command() || modifiers.alt() {
        return None;
    }

    shortcut_for_key(key.as_ref())
}

fn shortcut_for_key(key: Key<&str>) -> Option<Message> {
    match key {
        Key::Named(Named::Space) => Some(Message::ToggleRun),
        Key::Character(c) if c.eq_ignore_ascii_case("r") => Some(Message::Reset),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn space_toggles() {
        assert!(matches!(
            shortcut_for_key(Key::Named(Named::Space)),
            Some(Message::ToggleRun)
        ));
    }

    #[test]
    fn r_resets_either_case() {
        assert!(matches!(
            shortcut_for_key(Key::Character("r")),
            Some(Message::Reset)
        ));
        assert!(matches!(
            shortcut_for_key(Key::Character("R")),
            Some(Message::Reset)
        ));
    }

    fn key_press(key: Key, modifiers: keyboard::Modifiers) -> Event {
        Event::Keyboard(keyboard::Event::KeyPressed {
            key: key.clone(),
            modified_key: key,
            physical_key: keyboard::key::Physical::Code(keyboard::key::Code::Space),
            location: keyboard::Location::Standard,
            modifiers,
            text: None,
            repeat: false,
        })
    }

    #[test]
    fn uncaptured_space_toggles() {
        let ev = key_press(Key::Named(Named::Space), keyboard::Modifiers::empty());
        assert!(matches!(
            shortcut(ev, event::Status::Ignored, window::Id::unique()),
            Some(Message::ToggleRun)
        ));
    }

    #[test]
    fn captured_keys_are_left_to_the_widget() {
        let space = key_press(Key::Named(Named::Space), keyboard::Modifiers::empty());
        assert!(shortcut(space, event::Status::Captured, window::Id::unique()).is_none());

        let r = key_press(Key::Character("r".into()), keyboard::Modifiers::empty());
        assert!(shortcut(r, event::Status::Captured, window::Id::unique()).is_none());
    }

    #[test]
    fn modified_keys_are_not_shortcuts() {
        for modifiers in [keyboard::Modifiers::COMMAND, keyboard::Modifiers::ALT] {
            let ev = key_press(Key::Named(Named::Space), modifiers);
            assert!(shortcut(ev, event::Status::Ignored, window::Id::unique()).is_none());
        }
    }

    #[test]
    fn other_keys_do_nothing() {
        assert!(shortcut_for_key(Key::Character("s")).is_none());
        assert!(shortcut_for_key(Key::Named(Named::Enter)).is_none());
    }
}
