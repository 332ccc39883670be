//! gui/view/settings.rs
//! Duration form + sound panel.

use iced::widget::{Column, button, checkbox, column, pick_list, row, slider, text};
use iced::{Alignment, Length};

use super::super::state::{Message, Tomato};
use super::super::util::parse_minutes;
use super::constants::{SMALL_TEXT, VOLUME_W, muted};
use super::widgets::minutes_field;
use crate::core::types::{MAX_VOLUME, MIN_VOLUME, SessionKind, Waveform};

/// Work / Short / Long inputs. Locked while a session is started.
pub(crate) fn build_duration_form(state: &Tomato) -> iced::widget::Row<'_, Message> {
    let enabled = !state.session.has_started();
    let drafts = &state.drafts;

    let field = move |label: &'static str, kind: SessionKind| {
        let draft = drafts.get(kind);
        minutes_field(label, kind, draft, parse_minutes(draft).is_some(), enabled)
    };

    row![
        field("Work", SessionKind::Work),
        field("Short", SessionKind::ShortBreak),
        field("Long", SessionKind::LongBreak),
    ]
    .spacing(12)
    .width(Length::Fill)
}

/// Sound toggle; volume, waveform and test button only while sound is on.
pub(crate) fn build_sound_panel(state: &Tomato) -> Column<'_, Message> {
    let settings = &state.settings;

    let toggle = checkbox(settings.sound_enabled)
        .label("Sound notification")
        .on_toggle(Message::SoundToggled);

    let mut panel = column![toggle].spacing(10);

    if settings.sound_enabled {
        let volume = row![
            text("Volume").size(SMALL_TEXT).color(muted()),
            slider(MIN_VOLUME..=MAX_VOLUME, settings.volume, Message::VolumeChanged)
                .step(0.1_f32)
                .width(Length::Fixed(VOLUME_W)),
            text(format!("{:.0}%", settings.volume * 100.0)).size(SMALL_TEXT),
        ]
        .spacing(8)
        .align_y(Alignment::Center);

        let waveform = row![
            text("Tone").size(SMALL_TEXT).color(muted()),
            pick_list(
                Waveform::ALL,
                Some(settings.waveform),
                Message::WaveformSelected
            ),
            button(text("Test sound").size(SMALL_TEXT)).on_press(Message::TestSound),
        ]
        .spacing(8)
        .align_y(Alignment::Center);

        panel = panel.push(volume).push(waveform);
    }

    panel
}
