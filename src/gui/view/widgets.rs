//! Reusable small widgets/helpers used across view modules.

use iced::widget::{column, container, text, text_input};
use iced::{Alignment, Color, Length, border};

use super::super::state::Message;
use super::constants::{FIELD_W, SMALL_TEXT, invalid, muted};
use crate::core::types::SessionKind;

/// Rounded pill with a label.
pub(crate) fn badge<'a>(
    label: String,
    fg: Color,
    bg: Color,
    edge: Color,
) -> iced::widget::Container<'a, Message> {
    container(text(label).size(SMALL_TEXT).color(fg))
        .padding([4, 12])
        .style(move |_theme| container::Style {
            background: Some(bg.into()),
            border: border::rounded(12.0_f32).color(edge).width(1.0_f32),
            ..container::Style::default()
        })
}

/// Labelled minutes box for one session kind.
/// Disabled (no on_input) once the timer has started.
pub(crate) fn minutes_field<'a>(
    label: &'a str,
    kind: SessionKind,
    value: &'a str,
    valid: bool,
    enabled: bool,
) -> iced::widget::Column<'a, Message> {
    let label_color = if valid { muted() } else { invalid() };

    let mut input = text_input("min", value)
        .width(Length::Fixed(FIELD_W))
        .align_x(Alignment::Center);
    if enabled {
        input = input.on_input(move |s| Message::DurationChanged(kind, s));
    }

    column![text(label).size(SMALL_TEXT).color(label_color), input]
        .spacing(4)
        .align_x(Alignment::Center)
}
