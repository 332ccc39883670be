//! gui/view/timer.rs
//! Clock, session badges and the start/pause/reset row.

use iced::widget::{Column, Row, button, column, row, text};
use iced::{Alignment, Color, Font, Length};

use super::super::state::{Message, Tomato};
use super::super::util::format_clock;
use super::constants::{CLOCK_TEXT, session_palette};
use super::widgets::badge;

pub(crate) fn build_clock(state: &Tomato) -> Column<'_, Message> {
    let kind = state.session.kind();
    let (fg, bg, edge) = session_palette(kind);

    let clock = text(format_clock(state.session.remaining_secs()))
        .size(CLOCK_TEXT)
        .font(Font::MONOSPACE)
        .color(fg);

    let badges = row![
        badge(kind.label().to_string(), fg, bg, edge),
        badge(
            format!("{}x Work", state.session.completed_work()),
            Color::from_rgb8(0x63, 0x66, 0xf1),
            Color::from_rgb8(0xf5, 0xf5, 0xf5),
            Color::from_rgb8(0xc7, 0xd2, 0xfe),
        ),
    ]
    .spacing(8);

    column![clock, badges]
        .spacing(8)
        .align_x(Alignment::Center)
        .width(Length::Fill)
}

/// Start/Resume while stopped, Pause while running; Reset always.
pub(crate) fn build_controls(state: &Tomato) -> Row<'_, Message> {
    let primary = if state.session.is_running() {
        button(text("Pause").center())
            .on_press(Message::Pause)
            .style(button::secondary)
    } else {
        let label = if state.session.has_started() {
            "Resume"
        } else {
            "Start"
        };
        button(text(label).center())
            .on_press(Message::Start)
            .style(button::primary)
    };

    let reset = button(text("Reset").center())
        .on_press(Message::Reset)
        .style(button::secondary);

    row![primary.width(Length::Fill), reset.width(Length::Fill)]
        .spacing(12)
        .width(Length::Fill)
}
