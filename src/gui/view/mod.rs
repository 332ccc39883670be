//! GUI renderer (reads state, produces widgets; no mutation).

mod constants;
mod settings;
mod timer;
mod widgets;

use iced::widget::{Column, column, container, text};
use iced::{Alignment, Length};

use super::state::{Message, Tomato};
use crate::core::types::LONG_BREAK_EVERY;
use constants::{PADDING, SECTION_SPACING, SMALL_TEXT, TITLE_TEXT, muted};

pub(crate) use constants::{WINDOW_H, WINDOW_W};

pub(crate) fn view(state: &Tomato) -> iced::widget::Container<'_, Message> {
    let body = column![
        build_header(),
        settings::build_duration_form(state),
        timer::build_clock(state),
        timer::build_controls(state),
        settings::build_sound_panel(state),
        build_footer(state),
    ]
    .spacing(SECTION_SPACING)
    .padding(PADDING)
    .width(Length::Fill);

    container(body).center_x(Length::Fill)
}

fn build_header<'a>() -> Column<'a, Message> {
    column![
        text("Welcome to").size(SMALL_TEXT).color(muted()),
        text("Pomodoro").size(TITLE_TEXT),
    ]
    .spacing(2)
}

/// Schedule reminder + shortcut hints, echoing the live settings.
fn build_footer(state: &Tomato) -> Column<'_, Message> {
    let s = &state.settings;

    column![
        text(format!(
            "Work for {} minutes, then take a {}-minute break.",
            s.work_minutes, s.short_break_minutes
        ))
        .size(SMALL_TEXT)
        .color(muted()),
        text(format!(
            "After {LONG_BREAK_EVERY} work sessions, enjoy a {}-minute long break.",
            s.long_break_minutes
        ))
        .size(SMALL_TEXT)
        .color(muted()),
        text("Shortcuts: Space to start/pause, R to reset")
            .size(SMALL_TEXT)
            .color(muted()),
    ]
    .spacing(6)
    .align_x(Alignment::Center)
    .width(Length::Fill)
}
