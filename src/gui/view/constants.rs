//! View constants (layout/sizing/colours).

use iced::Color;

use crate::core::types::SessionKind;

pub(crate) const WINDOW_W: f32 = 420.0;
pub(crate) const WINDOW_H: f32 = 640.0;

pub(crate) const CLOCK_TEXT: f32 = 64.0;
pub(crate) const TITLE_TEXT: f32 = 18.0;
pub(crate) const SMALL_TEXT: f32 = 12.0;

pub(crate) const FIELD_W: f32 = 96.0;
pub(crate) const VOLUME_W: f32 = 160.0;

pub(crate) const SECTION_SPACING: f32 = 20.0;
pub(crate) const PADDING: f32 = 24.0;

pub(crate) fn muted() -> Color {
    Color::from_rgb8(0x9c, 0xa3, 0xaf)
}

pub(crate) fn invalid() -> Color {
    Color::from_rgb8(0xdc, 0x26, 0x26)
}

/// (text, badge background, badge border) per session kind.
pub(crate) fn session_palette(kind: SessionKind) -> (Color, Color, Color) {
    match kind {
        SessionKind::Work => (
            Color::from_rgb8(0x17, 0x17, 0x17),
            Color::from_rgb8(0xf5, 0xf5, 0xf5),
            Color::from_rgb8(0x17, 0x17, 0x17),
        ),
        SessionKind::ShortBreak => (
            Color::from_rgb8(0x16, 0xa3, 0x4a),
            Color::from_rgb8(0xdc, 0xfc, 0xe7),
            Color::from_rgb8(0x86, 0xef, 0xac),
        ),
        SessionKind::LongBreak => (
            Color::from_rgb8(0xdb, 0x27, 0x77),
            Color::from_rgb8(0xfc, 0xe7, 0xf3),
            Color::from_rgb8(0xf9, 0xa8, 0xd4),
        ),
    }
}
