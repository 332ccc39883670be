//! Small pure helper functions used by the GUI.
//! - no UI widgets or state mutation

use crate::core::session::Session;
use crate::core::types::Phase;

/// Seconds -> "mm:ss". Minutes are not wrapped into hours.
/// Ex: 65 -> "01:05"
pub(crate) fn format_clock(secs: u32) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

/// Parse a duration field.
/// - whole non-negative minutes -> Some(minutes), no range clamping
/// - empty, fractional, or garbage -> None
pub(crate) fn parse_minutes(s: &str) -> Option<u32> {
    s.trim().parse::<u32>().ok()
}

pub(crate) fn status_glyph(phase: Phase) -> &'static str {
    match phase {
        Phase::Running => "▶️",
        Phase::Paused => "⏸️",
        Phase::Idle => "⏹️",
    }
}

/// Window title, so the timer can be watched from the taskbar.
/// Ex: "▶️ 24:59 - Work | Pomodoro"
pub(crate) fn window_title(session: &Session) -> String {
    format!(
        "{} {} - {} | Pomodoro",
        status_glyph(session.phase()),
        format_clock(session.remaining_secs()),
        session.kind()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Settings;

    #[test]
    fn clock_is_zero_padded() {
        assert_eq!(format_clock(65), "01:05");
        assert_eq!(format_clock(3599), "59:59");
        assert_eq!(format_clock(0), "00:00");
        assert_eq!(format_clock(1500), "25:00");
    }

    #[test]
    fn clock_does_not_roll_into_hours() {
        assert_eq!(format_clock(3600), "60:00");
    }

    #[test]
    fn minutes_parse() {
        assert_eq!(parse_minutes("25"), Some(25));
        assert_eq!(parse_minutes(" 7 "), Some(7));
        assert_eq!(parse_minutes("0"), Some(0));
        assert_eq!(parse_minutes("90"), Some(90));
    }

    #[test]
    fn minutes_reject_non_integers() {
        assert_eq!(parse_minutes(""), None);
        assert_eq!(parse_minutes("2.5"), None);
        assert_eq!(parse_minutes("-3"), None);
        assert_eq!(parse_minutes("ten"), None);
    }

    #[test]
    fn title_tracks_phase() {
        let cfg = Settings::default();
        let mut s = Session::new(&cfg);
        assert_eq!(window_title(&s), "⏹️ 25:00 - Work | Pomodoro");

        s.start();
        s.tick(&cfg);
        assert_eq!(window_title(&s), "▶️ 24:59 - Work | Pomodoro");

        s.pause();
        assert_eq!(window_title(&s), "⏸️ 24:59 - Work | Pomodoro");
    }
}
