//! gui/update/durations.rs
//! Duration field edits.

use iced::Task;
use tracing::debug;

use super::super::state::{Message, Tomato};
use super::super::util::parse_minutes;
use crate::core::types::SessionKind;

pub(crate) fn duration_changed(
    state: &mut Tomato,
    kind: SessionKind,
    value: String,
) -> Task<Message> {
    let parsed = parse_minutes(&value);
    state.drafts.set(kind, value);

    // Unparseable drafts stay in the box but leave the setting alone.
    let Some(minutes) = parsed else {
        return Task::none();
    };

    state.settings.set_minutes(kind, minutes);

    if state.session.resync(&state.settings) {
        debug!(%kind, minutes, "idle timer follows new duration");
    } else if state.session.is_running() {
        // Durations feed the next expiry: restart the tick under a new generation.
        let generation = state.driver.arm();
        debug!(%kind, minutes, generation, "duration changed while running");
    }

    Task::none()
}
