//! gui/mod.rs
//!
//! This folder contains ONLY frontend concerns:
//! - app state ('Tomato')
//! - messages ('Message')
//! - update logic ('update()')
//! - view layout ('view()')
//! - subscriptions (tick + keyboard shortcuts)
//! - small UI helpers ('util')

pub(crate) mod state;
pub(crate) mod subscription;
pub(crate) mod update;
pub(crate) mod util;
pub(crate) mod view;

// Re-export the entry points main.rs needs.
pub(crate) use state::Tomato;
pub(crate) use subscription::subscription;
pub(crate) use update::update;
pub(crate) use view::{WINDOW_H, WINDOW_W, view};

/// Window title = status glyph, clock and session, refreshed every update.
pub(crate) fn title(state: &Tomato) -> String {
    util::window_title(&state.session)
}
