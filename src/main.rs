//! Tomato
//!
//! # What this program is
//! A small desktop Pomodoro timer (built with the `iced` GUI library):
//! work for a while, take a short break, and every fourth break is a long one.
//!
//! # How Iced works (super simple mental model)
//! - `Tomato` = the *entire memory* of the app (settings + session + tick driver)
//! - `Message` = "something happened" (button clicked, key pressed, a second passed)
//! - `update(state, message)` = handles that thing and updates state
//! - `view(state)` = draws UI based on the current state
//! - `subscription(state)` = which background event sources are live right now
//!
//! **Message happens -> update changes state -> view redraws**
//!
//! # Behavior
//! - Durations are editable until the timer is started (then locked until reset
//!   or until the session ends).
//! - When a session runs out the next one is queued (stopped) and a tone plays.
//! - The window title shows status, clock and session, so it can be watched
//!   from the taskbar.
//! - Space = start/pause, R = reset.
//!
//! # Concurrency model
//! - All state lives on the UI thread and only `update()` mutates it.
//! - The one-second tick is an iced subscription that exists only while the
//!   timer runs (see `core::driver`).
//! - Tones are rendered and played on a separate audio thread; the GUI just
//!   sends requests over a channel and never waits.

mod cli;
mod core;
mod gui;

use clap::Parser;
use iced::Size;
use tracing::info;

use crate::cli::Cli;
use crate::core::tone::start_tone_engine;
use crate::gui::Tomato;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let settings = cli.settings();
    info!(?settings, "starting");

    let tones = start_tone_engine();

    iced::application(
        move || Tomato::new(settings, Box::new(tones.clone())),
        gui::update,
        gui::view,
    )
    .title(gui::title)
    .subscription(gui::subscription)
    .window_size(Size::new(gui::WINDOW_W, gui::WINDOW_H))
    .run()?;

    Ok(())
}

/// RUST_LOG wins; otherwise warnings only, or debug with --verbose.
fn init_tracing(verbose: bool) {
    use tracing_subscriber::{EnvFilter, fmt};

    let default = if verbose { "warn,tomato=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();
}
