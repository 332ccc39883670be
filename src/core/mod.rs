//! core/mod.rs
//!
//! Everything that is not drawing widgets:
//! - settings and session types
//! - the session state machine (pure)
//! - the tick driver (who is allowed to tick)
//! - completion tones (synth + audio thread)
//!
//! No Iced imports here, so all of it can be tested without a window.

pub mod driver;
pub mod error;
pub mod session;
pub mod tone;
pub mod types;
