//! core/error.rs
//! Errors at the audio boundary. None of these are fatal: the caller logs
//! them and the timer keeps going without sound.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ToneError {
    /// No usable output device (headless box, device unplugged, ...).
    #[error("audio device not available: {0}")]
    DeviceNotAvailable(String),

    /// The tone engine thread has exited; nothing is listening.
    #[error("tone engine is not running")]
    EngineStopped,
}

impl ToneError {
    /// True when reopening the device later might succeed.
    pub fn is_device_error(&self) -> bool {
        matches!(self, Self::DeviceNotAvailable(_))
    }
}
