//! core/tone/mod.rs
//! Completion tones.
//!
//! - `synth` renders samples (pure)
//! - `engine` owns the rodio output stream on its own thread
//! - `ToneController` is the cheap handle the GUI keeps
//!
//! Playback is fire-and-forget: nothing waits for a tone to finish and
//! nothing fails if there is no audio device.

use std::sync::mpsc::{self, Sender};
use std::thread;

use tracing::{debug, warn};

use super::error::ToneError;
use super::types::{SessionKind, Waveform};

mod engine;
pub mod synth;

pub use engine::ToneEngine;

/// Everything needed to render one notification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneRequest {
    pub finished: SessionKind,
    pub waveform: Waveform,
    pub volume: f32,
}

#[derive(Debug)]
pub enum ToneCommand {
    Play(ToneRequest),
}

/// Where the GUI sends tone requests. Implementations must never panic
/// or block on audio problems.
pub trait ToneSink: Send {
    fn play(&self, request: ToneRequest);
}

#[derive(Clone)]
pub struct ToneController {
    command_tx: Sender<ToneCommand>,
}

impl ToneController {
    pub fn send(&self, cmd: ToneCommand) -> Result<(), ToneError> {
        self.command_tx
            .send(cmd)
            .map_err(|_| ToneError::EngineStopped)
    }
}

impl ToneSink for ToneController {
    fn play(&self, request: ToneRequest) {
        debug!(?request, "queueing tone");
        if let Err(e) = self.send(ToneCommand::Play(request)) {
            warn!(error = %e, "tone dropped");
        }
    }
}

/// Spawns the tone thread. The device is opened lazily on the first tone,
/// so this never fails even on a machine without audio.
pub fn start_tone_engine() -> ToneController {
    let (command_tx, command_rx) = mpsc::channel::<ToneCommand>();

    thread::spawn(move || {
        let mut engine = ToneEngine::new();
        engine.run(command_rx);
    });

    ToneController { command_tx }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn send_to_dead_engine_is_an_error_not_a_panic() {
        let (command_tx, command_rx) = mpsc::channel::<ToneCommand>();
        drop(command_rx);
        let controller = ToneController { command_tx };

        let request = ToneRequest {
            finished: SessionKind::Work,
            waveform: Waveform::Sine,
            volume: 0.5,
        };
        let err = controller.send(ToneCommand::Play(request)).unwrap_err();
        assert!(matches!(err, ToneError::EngineStopped));

        // the sink impl swallows it
        controller.play(request);
    }

    #[test]
    fn controller_forwards_requests() {
        let (command_tx, command_rx) = mpsc::channel::<ToneCommand>();
        let controller = ToneController { command_tx };

        let request = ToneRequest {
            finished: SessionKind::LongBreak,
            waveform: Waveform::Triangle,
            volume: 0.8,
        };
        controller.play(request);

        let ToneCommand::Play(got) = command_rx.recv().unwrap();
        assert_eq!(got, request);
    }
}
