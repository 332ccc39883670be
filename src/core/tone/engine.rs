//! core/tone/engine.rs
//! Tone engine (rodio owner).
//!
//! Owns:
//! - OutputStream (must stay alive while tones play)
//! - command loop
//!
//! No Iced imports.

use std::sync::mpsc::Receiver;

use rodio::buffer::SamplesBuffer;
use rodio::{OutputStream, OutputStreamBuilder, Sink};
use tracing::{debug, warn};

use super::synth::{self, CHANNELS, SAMPLE_RATE};
use super::{ToneCommand, ToneRequest};
use crate::core::error::ToneError;

#[derive(Default)]
pub struct ToneEngine {
    // Opened on first use; dropped again if the device goes away.
    stream: Option<OutputStream>,
}

impl ToneEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs until every controller is dropped.
    pub fn run(&mut self, command_rx: Receiver<ToneCommand>) {
        while let Ok(cmd) = command_rx.recv() {
            match cmd {
                ToneCommand::Play(request) => {
                    if let Err(e) = self.play(&request) {
                        warn!(error = %e, "no audio, continuing silently");
                        if e.is_device_error() {
                            self.stream = None;
                        }
                    }
                }
            }
        }
        debug!("tone engine stopped");
    }

    fn open_stream(&mut self) -> Result<&OutputStream, ToneError> {
        if self.stream.is_none() {
            let stream = OutputStreamBuilder::open_default_stream()
                .map_err(|e| ToneError::DeviceNotAvailable(e.to_string()))?;
            debug!("audio output opened");
            self.stream = Some(stream);
        }

        self.stream
            .as_ref()
            .ok_or_else(|| ToneError::DeviceNotAvailable("output stream missing".into()))
    }

    fn play(&mut self, request: &ToneRequest) -> Result<(), ToneError> {
        let samples = synth::render(request);
        let stream = self.open_stream()?;

        let sink = Sink::connect_new(stream.mixer());
        sink.append(SamplesBuffer::new(CHANNELS, SAMPLE_RATE, samples));
        // Keep playing after the sink handle goes away.
        sink.detach();

        debug!(finished = %request.finished, "tone started");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    #[test]
    fn starts_without_a_device_and_stops_when_senders_drop() {
        let mut engine = ToneEngine::default();
        assert!(engine.stream.is_none());

        let (tx, rx) = mpsc::channel::<ToneCommand>();
        drop(tx);
        engine.run(rx);
        assert!(engine.stream.is_none());
    }
}
