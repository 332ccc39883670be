//! core/tone/synth.rs
//! Renders completion tones into mono f32 samples.
//!
//! Pure math, no audio device: the engine just hands the buffer to rodio.

use super::ToneRequest;
use crate::core::types::{SessionKind, Waveform};

pub const SAMPLE_RATE: u32 = 44_100;
pub const CHANNELS: u16 = 1;

/// Main tone length.
pub const TONE_SECS: f32 = 0.8;

/// Work completions get two extra pulses on top of the main tone.
pub const PULSE_SECS: f32 = 0.15;
pub const PULSE_OFFSETS_SECS: [f32; 2] = [0.3, 0.6];
pub const PULSE_HZ: f32 = 1318.5;

pub const WORK_DONE_HZ: f32 = 880.0;
pub const BREAK_DONE_HZ: f32 = 523.25;

/// Envelope ends at this fraction of the starting volume.
const DECAY_FLOOR: f32 = 0.01;

pub fn completion_hz(finished: SessionKind) -> f32 {
    match finished {
        SessionKind::Work => WORK_DONE_HZ,
        SessionKind::ShortBreak | SessionKind::LongBreak => BREAK_DONE_HZ,
    }
}

pub fn secs_to_samples(secs: f32) -> usize {
    (secs * SAMPLE_RATE as f32).round() as usize
}

/// One sample of a unit-amplitude oscillator at `phase` (0.0..1.0).
pub fn oscillate(waveform: Waveform, phase: f32) -> f32 {
    match waveform {
        Waveform::Sine => (phase * std::f32::consts::TAU).sin(),
        Waveform::Square => {
            if phase < 0.5 {
                1.0
            } else {
                -1.0
            }
        }
        Waveform::Triangle => 1.0 - 4.0 * (phase - 0.5).abs(),
        Waveform::Sawtooth => 2.0 * phase - 1.0,
    }
}

/// Exponential decay from `volume` down to `volume * DECAY_FLOOR` over `len` samples.
fn envelope(volume: f32, i: usize, len: usize) -> f32 {
    if len == 0 {
        return 0.0;
    }
    let t = i as f32 / len as f32;
    volume * DECAY_FLOOR.powf(t)
}

/// Add one decaying voice into `out`, starting at sample `start`.
fn mix_voice(out: &mut Vec<f32>, start: usize, hz: f32, secs: f32, volume: f32, waveform: Waveform) {
    let len = secs_to_samples(secs);
    if out.len() < start + len {
        out.resize(start + len, 0.0);
    }

    let step = hz / SAMPLE_RATE as f32;
    for i in 0..len {
        let phase = (i as f32 * step).fract();
        out[start + i] += oscillate(waveform, phase) * envelope(volume, i, len);
    }
}

/// Render the whole notification for `request`.
pub fn render(request: &ToneRequest) -> Vec<f32> {
    let volume = request.volume.clamp(0.0, 1.0);
    let mut out = Vec::with_capacity(secs_to_samples(TONE_SECS));

    mix_voice(
        &mut out,
        0,
        completion_hz(request.finished),
        TONE_SECS,
        volume,
        request.waveform,
    );

    if request.finished == SessionKind::Work {
        for offset in PULSE_OFFSETS_SECS {
            mix_voice(
                &mut out,
                secs_to_samples(offset),
                PULSE_HZ,
                PULSE_SECS,
                volume,
                request.waveform,
            );
        }
    }

    for s in &mut out {
        *s = s.clamp(-1.0, 1.0);
    }
    out
}
