//! Command-line flags.
//!
//! Only initial values: everything can still be changed in the window,
//! and nothing is written back.

use clap::{Parser, ValueEnum};

use crate::core::types::{
    DEFAULT_LONG_BREAK_MINUTES, DEFAULT_SHORT_BREAK_MINUTES, DEFAULT_VOLUME, DEFAULT_WORK_MINUTES,
    MAX_VOLUME, MIN_VOLUME, Settings, Waveform,
};

#[derive(Parser, Debug)]
#[command(name = "tomato", version, about = "A small desktop Pomodoro timer")]
pub struct Cli {
    /// Work duration in minutes (1-60)
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_WORK_MINUTES,
        value_parser = clap::value_parser!(u32).range(1..=60)
    )]
    pub work: u32,

    /// Short break duration in minutes (1-30)
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_SHORT_BREAK_MINUTES,
        value_parser = clap::value_parser!(u32).range(1..=30)
    )]
    pub short_break: u32,

    /// Long break duration in minutes (1-60)
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_LONG_BREAK_MINUTES,
        value_parser = clap::value_parser!(u32).range(1..=60)
    )]
    pub long_break: u32,

    /// Start with the completion tone turned off
    #[arg(long)]
    pub mute: bool,

    /// Tone volume (0.1-1.0)
    #[arg(long, default_value_t = DEFAULT_VOLUME, value_parser = parse_volume)]
    pub volume: f32,

    /// Tone waveform
    #[arg(long, value_enum, default_value_t = WaveformArg::Sine)]
    pub waveform: WaveformArg,

    /// Enable debug logging (RUST_LOG still wins)
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaveformArg {
    Sine,
    Square,
    Triangle,
    Sawtooth,
}

impl From<WaveformArg> for Waveform {
    fn from(arg: WaveformArg) -> Self {
        match arg {
            WaveformArg::Sine => Waveform::Sine,
            WaveformArg::Square => Waveform::Square,
            WaveformArg::Triangle => Waveform::Triangle,
            WaveformArg::Sawtooth => Waveform::Sawtooth,
        }
    }
}

impl Cli {
    pub fn settings(&self) -> Settings {
        Settings {
            work_minutes: self.work,
            short_break_minutes: self.short_break,
            long_break_minutes: self.long_break,
            sound_enabled: !self.mute,
            volume: self.volume,
            waveform: self.waveform.into(),
        }
    }
}

fn parse_volume(s: &str) -> Result<f32, String> {
    let volume: f32 = s
        .trim()
        .parse()
        .map_err(|_| format!("'{s}' is not a number"))?;

    if !(MIN_VOLUME..=MAX_VOLUME).contains(&volume) {
        return Err(format!("volume must be between {MIN_VOLUME} and {MAX_VOLUME}"));
    }
    Ok(volume)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_args_gives_default_settings() {
        let cli = Cli::parse_from(["tomato"]);
        assert_eq!(cli.settings(), Settings::default());
        assert!(!cli.verbose);
    }

    #[test]
    fn durations_and_sound_flags() {
        let cli = Cli::parse_from([
            "tomato",
            "--work",
            "50",
            "-s",
            "10",
            "--long-break",
            "30",
            "--mute",
            "--volume",
            "0.8",
            "--waveform",
            "triangle",
            "-v",
        ]);
        let s = cli.settings();
        assert_eq!(s.work_minutes, 50);
        assert_eq!(s.short_break_minutes, 10);
        assert_eq!(s.long_break_minutes, 30);
        assert!(!s.sound_enabled);
        assert!((s.volume - 0.8).abs() < 1e-6);
        assert_eq!(s.waveform, Waveform::Triangle);
        assert!(cli.verbose);
    }

    #[test]
    fn out_of_range_durations_rejected() {
        assert!(Cli::try_parse_from(["tomato", "--work", "0"]).is_err());
        assert!(Cli::try_parse_from(["tomato", "--work", "61"]).is_err());
        assert!(Cli::try_parse_from(["tomato", "--short-break", "31"]).is_err());
    }

    #[test]
    fn volume_bounds() {
        assert!(Cli::try_parse_from(["tomato", "--volume", "1.5"]).is_err());
        assert!(Cli::try_parse_from(["tomato", "--volume", "0"]).is_err());
        assert!(Cli::try_parse_from(["tomato", "--volume", "loud"]).is_err());
        assert!(Cli::try_parse_from(["tomato", "--volume", "0.1"]).is_ok());
    }
}
