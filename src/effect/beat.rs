//! Tempo-driven flash
//!
//! Flashes the color for the first fifth of every beat and stays dark for the
//! rest. Meant to be fed with track tempo and energy from a music source.

use embassy_time::Duration;

use super::{Effect, secs};
use crate::color::{BLACK, Rgbw, scale};

/// Shortest beat, in seconds
const MIN_BEAT_SECS: f32 = 0.2;
/// Share of the beat the flash stays lit
const DUTY: f32 = 0.2;

#[derive(Debug, Clone)]
pub struct BeatEffect {
    color: Rgbw,
    on: Duration,
    off: Duration,
    lit: bool,
}

impl BeatEffect {
    /// `energy` sets the flash amplitude and is clamped to 0.1..=1.0
    pub fn new(color: Rgbw, tempo_bpm: f32, energy: f32) -> Self {
        let beat = (60.0 / tempo_bpm.max(1.0)).max(MIN_BEAT_SECS);
        let amplitude = f64::from(energy).clamp(0.1, 1.0);
        Self {
            color: scale(color, amplitude),
            on: secs(beat * DUTY),
            off: secs(beat * (1.0 - DUTY)),
            lit: false,
        }
    }
}

impl Effect for BeatEffect {
    fn render(&mut self, leds: &mut [Rgbw]) -> Option<Duration> {
        self.lit = !self.lit;
        if self.lit {
            leds.fill(self.color);
            Some(self.on)
        } else {
            leds.fill(BLACK);
            Some(self.off)
        }
    }

    fn reset(&mut self) {
        self.lit = false;
    }
}
