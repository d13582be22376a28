//! Breathing pulse
//!
//! Ramps the color from dark to full and back in 61 + 61 discrete levels.

use embassy_time::Duration;

use super::{Effect, secs};
use crate::color::{Rgbw, scale};

/// Highest ramp level; levels run 0..=STEPS in each direction
const STEPS: usize = 60;

/// Frames in one up-down cycle
const CYCLE: usize = 2 * (STEPS + 1);

#[derive(Debug, Clone)]
pub struct PulseEffect {
    color: Rgbw,
    hold: Duration,
    frame: usize,
}

impl PulseEffect {
    /// One full breath takes about `seconds`
    pub fn new(color: Rgbw, seconds: f32) -> Self {
        Self {
            color,
            hold: secs(seconds / 120.0),
            frame: 0,
        }
    }

    /// Current ramp level in 0.0..=1.0
    fn level(&self) -> f64 {
        let step = if self.frame <= STEPS {
            self.frame
        } else {
            CYCLE - 1 - self.frame
        };
        step as f64 / STEPS as f64
    }
}

impl Effect for PulseEffect {
    fn render(&mut self, leds: &mut [Rgbw]) -> Option<Duration> {
        leds.fill(scale(self.color, self.level()));
        self.frame = (self.frame + 1) % CYCLE;
        Some(self.hold)
    }

    fn reset(&mut self) {
        self.frame = 0;
    }
}
