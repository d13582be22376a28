//! Sine intensity wave travelling along the strip

use core::f64::consts::TAU;

use embassy_time::Duration;

use super::{Effect, secs};
use crate::color::{Rgbw, scale};

#[derive(Debug, Clone)]
pub struct WaveEffect {
    base: Rgbw,
    wavelength: u32,
    hold: Duration,
    phase: u32,
}

impl WaveEffect {
    /// `wavelength` is in pixels; 0 is treated as 1
    pub fn new(base: Rgbw, wavelength: u32, speed: f32) -> Self {
        Self {
            base,
            wavelength: wavelength.max(1),
            hold: secs(speed),
            phase: 0,
        }
    }
}

impl Effect for WaveEffect {
    fn render(&mut self, leds: &mut [Rgbw]) -> Option<Duration> {
        let wavelength = f64::from(self.wavelength);
        for (i, led) in leds.iter_mut().enumerate() {
            let x = (i as f64 + f64::from(self.phase)) * TAU / wavelength;
            let intensity = (libm::sin(x) + 1.0) / 2.0;
            *led = scale(self.base, intensity);
        }
        // The sine repeats every wavelength, keep the phase small
        self.phase = (self.phase + 1) % self.wavelength;
        Some(self.hold)
    }

    fn reset(&mut self) {
        self.phase = 0;
    }
}
