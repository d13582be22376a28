//! Moving rainbow
//!
//! Spreads one full turn of the color wheel over the strip and rotates it by
//! `step` wheel positions per frame.

use embassy_time::Duration;

use super::{Effect, secs};
use crate::color::{Rgbw, wheel};

#[derive(Debug, Clone)]
pub struct RainbowEffect {
    hold: Duration,
    step: u8,
    position: u8,
}

impl RainbowEffect {
    /// `step` is taken modulo 256
    pub fn new(speed: f32, step: u32) -> Self {
        Self {
            hold: secs(speed),
            step: (step % 256) as u8,
            position: 0,
        }
    }
}

impl Effect for RainbowEffect {
    #[allow(clippy::cast_possible_wrap)]
    fn render(&mut self, leds: &mut [Rgbw]) -> Option<Duration> {
        let len = leds.len();
        for (i, led) in leds.iter_mut().enumerate() {
            let offset = (i * 256 / len) as i32;
            *led = wheel(offset + i32::from(self.position));
        }
        self.position = self.position.wrapping_add(self.step);
        Some(self.hold)
    }

    fn reset(&mut self) {
        self.position = 0;
    }
}
