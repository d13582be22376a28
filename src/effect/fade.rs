//! Back-and-forth fade between two colors

use embassy_time::Duration;

use super::{Effect, FRAME_60HZ};
use crate::color::{Rgbw, blend};

#[derive(Debug, Clone)]
pub struct FadeEffect {
    from: Rgbw,
    to: Rgbw,
    /// Change of `t` per frame
    step: f32,
    t: f32,
    direction: f32,
}

impl FadeEffect {
    /// `period` is the full round trip, `from` -> `to` -> `from`, in seconds
    pub fn new(from: Rgbw, to: Rgbw, period: f32) -> Self {
        let half = (period / 2.0).max(f32::EPSILON);
        Self {
            from,
            to,
            step: (1.0 / 60.0) / half,
            t: 0.0,
            direction: 1.0,
        }
    }
}

impl Effect for FadeEffect {
    fn render(&mut self, leds: &mut [Rgbw]) -> Option<Duration> {
        leds.fill(blend(self.from, self.to, self.t));

        self.t += self.direction * self.step;
        if self.t >= 1.0 {
            self.t = 1.0;
            self.direction = -1.0;
        } else if self.t <= 0.0 {
            self.t = 0.0;
            self.direction = 1.0;
        }
        Some(FRAME_60HZ)
    }

    fn reset(&mut self) {
        self.t = 0.0;
        self.direction = 1.0;
    }
}
