//! Ping-pong dot with a fading tail

use embassy_time::Duration;

use super::{Effect, secs};
use crate::color::{BLACK, Rgbw, scale};

#[derive(Debug, Clone)]
pub struct BounceEffect {
    color: Rgbw,
    tail: usize,
    hold: Duration,
    head: isize,
    direction: isize,
}

impl BounceEffect {
    /// A tail of 0 is treated as 1, the head alone
    pub fn new(color: Rgbw, tail: usize, speed: f32) -> Self {
        Self {
            color,
            tail: tail.max(1),
            hold: secs(speed),
            head: 0,
            direction: 1,
        }
    }
}

impl Effect for BounceEffect {
    #[allow(clippy::cast_possible_wrap)]
    fn render(&mut self, leds: &mut [Rgbw]) -> Option<Duration> {
        let len = leds.len() as isize;
        leds.fill(BLACK);

        for k in 0..self.tail {
            let index = self.head - k as isize * self.direction;
            if (0..len).contains(&index) {
                let fade = (1.0 - k as f64 / self.tail as f64).max(0.0);
                leds[index as usize] = scale(self.color, fade);
            }
        }

        self.head += self.direction;
        if self.head >= len - 1 {
            self.direction = -1;
        }
        if self.head <= 0 {
            self.direction = 1;
        }
        Some(self.hold)
    }

    fn reset(&mut self) {
        self.head = 0;
        self.direction = 1;
    }
}
