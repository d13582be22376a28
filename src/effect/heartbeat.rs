//! Double-beat red flash ("dun-dun")
//!
//! Plays two quick beats and finishes; the worker blanks the strip afterwards.

use embassy_time::Duration;

use super::{Effect, Finish};
use crate::color::{Rgbw, rgbw};

/// Brightness levels of one beat
const LEVELS: [f32; 5] = [0.0, 0.4, 1.0, 0.4, 0.0];
const BEATS: usize = 2;
const STEP: Duration = Duration::from_millis(50);
/// Extra pause after the first beat
const GAP: Duration = Duration::from_millis(120);

#[derive(Debug, Clone, Default)]
pub struct HeartbeatEffect {
    frame: usize,
}

impl HeartbeatEffect {
    pub const fn new() -> Self {
        Self { frame: 0 }
    }

    /// Total time the sequence takes to play
    pub fn duration() -> Duration {
        let frames = (LEVELS.len() * BEATS) as u64;
        Duration::from_micros(STEP.as_micros() * frames + GAP.as_micros() * (BEATS as u64 - 1))
    }
}

impl Effect for HeartbeatEffect {
    fn render(&mut self, leds: &mut [Rgbw]) -> Option<Duration> {
        if self.frame >= LEVELS.len() * BEATS {
            return None;
        }
        let beat = self.frame / LEVELS.len();
        let step = self.frame % LEVELS.len();
        let level = LEVELS[step];
        leds.fill(rgbw((255.0 * level) as u8, 0, 0, 0));
        self.frame += 1;

        let last_of_beat = step == LEVELS.len() - 1;
        if last_of_beat && beat + 1 < BEATS {
            Some(STEP + GAP)
        } else {
            Some(STEP)
        }
    }

    fn finish(&self) -> Finish {
        Finish::Off
    }

    fn reset(&mut self) {
        self.frame = 0;
    }
}
