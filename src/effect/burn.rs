//! Override burn: one smooth pass through a fixed keyframe sequence

use embassy_time::Duration;

use super::{Effect, Finish, secs};
use crate::color::{Rgbw, blend, rgbw};

/// Red -> purple -> blue
pub const BURN_KEYFRAMES: [Rgbw; 3] = [
    rgbw(255, 0, 0, 0),
    rgbw(128, 0, 180, 0),
    rgbw(0, 0, 255, 0),
];

/// Shortest time spent on one segment, in seconds
const MIN_SEGMENT_SECS: f32 = 0.1;
/// Target time per step (about 50 fps)
const STEP_SECS: f32 = 0.02;

#[derive(Debug, Clone)]
pub struct BurnEffect {
    keyframes: Vec<Rgbw>,
    steps: usize,
    hold: Duration,
    finish: Finish,
    segment: usize,
    step: usize,
}

impl BurnEffect {
    /// Burn through [`BURN_KEYFRAMES`] over `seconds`
    pub fn new(seconds: f32, finish: Finish) -> Self {
        Self::with_keyframes(BURN_KEYFRAMES.to_vec(), seconds, finish)
    }

    /// Burn through custom keyframes, splitting `seconds` evenly across segments
    pub fn with_keyframes(keyframes: Vec<Rgbw>, seconds: f32, finish: Finish) -> Self {
        let segments = keyframes.len().saturating_sub(1).max(1);
        let segment_secs = (seconds / segments as f32).max(MIN_SEGMENT_SECS);
        let steps = ((segment_secs / STEP_SECS) as usize).max(1);
        Self {
            keyframes,
            steps,
            hold: secs(segment_secs / steps as f32),
            finish,
            segment: 0,
            step: 0,
        }
    }

    fn segments(&self) -> usize {
        self.keyframes.len().saturating_sub(1)
    }

    /// Number of frames the whole burn renders
    pub fn frame_count(&self) -> usize {
        self.segments() * (self.steps + 1)
    }
}

impl Effect for BurnEffect {
    fn render(&mut self, leds: &mut [Rgbw]) -> Option<Duration> {
        if self.segment >= self.segments() {
            return None;
        }
        let t = self.step as f32 / self.steps as f32;
        let from = self.keyframes[self.segment];
        let to = self.keyframes[self.segment + 1];
        leds.fill(blend(from, to, t));

        self.step += 1;
        if self.step > self.steps {
            self.step = 0;
            self.segment += 1;
        }
        Some(self.hold)
    }

    fn finish(&self) -> Finish {
        self.finish
    }

    fn reset(&mut self) {
        self.segment = 0;
        self.step = 0;
    }
}
