//! Thunderstorm: steady blue with a periodic white double flash

use embassy_time::Duration;

use super::Effect;
use crate::color::{Rgbw, rgbw};

const BASE: Rgbw = rgbw(0, 40, 150, 0);
const FLASH: Rgbw = rgbw(255, 255, 255, 60);

/// A flash sequence runs before every this many base frames
const FLASH_INTERVAL: u32 = 50;
const BASE_HOLD: Duration = Duration::from_millis(30);
const FLASH_HOLD: Duration = Duration::from_millis(40);
const DARK_HOLD: Duration = Duration::from_millis(60);

/// Flash, base, flash, base
const FLASH_FRAMES: u8 = 4;

#[derive(Debug, Clone, Default)]
pub struct StormEffect {
    position: u32,
    flash_frame: u8,
}

impl StormEffect {
    pub const fn new() -> Self {
        Self {
            position: 0,
            flash_frame: 0,
        }
    }
}

impl Effect for StormEffect {
    fn render(&mut self, leds: &mut [Rgbw]) -> Option<Duration> {
        let flashing = self.position % FLASH_INTERVAL == 0 && self.flash_frame < FLASH_FRAMES;
        if flashing {
            let lit = self.flash_frame % 2 == 0;
            self.flash_frame += 1;
            if lit {
                leds.fill(FLASH);
                return Some(FLASH_HOLD);
            }
            leds.fill(BASE);
            return Some(DARK_HOLD);
        }

        leds.fill(BASE);
        self.position = self.position.wrapping_add(1);
        self.flash_frame = 0;
        Some(BASE_HOLD)
    }

    fn reset(&mut self) {
        self.position = 0;
        self.flash_frame = 0;
    }
}
