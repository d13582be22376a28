//! Pixel buffer and the driver it is flushed through.
//!
//! A [`Strip`] is always kept behind the controller's mutex; nothing here
//! locks on its own.

use std::{thread, time::Duration as StdDuration};

use crate::{
    color::{BLACK, Rgbw},
    driver::OutputDriver,
    error::DriverError,
};

/// Pause between the repeated all-zero frames written when blanking
const BLANK_PAUSE: StdDuration = StdDuration::from_millis(20);

/// Logical frame contents plus the flush-time brightness
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    pub pixels: Vec<Rgbw>,
    pub brightness: f32,
}

impl PixelBuffer {
    pub fn new(len: usize, brightness: f32) -> Self {
        Self {
            pixels: vec![BLACK; len],
            brightness,
        }
    }

    pub fn fill(&mut self, color: Rgbw) {
        self.pixels.fill(color);
    }
}

/// The shared strip resource
pub struct Strip {
    buffer: PixelBuffer,
    driver: Box<dyn OutputDriver>,
    default_brightness: f32,
}

impl Strip {
    pub fn new(len: usize, brightness: f32, driver: Box<dyn OutputDriver>) -> Self {
        Self {
            buffer: PixelBuffer::new(len, brightness),
            driver,
            default_brightness: brightness,
        }
    }

    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    pub fn pixels_mut(&mut self) -> &mut [Rgbw] {
        &mut self.buffer.pixels
    }

    pub fn len(&self) -> usize {
        self.buffer.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.pixels.is_empty()
    }

    pub fn is_simulated(&self) -> bool {
        self.driver.is_simulated()
    }

    /// Flush the buffer through the driver
    pub fn show(&mut self) -> Result<(), DriverError> {
        self.driver.write(&self.buffer.pixels, self.buffer.brightness)
    }

    pub fn fill_and_show(&mut self, color: Rgbw) -> Result<(), DriverError> {
        self.buffer.fill(color);
        self.show()
    }

    /// Drive the strip fully dark
    ///
    /// Writes `repeats` all-zero frames at zero brightness so a chip that
    /// missed a latch still clears, then restores the default brightness while
    /// the pixel data stays zero. Every repeat is attempted; the first error is
    /// returned.
    pub fn blank(&mut self, repeats: u8) -> Result<(), DriverError> {
        let mut first_error = None;
        for i in 0..repeats {
            self.buffer.fill(BLACK);
            self.buffer.brightness = 0.0;
            if let Err(err) = self.show() {
                first_error.get_or_insert(err);
            }
            if i + 1 < repeats {
                thread::sleep(BLANK_PAUSE);
            }
        }
        self.buffer.fill(BLACK);
        self.buffer.brightness = self.default_brightness;
        first_error.map_or(Ok(()), Err)
    }
}
