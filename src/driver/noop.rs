use super::OutputDriver;
use crate::{color::Rgbw, error::DriverError};

/// Driver for headless hosts: accepts every frame and shows nothing
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopDriver;

impl OutputDriver for NoopDriver {
    fn write(&mut self, _pixels: &[Rgbw], _brightness: f32) -> Result<(), DriverError> {
        Ok(())
    }

    fn is_simulated(&self) -> bool {
        true
    }
}
