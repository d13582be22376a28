//! Output drivers
//!
//! The controller talks to the strip only through [`OutputDriver`]. The
//! variant is picked once, in [`detect`], never re-checked per frame.

mod memory;
mod noop;
mod order;
mod spi;

use log::{info, warn};
pub use memory::{FrameLog, RecordedFrame, RecordingDriver};
pub use noop::NoopDriver;
pub use order::ChannelOrder;
pub use spi::{SPI_SPEED_HZ, SmartLedsDriver, WireColor, open_spi};

use crate::{
    color::Rgbw,
    config::{DriverKind, StripConfig},
    error::{DriverError, LightError},
};

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// The strip controller is generic over this trait.
pub trait OutputDriver: Send {
    /// Write colors to the LED strip, scaled by the global `brightness`
    fn write(&mut self, pixels: &[Rgbw], brightness: f32) -> Result<(), DriverError>;

    /// Returns true when frames never reach physical LEDs
    fn is_simulated(&self) -> bool {
        false
    }
}

/// Pick the output driver for a configuration
///
/// With [`DriverKind::Auto`] an unavailable device degrades to [`NoopDriver`]
/// so the controller still constructs on headless hosts.
pub fn detect(config: &StripConfig) -> Result<Box<dyn OutputDriver>, LightError> {
    match config.driver {
        DriverKind::Noop => {
            info!("LED output disabled by config, running headless");
            Ok(Box::new(NoopDriver))
        }
        DriverKind::Spi => {
            let driver =
                open_spi(config).map_err(|err| LightError::HardwareUnavailable(err.to_string()))?;
            info!("LED output on {}", config.data_pin);
            Ok(driver)
        }
        DriverKind::Auto => match open_spi(config) {
            Ok(driver) => {
                info!("LED output on {}", config.data_pin);
                Ok(driver)
            }
            Err(err) => {
                warn!("{err}; running headless");
                Ok(Box::new(NoopDriver))
            }
        },
    }
}
