//! Strip configuration
//!
//! Read once when the controller is constructed and immutable afterwards.
//! Every field has a default so an empty TOML document is a valid config.

use std::{fs, path::Path};

use embassy_time::Duration;
use serde::{Deserialize, Serialize};

use crate::{driver::ChannelOrder, effect::Finish, error::ConfigError};

pub const DEFAULT_PIXEL_COUNT: usize = 250;
pub const DEFAULT_BRIGHTNESS: f32 = 0.25;
pub const DEFAULT_DATA_PIN: &str = "/dev/spidev0.0";
pub const DEFAULT_STOP_TIMEOUT_MS: u64 = 1_000;
/// Longest accepted wait for a canceled animation
pub const MAX_STOP_TIMEOUT_MS: u64 = 60_000;
pub const DEFAULT_OFF_REPEATS: u8 = 3;

/// Which output driver the controller should use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DriverKind {
    /// Use the device at `data_pin` when it can be opened, otherwise run headless
    #[default]
    Auto,
    /// Require the device at `data_pin`
    Spi,
    /// Never touch hardware
    Noop,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StripConfig {
    /// Number of pixels on the strip
    pub pixel_count: usize,
    /// Device the data line is driven through
    pub data_pin: String,
    /// Wire order expected by the chipset
    pub channel_order: ChannelOrder,
    /// Default global brightness (0.0-1.0)
    pub brightness: f32,
    pub driver: DriverKind,
    /// What `override_burn` leaves behind once its sequence completes
    pub override_burn: Finish,
    /// Upper bound for waiting on a canceled animation
    pub stop_timeout_ms: u64,
    /// How many times `off()` pushes an all-zero frame
    pub off_repeats: u8,
}

impl Default for StripConfig {
    fn default() -> Self {
        Self {
            pixel_count: DEFAULT_PIXEL_COUNT,
            data_pin: DEFAULT_DATA_PIN.to_string(),
            channel_order: ChannelOrder::default(),
            brightness: DEFAULT_BRIGHTNESS,
            driver: DriverKind::default(),
            override_burn: Finish::default(),
            stop_timeout_ms: DEFAULT_STOP_TIMEOUT_MS,
            off_repeats: DEFAULT_OFF_REPEATS,
        }
    }
}

impl StripConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pixel_count == 0 {
            return Err(ConfigError::Invalid("pixel_count must be at least 1".into()));
        }
        if !(0.0..=1.0).contains(&self.brightness) {
            return Err(ConfigError::Invalid(format!(
                "brightness must be within 0.0..=1.0, got {}",
                self.brightness
            )));
        }
        if self.data_pin.trim().is_empty() {
            return Err(ConfigError::Invalid("data_pin must not be empty".into()));
        }
        if self.stop_timeout_ms > MAX_STOP_TIMEOUT_MS {
            return Err(ConfigError::Invalid(format!(
                "stop_timeout_ms must be at most {MAX_STOP_TIMEOUT_MS}, got {}",
                self.stop_timeout_ms
            )));
        }
        if self.off_repeats == 0 {
            return Err(ConfigError::Invalid("off_repeats must be at least 1".into()));
        }
        Ok(())
    }

    /// Join window for a canceled animation, capped at [`MAX_STOP_TIMEOUT_MS`]
    pub fn stop_timeout(&self) -> Duration {
        Duration::from_millis(self.stop_timeout_ms.min(MAX_STOP_TIMEOUT_MS))
    }

    #[must_use]
    pub fn with_stop_timeout_ms(mut self, stop_timeout_ms: u64) -> Self {
        self.stop_timeout_ms = stop_timeout_ms;
        self
    }

    #[must_use]
    pub fn with_pixel_count(mut self, pixel_count: usize) -> Self {
        self.pixel_count = pixel_count;
        self
    }

    #[must_use]
    pub fn with_brightness(mut self, brightness: f32) -> Self {
        self.brightness = brightness;
        self
    }

    #[must_use]
    pub fn with_driver(mut self, driver: DriverKind) -> Self {
        self.driver = driver;
        self
    }

    #[must_use]
    pub fn with_burn_finish(mut self, finish: Finish) -> Self {
        self.override_burn = finish;
        self
    }
}
