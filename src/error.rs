//! Error types shared by the controller, drivers and command interface.

use std::io;

use thiserror::Error;

/// Failure while flushing a frame to the output device
#[derive(Debug, Error)]
pub enum DriverError {
    /// The device file could not be opened
    #[error("cannot open LED device '{path}': {source}")]
    Open {
        path: String,
        #[source]
        source: io::Error,
    },
    /// Writing the encoded frame failed
    #[error("LED write failed: {0}")]
    Write(String),
}

/// Failure while loading or validating [`StripConfig`](crate::config::StripConfig)
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("cannot parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Errors reported by every public controller operation
#[derive(Debug, Error)]
pub enum LightError {
    /// The pixel device cannot be initialized or written
    #[error("LED hardware unavailable: {0}")]
    HardwareUnavailable(String),
    /// A caller-supplied value is out of range or malformed
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
    /// The previous animation did not exit within the join window
    #[error("animation '{mode}' did not stop within {timeout_ms} ms")]
    CancellationTimeout { mode: &'static str, timeout_ms: u64 },
    /// The animation thread could not be started
    #[error("cannot start animation thread: {0}")]
    Spawn(#[source] io::Error),
    #[error(transparent)]
    Driver(#[from] DriverError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl LightError {
    /// Short machine-readable name of the error kind
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::HardwareUnavailable(_) => "hardware_unavailable",
            Self::InvalidParameter(_) => "invalid_parameter",
            Self::CancellationTimeout { .. } => "cancellation_timeout",
            Self::Spawn(_) => "spawn",
            Self::Driver(_) => "driver",
            Self::Config(_) => "config",
        }
    }
}
