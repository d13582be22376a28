pub mod color;
pub mod command;
pub mod config;
pub mod controller;
pub mod driver;
pub mod effect;
pub mod error;
pub mod strip;
pub mod task;
pub mod weather;

pub use color::{Rgbw, blend, rgbw, wheel};
pub use command::{Command, CommandResponse, execute, handle_json};
pub use config::{DriverKind, StripConfig};
pub use controller::{ControllerStatus, Mode, StripController};
pub use driver::{ChannelOrder, OutputDriver};
pub use effect::{EffectId, EffectSlot, Finish};
pub use error::{ConfigError, DriverError, LightError};
pub use weather::WeatherCue;

pub use embassy_time::{Duration, Instant};
