//! Weather condition to light cue mapping.

use crate::color::{Rgbw, rgbw};

pub const SUNNY_COLOR: Rgbw = rgbw(255, 170, 0, 0);
pub const CLOUDY_COLOR: Rgbw = rgbw(120, 120, 120, 30);
pub const CLOUDY_PULSE_SECS: f32 = 3.5;
pub const RAIN_COLOR: Rgbw = rgbw(0, 80, 200, 0);
pub const RAIN_WAVELENGTH: u32 = 18;
pub const RAIN_SPEED: f32 = 0.02;
pub const SNOW_FROM: Rgbw = rgbw(180, 220, 255, 40);
pub const SNOW_TO: Rgbw = rgbw(80, 120, 200, 10);
pub const SNOW_PERIOD_SECS: f32 = 4.0;
pub const DEFAULT_COLOR: Rgbw = rgbw(120, 120, 120, 10);

/// Cue a weather condition maps to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeatherCue {
    /// Solid warm color
    Sunny,
    /// Slow gray pulse
    Cloudy,
    /// Blue wave
    Rain,
    /// Slow pale-blue fade
    Snow,
    /// Blue base with white flashes
    Storm,
    /// Solid soft white
    Default,
}

/// Keywords checked in order, first match wins
const KEYWORDS: [(&str, WeatherCue); 9] = [
    ("sun", WeatherCue::Sunny),
    ("clear", WeatherCue::Sunny),
    ("cloud", WeatherCue::Cloudy),
    ("overcast", WeatherCue::Cloudy),
    ("rain", WeatherCue::Rain),
    ("drizzle", WeatherCue::Rain),
    ("snow", WeatherCue::Snow),
    ("storm", WeatherCue::Storm),
    ("thunder", WeatherCue::Storm),
];

impl WeatherCue {
    /// Classify free-text condition by case-insensitive substring match
    ///
    /// Text matching no keyword maps to [`WeatherCue::Default`].
    pub fn classify(condition: &str) -> Self {
        let condition = condition.to_lowercase();
        KEYWORDS
            .iter()
            .find(|(keyword, _)| condition.contains(keyword))
            .map_or(Self::Default, |&(_, cue)| cue)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sunny => "sunny",
            Self::Cloudy => "cloudy",
            Self::Rain => "rain",
            Self::Snow => "snow",
            Self::Storm => "storm",
            Self::Default => "default",
        }
    }
}
