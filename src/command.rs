//! Command interface
//!
//! Converts JSON parameter records from the web layer into controller calls
//! and reports a structured status for every one of them. Nothing here panics
//! or propagates: every failure becomes a [`CommandResponse::Error`].

use log::warn;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

use crate::{
    color::{Rgbw, channels, parse_hex, rgbw},
    controller::StripController,
    error::LightError,
};

const COMMAND_NAMES: [&str; 11] = [
    "off",
    "set_color",
    "pulse",
    "bounce",
    "wave",
    "rainbow",
    "fade_between",
    "heart_pulse",
    "override_burn",
    "weather",
    "beat",
];

const DEFAULT_PULSE_SECS: f32 = 2.0;

/// A color parameter: `[r, g, b]`, `[r, g, b, w]` or a hex string
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ColorParam {
    Channels(Vec<i64>),
    Hex(String),
}

impl ColorParam {
    fn rgbw(r: u8, g: u8, b: u8, w: u8) -> Self {
        Self::Channels(vec![r.into(), g.into(), b.into(), w.into()])
    }

    /// Validate and convert to a color
    pub fn resolve(&self) -> Result<Rgbw, LightError> {
        match self {
            Self::Hex(text) => parse_hex(text),
            Self::Channels(values) => match values.as_slice() {
                [r, g, b] => Ok(rgbw(
                    channel("r", *r)?,
                    channel("g", *g)?,
                    channel("b", *b)?,
                    0,
                )),
                [r, g, b, w] => Ok(rgbw(
                    channel("r", *r)?,
                    channel("g", *g)?,
                    channel("b", *b)?,
                    channel("w", *w)?,
                )),
                _ => Err(LightError::InvalidParameter(format!(
                    "color needs 3 or 4 channels, got {}",
                    values.len()
                ))),
            },
        }
    }
}

fn default_bounce_color() -> ColorParam {
    ColorParam::rgbw(255, 0, 0, 0)
}

fn default_wave_base() -> ColorParam {
    ColorParam::rgbw(0, 0, 255, 0)
}

fn default_beat_color() -> ColorParam {
    ColorParam::rgbw(0, 255, 180, 0)
}

const fn default_tail() -> usize {
    5
}

const fn default_bounce_speed() -> f32 {
    0.01
}

const fn default_wavelength() -> i64 {
    16
}

const fn default_wave_speed() -> f32 {
    0.02
}

const fn default_rainbow_speed() -> f32 {
    0.01
}

const fn default_rainbow_step() -> u32 {
    2
}

const fn default_fade_secs() -> f32 {
    3.0
}

const fn default_burn_secs() -> f32 {
    10.0
}

const fn default_tempo() -> f32 {
    100.0
}

const fn default_energy() -> f32 {
    0.5
}

/// One request for the strip, tagged by `"mode"`
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum Command {
    Off,
    SetColor {
        r: i64,
        g: i64,
        b: i64,
        #[serde(default)]
        w: i64,
    },
    /// Either `ms` or `seconds`; `ms` wins when both are given
    Pulse {
        color: ColorParam,
        #[serde(default)]
        ms: Option<u64>,
        #[serde(default)]
        seconds: Option<f32>,
    },
    Bounce {
        #[serde(default = "default_bounce_color")]
        color: ColorParam,
        #[serde(default = "default_tail")]
        tail: usize,
        #[serde(default = "default_bounce_speed")]
        speed: f32,
    },
    Wave {
        #[serde(default = "default_wave_base")]
        base: ColorParam,
        #[serde(default = "default_wavelength")]
        wavelength: i64,
        #[serde(default = "default_wave_speed")]
        speed: f32,
    },
    Rainbow {
        #[serde(default = "default_rainbow_speed")]
        speed: f32,
        #[serde(default = "default_rainbow_step")]
        step: u32,
    },
    FadeBetween {
        c1: ColorParam,
        c2: ColorParam,
        #[serde(default = "default_fade_secs")]
        seconds: f32,
    },
    HeartPulse,
    OverrideBurn {
        #[serde(default = "default_burn_secs")]
        seconds: f32,
    },
    Weather {
        condition: String,
    },
    Beat {
        #[serde(default = "default_tempo")]
        tempo_bpm: f32,
        #[serde(default = "default_energy")]
        energy: f32,
        #[serde(default = "default_beat_color")]
        color: ColorParam,
    },
}

impl Command {
    /// Parse a JSON command
    pub fn from_json(text: &str) -> Result<Self, LightError> {
        let value: Value = serde_json::from_str(text)
            .map_err(|err| LightError::InvalidParameter(format!("malformed command: {err}")))?;
        Self::from_value(value)
    }

    /// Parse an already decoded JSON value
    ///
    /// Unknown mode names are reported by name instead of as a serde error.
    pub fn from_value(value: Value) -> Result<Self, LightError> {
        let Some(mode) = value.get("mode").and_then(Value::as_str).map(str::to_owned) else {
            return Err(LightError::InvalidParameter(
                "command needs a string 'mode'".into(),
            ));
        };
        if !COMMAND_NAMES.contains(&mode.as_str()) {
            return Err(LightError::InvalidParameter(format!("unknown mode '{mode}'")));
        }
        serde_json::from_value(value).map_err(|err| {
            LightError::InvalidParameter(format!("bad parameters for '{mode}': {err}"))
        })
    }

    pub const fn name(&self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::SetColor { .. } => "set_color",
            Self::Pulse { .. } => "pulse",
            Self::Bounce { .. } => "bounce",
            Self::Wave { .. } => "wave",
            Self::Rainbow { .. } => "rainbow",
            Self::FadeBetween { .. } => "fade_between",
            Self::HeartPulse => "heart_pulse",
            Self::OverrideBurn { .. } => "override_burn",
            Self::Weather { .. } => "weather",
            Self::Beat { .. } => "beat",
        }
    }
}

/// Structured result of one command
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CommandResponse {
    /// Applied; the accepted parameters are echoed back
    Ok {
        mode: &'static str,
        #[serde(flatten)]
        echo: Map<String, Value>,
    },
    Error {
        kind: &'static str,
        message: String,
    },
}

impl CommandResponse {
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok { .. })
    }

    /// Echoed parameter by name
    pub fn echoed(&self, key: &str) -> Option<&Value> {
        match self {
            Self::Ok { echo, .. } => echo.get(key),
            Self::Error { .. } => None,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl From<LightError> for CommandResponse {
    fn from(err: LightError) -> Self {
        Self::Error {
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}

/// Parse and run one JSON command
pub fn handle_json(controller: &StripController, text: &str) -> CommandResponse {
    match Command::from_json(text) {
        Ok(command) => execute(controller, &command),
        Err(err) => {
            warn!("rejected command: {err}");
            err.into()
        }
    }
}

/// Run a parsed command against the controller
pub fn execute(controller: &StripController, command: &Command) -> CommandResponse {
    match run(controller, command) {
        Ok(echo) => CommandResponse::Ok {
            mode: command.name(),
            echo,
        },
        Err(err) => {
            warn!("{} failed: {err}", command.name());
            err.into()
        }
    }
}

fn run(controller: &StripController, command: &Command) -> Result<Map<String, Value>, LightError> {
    let echo = match command {
        Command::Off => {
            controller.off()?;
            json!({})
        }
        Command::SetColor { r, g, b, w } => {
            let color = rgbw(
                channel("r", *r)?,
                channel("g", *g)?,
                channel("b", *b)?,
                channel("w", *w)?,
            );
            controller.set_color(color)?;
            json!({ "color": channels(color) })
        }
        Command::Pulse { color, ms, seconds } => {
            let color = color.resolve()?;
            let seconds = match (ms, seconds) {
                (Some(ms), _) => *ms as f32 / 1000.0,
                (None, Some(seconds)) => *seconds,
                (None, None) => DEFAULT_PULSE_SECS,
            };
            controller.pulse(color, seconds)?;
            json!({ "color": channels(color), "seconds": seconds })
        }
        Command::Bounce { color, tail, speed } => {
            let color = color.resolve()?;
            controller.bounce(color, *tail, *speed)?;
            json!({ "color": channels(color), "tail": tail, "speed": speed })
        }
        Command::Wave {
            base,
            wavelength,
            speed,
        } => {
            let base = base.resolve()?;
            let wavelength = u32::try_from(*wavelength)
                .ok()
                .filter(|&wavelength| wavelength >= 1)
                .ok_or_else(|| {
                    LightError::InvalidParameter(format!(
                        "wavelength must be at least 1, got {wavelength}"
                    ))
                })?;
            controller.wave(base, wavelength, *speed)?;
            json!({ "base": channels(base), "wavelength": wavelength, "speed": speed })
        }
        Command::Rainbow { speed, step } => {
            controller.rainbow(*speed, *step)?;
            json!({ "speed": speed, "step": step })
        }
        Command::FadeBetween { c1, c2, seconds } => {
            let (c1, c2) = (c1.resolve()?, c2.resolve()?);
            controller.fade_between(c1, c2, *seconds)?;
            json!({ "c1": channels(c1), "c2": channels(c2), "seconds": seconds })
        }
        Command::HeartPulse => {
            controller.heart_pulse()?;
            json!({})
        }
        Command::OverrideBurn { seconds } => {
            controller.override_burn(*seconds)?;
            json!({ "seconds": seconds })
        }
        Command::Weather { condition } => {
            let cue = controller.weather(condition)?;
            json!({ "condition": condition, "cue": cue.as_str() })
        }
        Command::Beat {
            tempo_bpm,
            energy,
            color,
        } => {
            let color = color.resolve()?;
            controller.beat(color, *tempo_bpm, *energy)?;
            json!({ "color": channels(color), "tempo_bpm": tempo_bpm, "energy": energy })
        }
    };

    Ok(match echo {
        Value::Object(map) => map,
        _ => Map::new(),
    })
}

fn channel(name: &str, value: i64) -> Result<u8, LightError> {
    u8::try_from(value).map_err(|_| {
        LightError::InvalidParameter(format!("{name} must be within 0..=255, got {value}"))
    })
}
