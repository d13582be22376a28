//! Effect system with compile-time known effect variants
//!
//! Every animation mode is a small state machine implementing [`Effect`]. An
//! effect renders one frame at a time and tells the worker how long to hold
//! it; it never locks, sleeps or touches the driver. All effects are stored in
//! [`EffectSlot`] so the worker dispatches without boxing.

mod beat;
mod bounce;
mod burn;
mod fade;
mod heartbeat;
mod pulse;
mod rainbow;
mod storm;
mod wave;

pub use beat::BeatEffect;
pub use bounce::BounceEffect;
pub use burn::{BURN_KEYFRAMES, BurnEffect};
use embassy_time::Duration;
pub use fade::FadeEffect;
pub use heartbeat::HeartbeatEffect;
pub use pulse::PulseEffect;
pub use rainbow::RainbowEffect;
use serde::{Deserialize, Serialize};
pub use storm::StormEffect;
pub use wave::WaveEffect;

use crate::color::Rgbw;

const EFFECT_NAME_PULSE: &str = "pulse";
const EFFECT_NAME_BOUNCE: &str = "bounce";
const EFFECT_NAME_WAVE: &str = "wave";
const EFFECT_NAME_RAINBOW: &str = "rainbow";
const EFFECT_NAME_FADE: &str = "fade_between";
const EFFECT_NAME_HEARTBEAT: &str = "heart_pulse";
const EFFECT_NAME_BURN: &str = "override_burn";
const EFFECT_NAME_STORM: &str = "storm";
const EFFECT_NAME_BEAT: &str = "beat";

/// Hold time of one frame at 60 fps
pub(crate) const FRAME_60HZ: Duration = Duration::from_micros(16_667);

/// Convert seconds to a frame hold time, rounded to the microsecond
///
/// Negative and non-finite values become zero.
pub(crate) fn secs(seconds: f32) -> Duration {
    if !seconds.is_finite() || seconds <= 0.0 {
        return Duration::from_micros(0);
    }
    Duration::from_micros((f64::from(seconds) * 1_000_000.0).round() as u64)
}

/// What the strip shows after a one-shot effect has played out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Finish {
    /// Leave the last frame lit
    #[default]
    Hold,
    /// Blank the strip like `off()`
    Off,
}

pub trait Effect {
    /// Render the next frame and return how long it should stay up
    ///
    /// Returns `None` once a one-shot sequence is complete; `leds` is left
    /// untouched in that case. Continuous effects never return `None`.
    fn render(&mut self, leds: &mut [Rgbw]) -> Option<Duration>;

    /// What happens to the strip after `render` returned `None`
    fn finish(&self) -> Finish {
        Finish::Hold
    }

    /// Reset effect state
    fn reset(&mut self) {}
}

/// Effect slot - enum containing all possible effects
#[derive(Debug, Clone)]
pub enum EffectSlot {
    Pulse(PulseEffect),
    Bounce(BounceEffect),
    Wave(WaveEffect),
    Rainbow(RainbowEffect),
    Fade(FadeEffect),
    /// One-shot double beat
    Heartbeat(HeartbeatEffect),
    /// One-shot keyframe burn
    Burn(BurnEffect),
    Storm(StormEffect),
    Beat(BeatEffect),
}

/// Known effect ids, used for mode reporting
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EffectId {
    Pulse,
    Bounce,
    Wave,
    Rainbow,
    Fade,
    Heartbeat,
    Burn,
    Storm,
    Beat,
}

impl EffectId {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pulse => EFFECT_NAME_PULSE,
            Self::Bounce => EFFECT_NAME_BOUNCE,
            Self::Wave => EFFECT_NAME_WAVE,
            Self::Rainbow => EFFECT_NAME_RAINBOW,
            Self::Fade => EFFECT_NAME_FADE,
            Self::Heartbeat => EFFECT_NAME_HEARTBEAT,
            Self::Burn => EFFECT_NAME_BURN,
            Self::Storm => EFFECT_NAME_STORM,
            Self::Beat => EFFECT_NAME_BEAT,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            EFFECT_NAME_PULSE => Some(Self::Pulse),
            EFFECT_NAME_BOUNCE => Some(Self::Bounce),
            EFFECT_NAME_WAVE => Some(Self::Wave),
            EFFECT_NAME_RAINBOW => Some(Self::Rainbow),
            EFFECT_NAME_FADE => Some(Self::Fade),
            EFFECT_NAME_HEARTBEAT => Some(Self::Heartbeat),
            EFFECT_NAME_BURN => Some(Self::Burn),
            EFFECT_NAME_STORM => Some(Self::Storm),
            EFFECT_NAME_BEAT => Some(Self::Beat),
            _ => None,
        }
    }

    /// One-shot effects end on their own
    pub const fn is_one_shot(self) -> bool {
        matches!(self, Self::Heartbeat | Self::Burn)
    }
}

impl EffectSlot {
    /// Render the current effect
    pub fn render(&mut self, leds: &mut [Rgbw]) -> Option<Duration> {
        match self {
            Self::Pulse(effect) => effect.render(leds),
            Self::Bounce(effect) => effect.render(leds),
            Self::Wave(effect) => effect.render(leds),
            Self::Rainbow(effect) => effect.render(leds),
            Self::Fade(effect) => effect.render(leds),
            Self::Heartbeat(effect) => effect.render(leds),
            Self::Burn(effect) => effect.render(leds),
            Self::Storm(effect) => effect.render(leds),
            Self::Beat(effect) => effect.render(leds),
        }
    }

    pub fn finish(&self) -> Finish {
        match self {
            Self::Pulse(effect) => effect.finish(),
            Self::Bounce(effect) => effect.finish(),
            Self::Wave(effect) => effect.finish(),
            Self::Rainbow(effect) => effect.finish(),
            Self::Fade(effect) => effect.finish(),
            Self::Heartbeat(effect) => effect.finish(),
            Self::Burn(effect) => effect.finish(),
            Self::Storm(effect) => effect.finish(),
            Self::Beat(effect) => effect.finish(),
        }
    }

    /// Reset the effect state
    pub fn reset(&mut self) {
        match self {
            Self::Pulse(effect) => Effect::reset(effect),
            Self::Bounce(effect) => Effect::reset(effect),
            Self::Wave(effect) => Effect::reset(effect),
            Self::Rainbow(effect) => Effect::reset(effect),
            Self::Fade(effect) => Effect::reset(effect),
            Self::Heartbeat(effect) => Effect::reset(effect),
            Self::Burn(effect) => Effect::reset(effect),
            Self::Storm(effect) => Effect::reset(effect),
            Self::Beat(effect) => Effect::reset(effect),
        }
    }

    /// Get the effect ID for external observation
    pub const fn id(&self) -> EffectId {
        match self {
            Self::Pulse(_) => EffectId::Pulse,
            Self::Bounce(_) => EffectId::Bounce,
            Self::Wave(_) => EffectId::Wave,
            Self::Rainbow(_) => EffectId::Rainbow,
            Self::Fade(_) => EffectId::Fade,
            Self::Heartbeat(_) => EffectId::Heartbeat,
            Self::Burn(_) => EffectId::Burn,
            Self::Storm(_) => EffectId::Storm,
            Self::Beat(_) => EffectId::Beat,
        }
    }
}
