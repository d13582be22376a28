//! Strip controller
//!
//! Owns the strip and the single animation task. Every operation first stops
//! whatever is running, then either writes a terminal frame itself (`off`,
//! `set_color`) or starts a new worker. The task slot stays locked for the
//! whole stop-then-start sequence, so concurrent callers never leave two
//! workers behind: the last caller wins.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use log::{error, info, warn};
use serde::Serialize;

use crate::{
    color::{Rgbw, channels},
    config::StripConfig,
    driver::{self, OutputDriver},
    effect::{
        BeatEffect, BounceEffect, BurnEffect, EffectId, EffectSlot, FadeEffect, Finish,
        HeartbeatEffect, PulseEffect, RainbowEffect, StormEffect, WaveEffect,
    },
    error::LightError,
    strip::Strip,
    task::{AnimationTask, SharedStrip, lock_strip},
    weather::{self, WeatherCue},
};

/// What the strip is currently doing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Dark, nothing running
    #[default]
    Off,
    /// A static frame is shown, nothing running
    Solid,
    /// An animation task is writing frames
    Running(EffectId),
}

impl Mode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::Solid => "solid",
            Self::Running(id) => id.as_str(),
        }
    }

    pub const fn is_idle(self) -> bool {
        !matches!(self, Self::Running(_))
    }
}

/// Snapshot of the controller for status reporting
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ControllerStatus {
    pub mode: &'static str,
    pub running: bool,
    pub brightness: f32,
    pub pixel_count: usize,
    pub simulated: bool,
    /// Milliseconds the current animation has been running
    pub uptime_ms: Option<u64>,
}

#[derive(Default)]
struct TaskSlot {
    task: Option<AnimationTask>,
    mode: Mode,
}

impl TaskSlot {
    fn mode(&self) -> Mode {
        match (&self.task, self.mode) {
            (Some(task), Mode::Running(id)) if task.is_finished() => {
                if id.is_one_shot() && task.finish() == Finish::Hold {
                    Mode::Solid
                } else {
                    Mode::Off
                }
            }
            (_, mode) => mode,
        }
    }

    fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }
}

/// Controller for one LED strip
///
/// Construct it once at startup and share it by reference (or `Arc`) with
/// everything that needs the lights. Dropping it turns the strip off.
pub struct StripController {
    strip: SharedStrip,
    slot: Mutex<TaskSlot>,
    config: StripConfig,
}

impl StripController {
    /// Create a controller with the driver picked from `config`
    ///
    /// On hosts without the LED device and `driver = "auto"` this still
    /// succeeds, in headless mode.
    pub fn new(config: StripConfig) -> Result<Self, LightError> {
        config.validate()?;
        let driver = driver::detect(&config)?;
        Ok(Self::with_driver(config, driver))
    }

    /// Create a controller around an explicit driver
    pub fn with_driver(config: StripConfig, driver: Box<dyn OutputDriver>) -> Self {
        let strip = Strip::new(config.pixel_count, config.brightness, driver);
        info!(
            "strip controller ready: {} pixels, {:?} order{}",
            config.pixel_count,
            config.channel_order,
            if strip.is_simulated() { ", headless" } else { "" }
        );
        Self {
            strip: Arc::new(Mutex::new(strip)),
            slot: Mutex::new(TaskSlot::default()),
            config,
        }
    }

    pub const fn config(&self) -> &StripConfig {
        &self.config
    }

    pub fn mode(&self) -> Mode {
        self.slot().mode()
    }

    /// True while an animation task is alive
    pub fn is_running(&self) -> bool {
        self.slot().is_running()
    }

    /// Copy of the pixel buffer
    pub fn pixels(&self) -> Vec<Rgbw> {
        lock_strip(&self.strip).buffer().pixels.clone()
    }

    /// Current flush-time brightness
    pub fn brightness(&self) -> f32 {
        lock_strip(&self.strip).buffer().brightness
    }

    pub fn pixel_count(&self) -> usize {
        self.config.pixel_count
    }

    /// True when frames never reach physical LEDs
    pub fn is_simulated(&self) -> bool {
        lock_strip(&self.strip).is_simulated()
    }

    pub fn status(&self) -> ControllerStatus {
        let slot = self.slot();
        let running = slot.is_running();
        let uptime_ms = slot
            .task
            .as_ref()
            .filter(|_| running)
            .map(|task| task.elapsed().as_millis());
        let strip = lock_strip(&self.strip);
        ControllerStatus {
            mode: slot.mode().as_str(),
            running,
            brightness: strip.buffer().brightness,
            pixel_count: strip.len(),
            simulated: strip.is_simulated(),
            uptime_ms,
        }
    }

    /// Stop the running animation, leaving the last frame on the strip
    pub fn stop(&self) {
        let mut slot = self.slot();
        self.stop_locked(&mut slot);
        slot.mode = Mode::Off;
    }

    /// Stop any animation and drive the strip fully off
    ///
    /// Safe to call repeatedly. Brightness is back at the configured default
    /// afterwards while every pixel stays zero.
    pub fn off(&self) -> Result<(), LightError> {
        let mut slot = self.slot();
        self.stop_locked(&mut slot);
        slot.mode = Mode::Off;

        lock_strip(&self.strip)
            .blank(self.config.off_repeats)
            .inspect_err(|err| error!("off: {err}"))?;
        info!("strip off");
        Ok(())
    }

    /// Stop any animation and fill the strip with one color
    pub fn set_color(&self, color: Rgbw) -> Result<(), LightError> {
        let mut slot = self.slot();
        self.stop_locked(&mut slot);

        match lock_strip(&self.strip).fill_and_show(color) {
            Ok(()) => {
                slot.mode = Mode::Solid;
                info!("solid {:?}", channels(color));
                Ok(())
            }
            Err(err) => {
                slot.mode = Mode::Off;
                error!("set_color: {err}");
                Err(err.into())
            }
        }
    }

    /// Breathe `color` up and down, one breath per `seconds`
    pub fn pulse(&self, color: Rgbw, seconds: f32) -> Result<(), LightError> {
        let seconds = non_negative("seconds", seconds)?;
        self.start(EffectSlot::Pulse(PulseEffect::new(color, seconds)))
    }

    /// Bounce a dot with a fading tail of `tail` pixels, `speed` seconds per step
    pub fn bounce(&self, color: Rgbw, tail: usize, speed: f32) -> Result<(), LightError> {
        let speed = non_negative("speed", speed)?;
        self.start(EffectSlot::Bounce(BounceEffect::new(color, tail, speed)))
    }

    /// Sine intensity wave of `base`, `wavelength` pixels long
    pub fn wave(&self, base: Rgbw, wavelength: u32, speed: f32) -> Result<(), LightError> {
        if wavelength == 0 {
            return Err(LightError::InvalidParameter(
                "wavelength must be at least 1".into(),
            ));
        }
        let speed = non_negative("speed", speed)?;
        self.start(EffectSlot::Wave(WaveEffect::new(base, wavelength, speed)))
    }

    /// Moving rainbow, advancing `step` wheel positions every `speed` seconds
    pub fn rainbow(&self, speed: f32, step: u32) -> Result<(), LightError> {
        let speed = non_negative("speed", speed)?;
        self.start(EffectSlot::Rainbow(RainbowEffect::new(speed, step)))
    }

    /// Fade `from` -> `to` -> `from`, one round trip per `period` seconds
    pub fn fade_between(&self, from: Rgbw, to: Rgbw, period: f32) -> Result<(), LightError> {
        let period = non_negative("period", period)?;
        if period == 0.0 {
            return Err(LightError::InvalidParameter("period must be positive".into()));
        }
        self.start(EffectSlot::Fade(FadeEffect::new(from, to, period)))
    }

    /// Double red beat, then off
    pub fn heart_pulse(&self) -> Result<(), LightError> {
        self.start(EffectSlot::Heartbeat(HeartbeatEffect::new()))
    }

    /// Burn red -> purple -> blue over `seconds`
    ///
    /// The final state follows `override_burn` in the config.
    pub fn override_burn(&self, seconds: f32) -> Result<(), LightError> {
        let seconds = non_negative("seconds", seconds)?;
        let effect = BurnEffect::new(seconds, self.config.override_burn);
        self.start(EffectSlot::Burn(effect))
    }

    /// Flash `color` on every beat of `tempo_bpm`, scaled by `energy`
    pub fn beat(&self, color: Rgbw, tempo_bpm: f32, energy: f32) -> Result<(), LightError> {
        let tempo_bpm = non_negative("tempo_bpm", tempo_bpm)?;
        let energy = non_negative("energy", energy)?;
        self.start(EffectSlot::Beat(BeatEffect::new(color, tempo_bpm, energy)))
    }

    /// Show the cue for a free-text weather condition
    ///
    /// Unknown conditions fall back to a soft white and are not an error.
    pub fn weather(&self, condition: &str) -> Result<WeatherCue, LightError> {
        let cue = WeatherCue::classify(condition);
        info!("weather '{condition}' -> {}", cue.as_str());
        match cue {
            WeatherCue::Sunny => self.set_color(weather::SUNNY_COLOR)?,
            WeatherCue::Cloudy => self.pulse(weather::CLOUDY_COLOR, weather::CLOUDY_PULSE_SECS)?,
            WeatherCue::Rain => self.wave(
                weather::RAIN_COLOR,
                weather::RAIN_WAVELENGTH,
                weather::RAIN_SPEED,
            )?,
            WeatherCue::Snow => self.fade_between(
                weather::SNOW_FROM,
                weather::SNOW_TO,
                weather::SNOW_PERIOD_SECS,
            )?,
            WeatherCue::Storm => self.start(EffectSlot::Storm(StormEffect::new()))?,
            WeatherCue::Default => self.set_color(weather::DEFAULT_COLOR)?,
        }
        Ok(cue)
    }

    /// Turn the strip off before the process exits
    pub fn shutdown(&self) -> Result<(), LightError> {
        info!("shutting down strip controller");
        self.off()
    }

    fn start(&self, effect: EffectSlot) -> Result<(), LightError> {
        let mut slot = self.slot();
        self.stop_locked(&mut slot);

        let id = effect.id();
        match AnimationTask::spawn(Arc::clone(&self.strip), effect, self.config.off_repeats) {
            Ok(task) => {
                slot.task = Some(task);
                slot.mode = Mode::Running(id);
                info!("{} started", id.as_str());
                Ok(())
            }
            Err(err) => {
                slot.mode = Mode::Off;
                error!("{} failed to start: {err}", id.as_str());
                Err(err)
            }
        }
    }

    /// Stop the current task, if any; the handle is gone afterwards either way
    fn stop_locked(&self, slot: &mut TaskSlot) {
        let Some(task) = slot.task.take() else {
            return;
        };
        if let Err(err) = task.stop(self.config.stop_timeout()) {
            warn!("{err}; dropping it");
        }
    }

    fn slot(&self) -> MutexGuard<'_, TaskSlot> {
        self.slot.lock().unwrap_or_else(|poisoned| {
            warn!("task slot lock was poisoned, recovering");
            PoisonError::into_inner(poisoned)
        })
    }
}

impl Drop for StripController {
    fn drop(&mut self) {
        if let Err(err) = self.off() {
            error!("failed to turn the strip off on drop: {err}");
        }
    }
}

fn non_negative(name: &str, value: f32) -> Result<f32, LightError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(LightError::InvalidParameter(format!(
            "{name} must be a finite, non-negative number, got {value}"
        )))
    }
}
