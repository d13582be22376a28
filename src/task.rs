//! Background animation worker.
//!
//! One thread per running animation. The thread renders a frame under the
//! strip lock, flushes it, then sleeps until the frame's hold time is over or
//! it is told to stop. Cancellation is cooperative: the flag is checked at
//! every frame boundary and again once the strip lock is held, and the
//! sleeping thread is unparked so it notices right away. Stopping never takes
//! the strip lock, so a worker stuck in a slow write cannot stall it.

use std::{
    sync::{
        Arc, Mutex, MutexGuard, PoisonError,
        atomic::{AtomicBool, Ordering},
    },
    thread::{self, JoinHandle},
    time::{Duration as StdDuration, Instant as StdInstant},
};

use embassy_time::{Duration, Instant};
use log::{debug, error, warn};

use crate::{
    effect::{EffectId, EffectSlot, Finish},
    error::LightError,
    strip::Strip,
};

/// Poll interval while waiting for a canceled worker to exit
const JOIN_POLL: StdDuration = StdDuration::from_millis(1);

pub(crate) type SharedStrip = Arc<Mutex<Strip>>;

/// Lock the strip, recovering the data if a worker panicked while holding it
pub(crate) fn lock_strip(strip: &Mutex<Strip>) -> MutexGuard<'_, Strip> {
    strip.lock().unwrap_or_else(|poisoned| {
        warn!("strip lock was poisoned, recovering");
        PoisonError::into_inner(poisoned)
    })
}

pub(crate) fn to_std(duration: Duration) -> StdDuration {
    StdDuration::from_micros(duration.as_micros())
}

/// Handle to the single running animation thread
pub struct AnimationTask {
    id: EffectId,
    finish: Finish,
    cancel: Arc<AtomicBool>,
    handle: JoinHandle<()>,
    started: Instant,
}

impl AnimationTask {
    /// Start rendering `effect` on its own thread
    pub(crate) fn spawn(
        strip: SharedStrip,
        effect: EffectSlot,
        off_repeats: u8,
    ) -> Result<Self, LightError> {
        let id = effect.id();
        let finish = effect.finish();
        let cancel = Arc::new(AtomicBool::new(false));

        let worker = Worker {
            strip,
            effect,
            cancel: Arc::clone(&cancel),
            off_repeats,
        };
        let handle = thread::Builder::new()
            .name(format!("strip-{}", id.as_str()))
            .spawn(move || worker.run())
            .map_err(LightError::Spawn)?;

        debug!("animation '{}' started", id.as_str());
        Ok(Self {
            id,
            finish,
            cancel,
            handle,
            started: Instant::now(),
        })
    }

    pub const fn id(&self) -> EffectId {
        self.id
    }

    /// What the strip shows if the task ends on its own
    pub const fn finish(&self) -> Finish {
        self.finish
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Time since the task was started
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Stop the worker and wait for it to exit, at most `timeout`
    ///
    /// A worker that missed the join window may still finish the write it is
    /// in, but it checks the flag before touching the strip again, so whoever
    /// takes the strip lock next is never overwritten. On timeout the thread
    /// is detached and [`LightError::CancellationTimeout`] is returned.
    pub(crate) fn stop(self, timeout: Duration) -> Result<(), LightError> {
        self.cancel.store(true, Ordering::Release);
        self.handle.thread().unpark();

        let deadline = StdInstant::now() + to_std(timeout);
        while !self.handle.is_finished() {
            if StdInstant::now() >= deadline {
                return Err(LightError::CancellationTimeout {
                    mode: self.id.as_str(),
                    timeout_ms: timeout.as_millis(),
                });
            }
            thread::sleep(JOIN_POLL);
        }

        if self.handle.join().is_err() {
            error!("animation '{}' panicked", self.id.as_str());
        }
        debug!("animation '{}' stopped", self.id.as_str());
        Ok(())
    }
}

struct Worker {
    strip: SharedStrip,
    effect: EffectSlot,
    cancel: Arc<AtomicBool>,
    off_repeats: u8,
}

impl Worker {
    fn run(mut self) {
        while !self.is_cancelled() {
            let hold = {
                let mut strip = lock_strip(&self.strip);
                // stopped while waiting for the lock
                if self.is_cancelled() {
                    break;
                }
                let Some(hold) = self.effect.render(strip.pixels_mut()) else {
                    self.complete(&mut strip);
                    break;
                };
                if let Err(err) = strip.show() {
                    error!("animation '{}' aborted: {err}", self.effect.id().as_str());
                    break;
                }
                hold
            };

            if !self.sleep(hold) {
                break;
            }
        }
    }

    /// One-shot sequence played out
    fn complete(&self, strip: &mut Strip) {
        let id = self.effect.id().as_str();
        match self.effect.finish() {
            Finish::Hold => debug!("animation '{id}' complete, holding last frame"),
            Finish::Off => {
                if let Err(err) = strip.blank(self.off_repeats) {
                    error!("animation '{id}' could not blank the strip: {err}");
                } else {
                    debug!("animation '{id}' complete, strip off");
                }
            }
        }
    }

    fn is_cancelled(&self) -> bool {
        self.cancel.load(Ordering::Acquire)
    }

    /// Sleep for `hold`; returns false if canceled meanwhile
    fn sleep(&self, hold: Duration) -> bool {
        let deadline = StdInstant::now() + to_std(hold);
        loop {
            if self.is_cancelled() {
                return false;
            }
            let now = StdInstant::now();
            if now >= deadline {
                return true;
            }
            thread::park_timeout(deadline - now);
        }
    }
}
