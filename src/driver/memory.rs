//! In-memory driver that records every flushed frame.
//!
//! Used for emulation and for observing the controller from tests.

use std::sync::{Arc, Mutex, PoisonError};

use super::OutputDriver;
use crate::{color::Rgbw, error::DriverError};

/// One flushed frame as the driver received it
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedFrame {
    pub pixels: Vec<Rgbw>,
    pub brightness: f32,
}

/// Shared handle to the frames written through a [`RecordingDriver`]
#[derive(Debug, Clone, Default)]
pub struct FrameLog {
    frames: Arc<Mutex<Vec<RecordedFrame>>>,
}

impl FrameLog {
    /// Number of frames flushed so far
    pub fn len(&self) -> usize {
        self.frames.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Most recently flushed frame
    pub fn last(&self) -> Option<RecordedFrame> {
        self.frames
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
    }

    /// Copy of every frame flushed so far
    pub fn frames(&self) -> Vec<RecordedFrame> {
        self.frames
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn push(&self, frame: RecordedFrame) {
        self.frames
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(frame);
    }
}

/// Simulated driver keeping a log of flushed frames
#[derive(Debug, Default)]
pub struct RecordingDriver {
    log: FrameLog,
    fail_after: Option<usize>,
    written: usize,
}

impl RecordingDriver {
    /// Create a driver and the log handle observing it
    pub fn new() -> (Self, FrameLog) {
        let driver = Self::default();
        let log = driver.log.clone();
        (driver, log)
    }

    /// Fail every write once `frames` writes have succeeded
    #[must_use]
    pub fn failing_after(mut self, frames: usize) -> Self {
        self.fail_after = Some(frames);
        self
    }
}

impl OutputDriver for RecordingDriver {
    fn write(&mut self, pixels: &[Rgbw], brightness: f32) -> Result<(), DriverError> {
        if self.fail_after.is_some_and(|limit| self.written >= limit) {
            return Err(DriverError::Write("simulated write failure".into()));
        }
        self.written += 1;
        self.log.push(RecordedFrame {
            pixels: pixels.to_vec(),
            brightness,
        });
        Ok(())
    }

    fn is_simulated(&self) -> bool {
        true
    }
}
