//! Frame scheduling
//!
//! The host owns the cadence. The game registers one callback and the host
//! invokes it once per refresh; a tick never schedules the next one itself.

use std::time::Duration;

/// Per-frame callback, receives the time since the previous frame
pub type TickCallback = Box<dyn FnMut(Duration)>;

pub trait FrameScheduler {
    /// Register the per-frame callback, replacing any previous one
    fn register_tick(&mut self, callback: TickCallback);
}

/// Drives a fixed number of frames at a fixed duration, as fast as possible.
///
/// Used for the native binary and tests.
pub struct HeadlessScheduler {
    frames: u64,
    frame_time: Duration,
    callback: Option<TickCallback>,
}

impl HeadlessScheduler {
    pub fn new(frames: u64, frame_time: Duration) -> Self {
        Self {
            frames,
            frame_time,
            callback: None,
        }
    }

    /// Run every frame. Returns the number of frames delivered.
    pub fn run(&mut self) -> u64 {
        let Some(callback) = self.callback.as_mut() else {
            log::warn!("No tick callback registered, nothing to run");
            return 0;
        };

        for _ in 0..self.frames {
            callback(self.frame_time);
        }
        self.frames
    }
}

impl FrameScheduler for HeadlessScheduler {
    fn register_tick(&mut self, callback: TickCallback) {
        self.callback = Some(callback);
    }
}
