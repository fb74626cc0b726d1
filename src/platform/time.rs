//! Frame timing
//!
//! Elapsed time is informational only: the simulation never scales by it.

use std::time::Duration;

const FRAME_WINDOW: usize = 60;

/// Tracks recent frame durations for FPS display
#[derive(Debug, Clone)]
pub struct FrameClock {
    frame_times: [Duration; FRAME_WINDOW],
    frame_index: usize,
    frames: u64,
    last: Duration,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self {
            frame_times: [Duration::ZERO; FRAME_WINDOW],
            frame_index: 0,
            frames: 0,
            last: Duration::ZERO,
        }
    }
}

impl FrameClock {
    pub fn record(&mut self, elapsed: Duration) {
        self.frame_times[self.frame_index] = elapsed;
        self.frame_index = (self.frame_index + 1) % FRAME_WINDOW;
        self.frames += 1;
        self.last = elapsed;
    }

    /// Duration of the most recent frame
    pub fn last_frame(&self) -> Duration {
        self.last
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Average FPS over the recorded window, 0 before any time has passed
    pub fn fps(&self) -> u32 {
        let count = (self.frames as usize).min(FRAME_WINDOW);
        let total: Duration = self.frame_times[..count].iter().sum();
        if total.is_zero() {
            return 0;
        }
        (count as f64 / total.as_secs_f64()).round() as u32
    }
}
