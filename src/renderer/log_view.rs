//! Renderer that reports progress through the `log` facade

use super::{Renderer, Snapshot};

/// Logs a status line every `interval` frames and on every phase change
pub struct LogRenderer {
    interval: u64,
    frames: u64,
    was_playing: bool,
}

impl LogRenderer {
    pub fn new(interval: u64) -> Self {
        Self {
            interval: interval.max(1),
            frames: 0,
            was_playing: false,
        }
    }
}

impl Renderer for LogRenderer {
    fn present(&mut self, snapshot: &Snapshot) {
        self.frames += 1;
        let phase_changed = snapshot.playing != self.was_playing;
        self.was_playing = snapshot.playing;

        if !phase_changed && self.frames % self.interval != 0 {
            return;
        }

        // The menu shows the score the last session ended with
        let score = if snapshot.playing {
            snapshot.display_score
        } else {
            snapshot.last_score
        };
        log::info!(
            "tick {} {} score {} speed {:.4} player ({:.1}, {:.1}) fps {}",
            snapshot.tick,
            if snapshot.playing { "PLAYING" } else { "MENU" },
            score,
            snapshot.approach_speed,
            snapshot.player.y,
            snapshot.player.z,
            snapshot.fps,
        );
    }
}
