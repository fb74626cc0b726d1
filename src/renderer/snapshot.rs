//! Read-only view of the game for renderers and UI

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::sim::GameState;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObstacleView {
    pub id: u32,
    pub pos: Vec3,
}

/// Everything a frame needs to draw
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub tick: u64,
    pub playing: bool,
    pub session: u32,
    pub player: Vec3,
    pub obstacles: Vec<ObstacleView>,
    /// Ground grid offset
    pub scroll_x: f32,
    pub score: f64,
    /// HUD score (floor of `score`)
    pub display_score: u64,
    /// Final score of the last session, for the game-over screen
    pub last_score: u64,
    pub best_score: u64,
    pub approach_speed: f32,
    pub frame_ms: f32,
    pub fps: u32,
}

impl Snapshot {
    pub fn capture(state: &GameState) -> Self {
        Self {
            tick: state.time_ticks,
            playing: state.is_playing(),
            session: state.sessions_played,
            player: state.player.pos,
            obstacles: state
                .obstacles
                .iter()
                .map(|o| ObstacleView { id: o.id, pos: o.pos })
                .collect(),
            scroll_x: state.scroll.x,
            score: state.score.value(),
            display_score: state.score.displayed(),
            last_score: state.last_score,
            best_score: state.best_score,
            approach_speed: state.difficulty.speed(),
            frame_ms: 0.0,
            fps: 0,
        }
    }
}
