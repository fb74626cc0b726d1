//! Lane Runner - A three-lane endless runner
//!
//! Core modules:
//! - `sim`: Deterministic simulation (motion, spawning, collisions, game state)
//! - `game`: Per-frame orchestration for a host
//! - `renderer`: Snapshot interface for whatever draws the game
//! - `platform`: Input, frame timing and scheduling interfaces
//! - `tuning`: Data-driven game balance

pub mod game;
pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use game::GameLoop;
pub use platform::{FrameScheduler, HeadlessScheduler, InputEvent};
pub use renderer::{Renderer, Snapshot};
pub use tuning::{Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Number of obstacles in the pool
    pub const OBSTACLE_POOL_SIZE: usize = 9;

    /// Candidate spawn distances ahead of the player
    pub const SPAWN_DISTANCES: [f32; 3] = [30.0, 40.0, 50.0];
    /// Lane offsets (z)
    pub const LANES: [f32; 3] = [-3.0, 0.0, 3.0];
    /// Obstacle heights (y)
    pub const OBSTACLE_HEIGHTS: [f32; 2] = [0.0, 3.0];

    /// Distance behind the player at which an obstacle is re-placed
    pub const RECYCLE_MARGIN: f32 = 10.0;
    /// Where a hit obstacle is parked, ahead of the player
    pub const HIT_SENTINEL_DISTANCE: f32 = 100.0;

    /// Jump / gravity (world units per tick)
    pub const JUMP_IMPULSE: f32 = 1.3;
    pub const GRAVITY: f32 = 0.1;
    /// Resting height once the player touches the ground
    pub const GROUND_OFFSET: f32 = 0.1;

    /// Lateral distance of one lane change
    pub const LANE_WIDTH: f32 = 3.0;
    /// Player z is clamped to [-LANE_LIMIT, LANE_LIMIT]
    pub const LANE_LIMIT: f32 = 3.0;

    /// Obstacle approach speed at session start
    pub const BASE_SPEED: f32 = 0.1;
    /// Added to the approach speed every playing tick
    pub const SPEED_INCREMENT: f32 = 0.0001;

    /// Half-extents of the player's bounding volume (feet at position)
    pub const PLAYER_HALF_EXTENTS: [f32; 3] = [0.4, 1.1, 0.4];
    /// Half-extents of an obstacle's bounding volume (0.5 x 1 x 1 box)
    pub const OBSTACLE_HALF_EXTENTS: [f32; 3] = [0.25, 0.5, 0.5];

    /// Ground grid cosmetics
    pub const SCROLL_SPEED: f32 = 0.05;
    pub const SCROLL_RESET_X: f32 = 100.0;
    pub const SCROLL_WRAP_BEHIND: f32 = 100.0;

    /// Default frame duration for the headless shell (60 Hz)
    pub const FRAME_DT: f32 = 1.0 / 60.0;
}
