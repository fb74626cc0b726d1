//! Game state and core simulation types
//!
//! All state the loop mutates lives here, owned by [`GameState`].

use glam::Vec3;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::progress::{Difficulty, Score};
use super::spawn::pick_placement;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for a start command
    #[default]
    Menu,
    /// Active gameplay
    Playing,
}

/// Lane change direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LaneShift {
    Left,
    Right,
}

impl LaneShift {
    /// Sign applied to the lane width
    #[inline]
    pub fn direction(self) -> f32 {
        match self {
            LaneShift::Left => -1.0,
            LaneShift::Right => 1.0,
        }
    }
}

/// The runner
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// x is fixed (the world scrolls), y is height above ground, z is the lane offset
    pub pos: Vec3,
    /// Vertical velocity, 0 while grounded
    pub jump_speed: f32,
    /// Set on landing, cleared by a jump
    pub grounded: bool,
}

impl Player {
    pub fn new(ground_offset: f32) -> Self {
        Self {
            pos: Vec3::new(0.0, ground_offset, 0.0),
            jump_speed: 0.0,
            grounded: true,
        }
    }

    /// Put the player back on the ground in the center lane
    pub fn reset(&mut self, ground_offset: f32) {
        self.pos.y = ground_offset;
        self.pos.z = 0.0;
        self.jump_speed = 0.0;
        self.grounded = true;
    }
}

/// An obstacle from the fixed pool
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    /// Center of the obstacle's box
    pub pos: Vec3,
}

/// Cosmetic ground grid offset, scrolls every tick in every phase
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ScrollMarker {
    pub x: f32,
}

impl ScrollMarker {
    /// Scroll back and wrap to the far position once well behind the player
    pub fn advance(&mut self, player_x: f32, tuning: &Tuning) {
        self.x -= tuning.scroll_speed;
        if self.x <= player_x - tuning.scroll_wrap_behind {
            self.x = tuning.scroll_reset_x;
        }
    }
}

/// Things that happened during a tick, for logging and sound cues
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    SessionStarted { session: u32 },
    Jumped,
    LaneChanged { z: f32 },
    ObstacleRecycled { id: u32, pos: Vec3 },
    Collision { id: u32, score: u64 },
}

/// Complete game session state (deterministic for a given seed)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Session RNG, drives every obstacle placement
    pub rng: Pcg32,
    /// Current phase
    pub phase: GamePhase,
    pub player: Player,
    /// Fixed-size pool, recycled in place
    pub obstacles: Vec<Obstacle>,
    pub scroll: ScrollMarker,
    pub difficulty: Difficulty,
    pub score: Score,
    /// Final displayed score of the last ended session
    pub last_score: u64,
    /// Best displayed score this process (not persisted)
    pub best_score: u64,
    /// Sessions started so far
    pub sessions_played: u32,
    /// Ticks since creation, in any phase
    pub time_ticks: u64,
    /// Playing ticks in the current session
    pub session_ticks: u64,
    /// Events raised by the last tick
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create the session and its obstacle pool
    pub fn new(seed: u64, tuning: &Tuning) -> Self {
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Menu,
            player: Player::new(tuning.ground_offset),
            obstacles: Vec::with_capacity(tuning.obstacle_count),
            scroll: ScrollMarker::default(),
            difficulty: Difficulty::new(tuning.base_speed),
            score: Score::default(),
            last_score: 0,
            best_score: 0,
            sessions_played: 0,
            time_ticks: 0,
            session_ticks: 0,
            events: Vec::new(),
        };

        for id in 0..tuning.obstacle_count as u32 {
            let pos = pick_placement(&mut state.rng, tuning, state.player.pos.x);
            state.obstacles.push(Obstacle { id, pos });
        }

        state
    }

    #[inline]
    pub fn is_playing(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    /// Begin a new session. Ignored while already playing.
    ///
    /// Returns true if a session was started.
    pub fn start_session(&mut self, tuning: &Tuning) -> bool {
        if self.is_playing() {
            return false;
        }

        self.phase = GamePhase::Playing;
        self.score.reset();
        self.difficulty.reset(tuning.base_speed);
        self.session_ticks = 0;
        self.sessions_played += 1;
        self.player.reset(tuning.ground_offset);

        let player_x = self.player.pos.x;
        for obstacle in &mut self.obstacles {
            obstacle.place(pick_placement(&mut self.rng, tuning, player_x));
        }

        self.events.push(GameEvent::SessionStarted {
            session: self.sessions_played,
        });
        log::info!(
            "Session {} started (seed {})",
            self.sessions_played,
            self.seed
        );
        true
    }

    /// End the session after a hit on obstacle `index`
    pub fn end_session(&mut self, index: usize, tuning: &Tuning) {
        let sentinel_x = self.player.pos.x + tuning.hit_sentinel_distance;
        let id = match self.obstacles.get_mut(index) {
            Some(obstacle) => {
                obstacle.pos.x = sentinel_x;
                obstacle.id
            }
            None => return,
        };

        self.difficulty.reset(tuning.base_speed);
        self.phase = GamePhase::Menu;

        let score = self.score.displayed();
        self.score.reset();
        self.last_score = score;
        self.best_score = self.best_score.max(score);
        self.events.push(GameEvent::Collision { id, score });
        log::info!(
            "Session {} ended: hit obstacle {} after {} ticks, score {} (best {})",
            self.sessions_played,
            id,
            self.session_ticks,
            score,
            self.best_score
        );
    }
}
