//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Logical steps only, never wall-clock deltas
//! - Seeded RNG only
//! - Stable iteration order (pool index)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod choice;
pub mod collision;
pub mod motion;
pub mod progress;
pub mod spawn;
pub mod state;
pub mod tick;

pub use autopilot::autopilot_input;
pub use choice::{ChoiceSet, EmptyChoiceSet};
pub use collision::{Aabb, CollisionShapes, all_hits, first_hit};
pub use progress::{Difficulty, Score};
pub use spawn::{advance_obstacles, pick_placement};
pub use state::{GameEvent, GamePhase, GameState, LaneShift, Obstacle, Player, ScrollMarker};
pub use tick::{TickInput, tick};
