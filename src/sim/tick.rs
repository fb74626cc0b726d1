//! Per-tick simulation step
//!
//! Core game loop body that advances the simulation deterministically. One
//! call is one logical step, whatever the host's frame rate.

use super::collision::{CollisionShapes, first_hit};
use super::spawn::advance_obstacles;
use super::state::{GameEvent, GameState, LaneShift};
use crate::tuning::Tuning;

/// Input commands for a single tick (edge-triggered, deterministic)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickInput {
    /// Lane changes, applied in order
    pub lane_shifts: Vec<LaneShift>,
    /// Jump command
    pub jump: bool,
    /// Start a session from the menu
    pub start: bool,
}

impl TickInput {
    pub fn is_empty(&self) -> bool {
        self.lane_shifts.is_empty() && !self.jump && !self.start
    }

    /// Drop every command, keeping the allocation
    pub fn clear(&mut self) {
        self.lane_shifts.clear();
        self.jump = false;
        self.start = false;
    }
}

/// Advance the game state by one tick
pub fn tick(state: &mut GameState, input: &TickInput, tuning: &Tuning) {
    state.events.clear();
    state.time_ticks += 1;

    if input.start {
        state.start_session(tuning);
    }

    if state.is_playing() {
        step_playing(state, input, tuning);
    }

    // Cosmetic, runs in every phase
    let player_x = state.player.pos.x;
    state.scroll.advance(player_x, tuning);
}

fn step_playing(state: &mut GameState, input: &TickInput, tuning: &Tuning) {
    state.session_ticks += 1;

    // Commands
    for &shift in &input.lane_shifts {
        let before = state.player.pos.z;
        state
            .player
            .move_lane(shift, tuning.lane_width, tuning.lane_limit);
        if state.player.pos.z != before {
            state.events.push(GameEvent::LaneChanged {
                z: state.player.pos.z,
            });
        }
    }
    if input.jump && state.player.set_jump(tuning.jump_impulse) {
        state.events.push(GameEvent::Jumped);
    }

    // Obstacles approach, stragglers are re-placed ahead
    let player_x = state.player.pos.x;
    let speed = state.difficulty.speed();
    let recycled = advance_obstacles(
        &mut state.obstacles,
        &mut state.rng,
        tuning,
        player_x,
        speed,
    );
    state.events.extend(
        recycled
            .into_iter()
            .map(|(id, pos)| GameEvent::ObstacleRecycled { id, pos }),
    );

    // Collision uses this tick's post-advance positions
    let shapes = CollisionShapes {
        player: tuning.player_half_extents,
        obstacle: tuning.obstacle_half_extents,
    };
    match first_hit(&state.player, &state.obstacles, shapes) {
        Some(index) => state.end_session(index, tuning),
        None => {
            state.score.accumulate(speed);
            state.difficulty.ramp(tuning.speed_increment);
        }
    }

    // Jump/gravity last, so collision saw the pre-gravity position
    state.player.apply_gravity(tuning.gravity);
    state.player.ground_constraint(tuning.ground_offset);
}
