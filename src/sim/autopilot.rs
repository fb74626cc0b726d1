//! Idle/demo mode - the game plays itself
//!
//! Produces the same edge-triggered commands a player would. Sidesteps into a
//! free lane when one exists, otherwise jumps low obstacles in time.

use super::state::{GameState, LaneShift, Obstacle};
use super::tick::TickInput;
use crate::tuning::Tuning;

/// How far ahead (in ticks of travel) obstacles are considered
const LOOKAHEAD_TICKS: f32 = 60.0;
/// Jump this many ticks before contact
const JUMP_LEAD_TICKS: f32 = 4.0;

/// Commands for the next tick
pub fn autopilot_input(state: &GameState, tuning: &Tuning) -> TickInput {
    let mut input = TickInput::default();
    if !state.is_playing() {
        input.start = true;
        return input;
    }

    let player = &state.player;
    let speed = state.difficulty.speed();
    // Center distance in x at which the boxes start to overlap
    let reach = tuning.player_half_extents.x + tuning.obstacle_half_extents.x;
    let horizon = reach + speed * LOOKAHEAD_TICKS;

    let Some(dx) = nearest_threat(state, tuning, player.pos.z, reach, horizon) else {
        return input;
    };

    for shift in [LaneShift::Left, LaneShift::Right] {
        let z = (player.pos.z + shift.direction() * tuning.lane_width)
            .clamp(-tuning.lane_limit, tuning.lane_limit);
        if z != player.pos.z && nearest_threat(state, tuning, z, reach, horizon).is_none() {
            input.lane_shifts.push(shift);
            return input;
        }
    }

    if player.is_grounded() && (dx - reach) / speed <= JUMP_LEAD_TICKS {
        input.jump = true;
    }
    input
}

/// Distance to the closest obstacle in lane `z` that would hit a grounded player
fn nearest_threat(
    state: &GameState,
    tuning: &Tuning,
    z: f32,
    reach: f32,
    horizon: f32,
) -> Option<f32> {
    let player_x = state.player.pos.x;
    state
        .obstacles
        .iter()
        .filter(|o| in_lane(o, z, tuning) && blocks_runner(o, tuning))
        .map(|o| o.pos.x - player_x)
        .filter(|&dx| dx >= -reach && dx <= horizon)
        .min_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
}

fn in_lane(obstacle: &Obstacle, z: f32, tuning: &Tuning) -> bool {
    (obstacle.pos.z - z).abs() < tuning.player_half_extents.z + tuning.obstacle_half_extents.z
}

/// True if a player standing on the ground would touch this obstacle
fn blocks_runner(obstacle: &Obstacle, tuning: &Tuning) -> bool {
    let runner_top = tuning.ground_offset + 2.0 * tuning.player_half_extents.y;
    obstacle.pos.y - tuning.obstacle_half_extents.y <= runner_top
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::tick::tick;
    use glam::Vec3;

    fn playing_state(tuning: &Tuning) -> GameState {
        let mut state = GameState::new(77, tuning);
        state.start_session(tuning);
        for o in &mut state.obstacles {
            o.pos = Vec3::new(1.0e6, 0.0, 0.0);
        }
        state
    }

    #[test]
    fn test_starts_from_menu() {
        let tuning = Tuning::default();
        let state = GameState::new(1, &tuning);
        assert!(autopilot_input(&state, &tuning).start);
    }

    #[test]
    fn test_sidesteps_into_free_lane() {
        let tuning = Tuning::default();
        let mut state = playing_state(&tuning);
        state.obstacles[0].pos = Vec3::new(3.0, 0.0, 0.0);
        state.obstacles[1].pos = Vec3::new(3.0, 0.0, -3.0);

        let input = autopilot_input(&state, &tuning);

        assert_eq!(input.lane_shifts, vec![LaneShift::Right]);
        assert!(!input.jump);
    }

    #[test]
    fn test_jumps_when_boxed_in() {
        let tuning = Tuning::default();
        let mut state = playing_state(&tuning);
        for (i, z) in [-3.0, 0.0, 3.0].into_iter().enumerate() {
            state.obstacles[i].pos = Vec3::new(0.9, 0.0, z);
        }

        let input = autopilot_input(&state, &tuning);

        assert!(input.lane_shifts.is_empty());
        assert!(input.jump);
    }

    #[test]
    fn test_ignores_high_obstacles() {
        let tuning = Tuning::default();
        let mut state = playing_state(&tuning);
        state.obstacles[0].pos = Vec3::new(2.0, 3.0, 0.0);

        assert!(autopilot_input(&state, &tuning).is_empty());
    }

    #[test]
    fn test_drives_sessions_unattended() {
        let tuning = Tuning::default();
        let mut state = GameState::new(2024, &tuning);

        for _ in 0..600 {
            let input = autopilot_input(&state, &tuning);
            tick(&mut state, &input, &tuning);
        }

        assert!(state.sessions_played >= 1);
        assert_eq!(state.time_ticks, 600);
    }
}
