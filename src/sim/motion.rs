//! Player motion: jump/gravity and lane changes
//!
//! Units are world units per tick. The simulation advances in logical steps,
//! never by wall-clock deltas.

use super::state::{LaneShift, Player};

impl Player {
    /// Start a jump. No-op while airborne; the command is not queued.
    ///
    /// Returns true if the jump started.
    pub fn set_jump(&mut self, impulse: f32) -> bool {
        if self.grounded {
            self.jump_speed = impulse;
            self.grounded = false;
            true
        } else {
            false
        }
    }

    #[inline]
    pub fn apply_gravity(&mut self, gravity: f32) {
        self.jump_speed -= gravity;
        self.pos.y += self.jump_speed;
    }

    /// Land the player: clamp to the ground offset and stop the fall
    pub fn ground_constraint(&mut self, ground_offset: f32) {
        if self.pos.y <= 0.0 {
            self.pos.y = ground_offset;
            self.jump_speed = 0.0;
            self.grounded = true;
        }
    }

    /// Step one lane left or right, clamped to `[-lane_limit, lane_limit]`
    pub fn move_lane(&mut self, shift: LaneShift, lane_width: f32, lane_limit: f32) {
        self.pos.z = (self.pos.z + shift.direction() * lane_width).clamp(-lane_limit, lane_limit);
    }

    #[inline]
    pub fn is_grounded(&self) -> bool {
        self.grounded
    }
}
