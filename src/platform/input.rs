//! Discrete input events
//!
//! Hosts translate key presses into [`InputEvent`]s. Every event is an edge:
//! holding a key must not repeat it.

use serde::{Deserialize, Serialize};

use crate::sim::{LaneShift, TickInput};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputEvent {
    MoveLeft,
    MoveRight,
    Jump,
    StartSession,
}

impl InputEvent {
    /// Map a DOM-style `KeyboardEvent.key` / `code` value
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" | "a" | "A" => Some(InputEvent::MoveLeft),
            "ArrowRight" | "d" | "D" => Some(InputEvent::MoveRight),
            " " | "Space" | "ArrowUp" | "w" | "W" => Some(InputEvent::Jump),
            "Enter" => Some(InputEvent::StartSession),
            _ => None,
        }
    }
}

/// Events collected between ticks, consumed by the next tick
#[derive(Debug, Default)]
pub struct InputQueue {
    pending: TickInput,
}

impl InputQueue {
    pub fn push(&mut self, event: InputEvent) {
        match event {
            InputEvent::MoveLeft => self.pending.lane_shifts.push(LaneShift::Left),
            InputEvent::MoveRight => self.pending.lane_shifts.push(LaneShift::Right),
            InputEvent::Jump => self.pending.jump = true,
            InputEvent::StartSession => self.pending.start = true,
        }
    }

    /// Merge commands generated elsewhere (autopilot)
    pub fn merge(&mut self, other: TickInput) {
        self.pending.lane_shifts.extend(other.lane_shifts);
        self.pending.jump |= other.jump;
        self.pending.start |= other.start;
    }

    pub fn pending(&self) -> &TickInput {
        &self.pending
    }

    /// Clear one-shot inputs after a tick consumed them
    pub fn clear(&mut self) {
        self.pending.clear();
    }
}
