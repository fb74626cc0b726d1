//! Difficulty ramp and score accumulation

use serde::{Deserialize, Serialize};

/// Obstacle approach speed. Grows every playing tick, no ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Difficulty {
    speed: f32,
}

impl Difficulty {
    pub fn new(base_speed: f32) -> Self {
        Self { speed: base_speed }
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.speed
    }

    #[inline]
    pub fn ramp(&mut self, increment: f32) {
        self.speed += increment;
    }

    pub fn reset(&mut self, base_speed: f32) {
        self.speed = base_speed;
    }
}

/// Distance-based score. Accumulated in f64 so long sessions keep precision.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Score {
    value: f64,
}

impl Score {
    #[inline]
    pub fn accumulate(&mut self, speed: f32) {
        self.value += f64::from(speed);
    }

    pub fn reset(&mut self) {
        self.value = 0.0;
    }

    /// Raw accumulated value
    #[inline]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Score as shown on the HUD
    #[inline]
    pub fn displayed(&self) -> u64 {
        self.value.floor() as u64
    }
}
