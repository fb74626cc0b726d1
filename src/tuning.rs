//! Data-driven game balance
//!
//! Every gameplay constant lives in [`Tuning`]. Defaults match `consts`; a
//! JSON file may override any subset of fields.

use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::sim::ChoiceSet;

/// Errors raised while loading or validating tuning
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to read tuning file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid tuning JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("{field} must be {requirement}, got {value}")]
    OutOfRange {
        field: &'static str,
        requirement: &'static str,
        value: f32,
    },

    #[error("obstacle pool must contain at least one obstacle")]
    EmptyPool,
}

/// Game balance values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub obstacle_count: usize,
    pub spawn_distances: ChoiceSet<f32>,
    pub lanes: ChoiceSet<f32>,
    pub obstacle_heights: ChoiceSet<f32>,
    pub recycle_margin: f32,
    pub hit_sentinel_distance: f32,

    pub jump_impulse: f32,
    pub gravity: f32,
    pub ground_offset: f32,
    pub lane_width: f32,
    pub lane_limit: f32,

    pub base_speed: f32,
    pub speed_increment: f32,

    pub player_half_extents: Vec3,
    pub obstacle_half_extents: Vec3,

    pub scroll_speed: f32,
    pub scroll_reset_x: f32,
    pub scroll_wrap_behind: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            obstacle_count: OBSTACLE_POOL_SIZE,
            spawn_distances: ChoiceSet::from_array(SPAWN_DISTANCES),
            lanes: ChoiceSet::from_array(LANES),
            obstacle_heights: ChoiceSet::from_array(OBSTACLE_HEIGHTS),
            recycle_margin: RECYCLE_MARGIN,
            hit_sentinel_distance: HIT_SENTINEL_DISTANCE,

            jump_impulse: JUMP_IMPULSE,
            gravity: GRAVITY,
            ground_offset: GROUND_OFFSET,
            lane_width: LANE_WIDTH,
            lane_limit: LANE_LIMIT,

            base_speed: BASE_SPEED,
            speed_increment: SPEED_INCREMENT,

            player_half_extents: Vec3::from_array(PLAYER_HALF_EXTENTS),
            obstacle_half_extents: Vec3::from_array(OBSTACLE_HALF_EXTENTS),

            scroll_speed: SCROLL_SPEED,
            scroll_reset_x: SCROLL_RESET_X,
            scroll_wrap_behind: SCROLL_WRAP_BEHIND,
        }
    }
}

impl Tuning {
    /// Parse and validate tuning from a JSON string
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load tuning from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| TuningError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    /// Check every value the simulation relies on
    pub fn validate(&self) -> Result<(), TuningError> {
        if self.obstacle_count == 0 {
            return Err(TuningError::EmptyPool);
        }

        positive("jump_impulse", self.jump_impulse)?;
        positive("gravity", self.gravity)?;
        positive("lane_width", self.lane_width)?;
        positive("base_speed", self.base_speed)?;
        // Difficulty must strictly increase while playing
        positive("speed_increment", self.speed_increment)?;
        positive("hit_sentinel_distance", self.hit_sentinel_distance)?;
        non_negative("ground_offset", self.ground_offset)?;
        non_negative("lane_limit", self.lane_limit)?;
        non_negative("recycle_margin", self.recycle_margin)?;
        non_negative("scroll_speed", self.scroll_speed)?;
        non_negative("scroll_wrap_behind", self.scroll_wrap_behind)?;

        for v in self.player_half_extents.to_array() {
            positive("player_half_extents", v)?;
        }
        for v in self.obstacle_half_extents.to_array() {
            positive("obstacle_half_extents", v)?;
        }

        Ok(())
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), TuningError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(TuningError::OutOfRange {
            field,
            requirement: "a finite value > 0",
            value,
        })
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), TuningError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(TuningError::OutOfRange {
            field,
            requirement: "a finite value >= 0",
            value,
        })
    }
}
