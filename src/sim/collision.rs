//! Axis-aligned bounding volume collision between the player and obstacles
//!
//! Detection only. The loop decides what a hit means.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::state::{Obstacle, Player};

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn from_center(center: Vec3, half_extents: Vec3) -> Self {
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    /// Box standing on `base`: y extends upward by the full height, x/z are centered
    pub fn from_base(base: Vec3, half_extents: Vec3) -> Self {
        let center = base + Vec3::new(0.0, half_extents.y, 0.0);
        Self::from_center(center, half_extents)
    }

    /// Overlap on all three axes. Touching faces count as a hit.
    #[inline]
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.cmple(other.max).all() && other.min.cmple(self.max).all()
    }
}

impl Player {
    pub fn bounds(&self, half_extents: Vec3) -> Aabb {
        Aabb::from_base(self.pos, half_extents)
    }
}

impl Obstacle {
    pub fn bounds(&self, half_extents: Vec3) -> Aabb {
        Aabb::from_center(self.pos, half_extents)
    }
}

/// Player and obstacle extents used for every check
#[derive(Debug, Clone, Copy)]
pub struct CollisionShapes {
    pub player: Vec3,
    pub obstacle: Vec3,
}

/// Index of the first obstacle hitting the player, if any.
///
/// Stops at the first hit, since a single hit ends the session.
pub fn first_hit(
    player: &Player,
    obstacles: &[Obstacle],
    shapes: CollisionShapes,
) -> Option<usize> {
    let player_box = player.bounds(shapes.player);
    obstacles
        .iter()
        .position(|o| player_box.intersects(&o.bounds(shapes.obstacle)))
}

/// Indices of every obstacle overlapping the player (diagnostics)
pub fn all_hits(player: &Player, obstacles: &[Obstacle], shapes: CollisionShapes) -> Vec<usize> {
    let player_box = player.bounds(shapes.player);
    obstacles
        .iter()
        .enumerate()
        .filter(|(_, o)| player_box.intersects(&o.bounds(shapes.obstacle)))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::Tuning;

    fn default_shapes() -> CollisionShapes {
        let t = Tuning::default();
        CollisionShapes {
            player: t.player_half_extents,
            obstacle: t.obstacle_half_extents,
        }
    }

    fn player_at(pos: Vec3) -> Player {
        Player {
            pos,
            jump_speed: 0.0,
            grounded: true,
        }
    }

    fn obstacle_at(id: u32, pos: Vec3) -> Obstacle {
        Obstacle { id, pos }
    }

    #[test]
    fn test_aabb_overlap_requires_all_axes() {
        let a = Aabb::from_center(Vec3::ZERO, Vec3::ONE);
        assert!(a.intersects(&Aabb::from_center(Vec3::new(1.5, 0.5, -0.5), Vec3::ONE)));
        // Touching faces
        assert!(a.intersects(&Aabb::from_center(Vec3::new(2.0, 0.0, 0.0), Vec3::ONE)));
        // Separated on z only
        assert!(!a.intersects(&Aabb::from_center(Vec3::new(0.0, 0.0, 2.5), Vec3::ONE)));
    }

    #[test]
    fn test_matching_extents_scenario() {
        // Player at (0, 0.1, 0), obstacle at (5, 0.1, 0), both 6 units deep
        let shapes = CollisionShapes {
            player: Vec3::new(3.0, 1.0, 1.0),
            obstacle: Vec3::new(3.0, 1.0, 1.0),
        };
        let player = player_at(Vec3::new(0.0, 0.1, 0.0));
        let obstacles = [obstacle_at(0, Vec3::new(5.0, 0.1, 0.0))];

        assert_eq!(first_hit(&player, &obstacles, shapes), Some(0));
    }

    #[test]
    fn test_low_obstacle_hits_grounded_player() {
        let player = player_at(Vec3::new(0.0, 0.1, 0.0));
        let obstacles = [obstacle_at(0, Vec3::new(0.3, 0.0, 0.0))];
        assert_eq!(first_hit(&player, &obstacles, default_shapes()), Some(0));
    }

    #[test]
    fn test_high_obstacle_clears_grounded_player() {
        let player = player_at(Vec3::new(0.0, 0.1, 0.0));
        let obstacles = [obstacle_at(0, Vec3::new(0.0, 3.0, 0.0))];
        assert_eq!(first_hit(&player, &obstacles, default_shapes()), None);
    }

    #[test]
    fn test_other_lane_misses() {
        let player = player_at(Vec3::new(0.0, 0.1, 0.0));
        let obstacles = [obstacle_at(0, Vec3::new(0.0, 0.0, 3.0))];
        assert_eq!(first_hit(&player, &obstacles, default_shapes()), None);
    }

    #[test]
    fn test_all_hits_reports_every_overlap() {
        let player = player_at(Vec3::new(0.0, 0.1, 0.0));
        let obstacles = [
            obstacle_at(0, Vec3::new(30.0, 0.0, 0.0)),
            obstacle_at(1, Vec3::new(0.2, 0.0, 0.0)),
            obstacle_at(2, Vec3::new(-0.2, 0.0, 0.0)),
            obstacle_at(3, Vec3::new(0.0, 0.0, -3.0)),
        ];
        let shapes = default_shapes();

        assert_eq!(first_hit(&player, &obstacles, shapes), Some(1));
        assert_eq!(all_hits(&player, &obstacles, shapes), vec![1, 2]);
    }
}
