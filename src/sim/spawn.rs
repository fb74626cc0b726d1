//! Obstacle placement and recycling
//!
//! The pool never grows: obstacles that scroll past the player are re-placed
//! ahead of it. Each obstacle decides recycling from its own position only.

use glam::Vec3;
use rand::Rng;

use super::state::Obstacle;
use crate::tuning::Tuning;

/// Draw a fresh placement ahead of `player_x`.
///
/// Distance, lane and height are drawn independently.
pub fn pick_placement<R: Rng>(rng: &mut R, tuning: &Tuning, player_x: f32) -> Vec3 {
    let distance = tuning.spawn_distances.pick(rng);
    let lane = tuning.lanes.pick(rng);
    let height = tuning.obstacle_heights.pick(rng);
    Vec3::new(player_x + distance, height, lane)
}

impl Obstacle {
    #[inline]
    pub fn place(&mut self, pos: Vec3) {
        self.pos = pos;
    }

    /// Move toward the player
    #[inline]
    pub fn advance(&mut self, speed: f32) {
        self.pos.x -= speed;
    }

    /// True once this obstacle is `margin` or more behind the player
    #[inline]
    pub fn should_recycle(&self, player_x: f32, margin: f32) -> bool {
        self.pos.x <= player_x - margin
    }
}

/// Advance every obstacle and re-place those that fell behind.
///
/// Returns the id and new position of each recycled obstacle.
pub fn advance_obstacles<R: Rng>(
    obstacles: &mut [Obstacle],
    rng: &mut R,
    tuning: &Tuning,
    player_x: f32,
    speed: f32,
) -> Vec<(u32, Vec3)> {
    let mut recycled = Vec::new();
    for obstacle in obstacles.iter_mut() {
        obstacle.advance(speed);
        if obstacle.should_recycle(player_x, tuning.recycle_margin) {
            obstacle.place(pick_placement(rng, tuning, player_x));
            log::debug!("Recycled obstacle {} to {:?}", obstacle.id, obstacle.pos);
            recycled.push((obstacle.id, obstacle.pos));
        }
    }
    recycled
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn obstacle(id: u32, x: f32) -> Obstacle {
        Obstacle {
            id,
            pos: Vec3::new(x, 0.0, 0.0),
        }
    }

    #[test]
    fn test_placement_uses_fixed_sets() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(3);

        for _ in 0..200 {
            let p = pick_placement(&mut rng, &tuning, 5.0);
            assert!([35.0, 45.0, 55.0].contains(&p.x));
            assert!([-3.0, 0.0, 3.0].contains(&p.z));
            assert!([0.0, 3.0].contains(&p.y));
        }
    }

    #[test]
    fn test_recycle_condition_is_inclusive() {
        assert!(obstacle(0, -10.0).should_recycle(0.0, 10.0));
        assert!(!obstacle(0, -9.99).should_recycle(0.0, 10.0));
    }

    #[test]
    fn test_each_obstacle_recycles_on_its_own_position() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(11);
        // Only the middle obstacle is past the margin
        let mut pool = vec![obstacle(0, 20.0), obstacle(1, -9.95), obstacle(2, 5.0)];

        let recycled = advance_obstacles(&mut pool, &mut rng, &tuning, 0.0, 0.1);

        assert_eq!(recycled, vec![(1, pool[1].pos)]);
        assert!((pool[0].pos.x - 19.9).abs() < 1e-5);
        assert!(tuning.spawn_distances.contains(&pool[1].pos.x));
        assert!((pool[2].pos.x - 4.9).abs() < 1e-5);
    }

    proptest! {
        #[test]
        fn prop_recycled_obstacle_lands_ahead(
            seed in any::<u64>(),
            x in -500.0f32..-10.0,
            speed in 0.0f32..2.0,
        ) {
            let tuning = Tuning::default();
            let mut rng = Pcg32::seed_from_u64(seed);
            let mut pool = vec![obstacle(0, x)];

            let recycled = advance_obstacles(&mut pool, &mut rng, &tuning, 0.0, speed);

            let p = pool[0].pos;
            prop_assert_eq!(recycled, vec![(0, p)]);
            prop_assert!(tuning.spawn_distances.contains(&p.x));
            prop_assert!(tuning.lanes.contains(&p.z));
            prop_assert!(tuning.obstacle_heights.contains(&p.y));
        }
    }
}
