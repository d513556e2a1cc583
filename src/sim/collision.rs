//! Collision detection between the bird, the obstacle bars and the walls
//!
//! Everything is axis-aligned: the bird is a box, each obstacle is two bars
//! with a gap between them, and the walls are a hard vertical limit.

use super::bird::Bird;
use super::obstacle::{Obstacle, ObstacleStream};
use crate::consts::WALL_LIMIT;

/// What the bird ran into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionKind {
    /// Index into the obstacle stream (front-to-back)
    Obstacle { index: usize },
    Wall,
}

/// Strict overlap of the bird's and the obstacle's x-spans
#[inline]
pub fn overlaps_x(bird: &Bird, obstacle: &Obstacle) -> bool {
    bird.pos.x + bird.half_extent.x > obstacle.center.x - obstacle.half_extent.x
        && bird.pos.x - bird.half_extent.x < obstacle.center.x + obstacle.half_extent.x
}

/// The bird hits an obstacle when it is level with it and its center is not
/// strictly inside the gap. Touching a gap edge counts as a hit.
pub fn bird_hits_obstacle(bird: &Bird, obstacle: &Obstacle) -> bool {
    overlaps_x(bird, obstacle)
        && (bird.pos.y >= obstacle.gap_top() || bird.pos.y <= obstacle.gap_bottom())
}

/// The bird's center is past the wall limit
#[inline]
pub fn bird_hits_wall(bird: &Bird) -> bool {
    bird.pos.y.abs() > WALL_LIMIT
}

/// First collision, scanning obstacles front-to-back before the walls
pub fn find_collision(bird: &Bird, obstacles: &ObstacleStream) -> Option<CollisionKind> {
    if let Some(index) = obstacles.iter().position(|o| bird_hits_obstacle(bird, o)) {
        return Some(CollisionKind::Obstacle { index });
    }
    if bird_hits_wall(bird) {
        return Some(CollisionKind::Wall);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use proptest::prelude::*;

    fn bird_at(x: f32, y: f32) -> Bird {
        Bird {
            pos: Vec2::new(x, y),
            ..Default::default()
        }
    }

    fn gap(x: f32, y: f32, half_w: f32, half_h: f32) -> Obstacle {
        Obstacle::new(Vec2::new(x, y), Vec2::new(half_w, half_h))
    }

    #[test]
    fn test_inside_gap_is_safe() {
        let bird = bird_at(0.0, 0.0);
        assert!(!bird_hits_obstacle(&bird, &gap(0.0, 0.5, 0.5, 1.0)));
    }

    #[test]
    fn test_above_and_below_gap_hit() {
        let obstacle = gap(0.0, 3.0, 0.5, 1.0);
        assert!(bird_hits_obstacle(&bird_at(0.0, 0.0), &obstacle));
        assert!(bird_hits_obstacle(&bird_at(0.0, 4.5), &obstacle));
    }

    #[test]
    fn test_gap_edge_counts_as_hit() {
        let obstacle = gap(0.0, 0.0, 0.5, 1.0);
        assert!(bird_hits_obstacle(&bird_at(0.0, 1.0), &obstacle));
        assert!(bird_hits_obstacle(&bird_at(0.0, -1.0), &obstacle));
    }

    #[test]
    fn test_no_hit_without_x_overlap() {
        let obstacle = gap(2.0, 3.0, 0.5, 1.0);
        // Bird spans [-0.2, 0.2], obstacle spans [1.5, 2.5]
        assert!(!bird_hits_obstacle(&bird_at(0.0, 0.0), &obstacle));
        // Touching edges do not overlap: bird spans [1.0, 1.5]
        let mut bird = bird_at(1.25, 0.0);
        bird.half_extent = Vec2::splat(0.25);
        assert!(!bird_hits_obstacle(&bird, &obstacle));
        bird.pos.x = 1.375;
        assert!(bird_hits_obstacle(&bird, &obstacle));
    }

    #[test]
    fn test_wall_limit() {
        assert!(!bird_hits_wall(&bird_at(-3.5, 4.8)));
        assert!(!bird_hits_wall(&bird_at(-3.5, -4.8)));
        assert!(bird_hits_wall(&bird_at(-3.5, 4.81)));
        assert!(bird_hits_wall(&bird_at(-3.5, -4.9)));
    }

    #[test]
    fn test_find_collision_reports_first_obstacle() {
        let mut stream = ObstacleStream::new();
        stream.push(gap(-5.0, 0.0, 0.5, 1.0));
        stream.push(gap(0.0, 3.0, 0.5, 1.0));
        stream.push(gap(0.1, 3.0, 0.5, 1.0));
        let bird = bird_at(0.0, 0.0);
        assert_eq!(
            find_collision(&bird, &stream),
            Some(CollisionKind::Obstacle { index: 1 })
        );
    }

    #[test]
    fn test_find_collision_wall_without_obstacles() {
        let stream = ObstacleStream::new();
        assert_eq!(
            find_collision(&bird_at(-3.5, 4.9), &stream),
            Some(CollisionKind::Wall)
        );
        assert_eq!(find_collision(&bird_at(-3.5, 0.0), &stream), None);
    }

    proptest! {
        #[test]
        fn prop_obstacle_hit_matches_definition(
            bx in -7.0f32..7.0, by in -5.0f32..5.0,
            ox in -7.0f32..7.0, oy in -5.0f32..5.0,
            hw in 0.2f32..1.2, hh in 0.0f32..2.5,
        ) {
            let bird = bird_at(bx, by);
            let obstacle = gap(ox, oy, hw, hh);
            let x_overlap = (bx - ox).abs() < bird.half_extent.x + hw;
            let in_gap = by > oy - hh && by < oy + hh;
            // Avoid float ties at the exact overlap boundary
            prop_assume!(((bx - ox).abs() - (bird.half_extent.x + hw)).abs() > 1e-4);
            prop_assert_eq!(bird_hits_obstacle(&bird, &obstacle), x_overlap && !in_gap);
        }

        #[test]
        fn prop_wall_hit_ignores_obstacles(y in -6.0f32..6.0) {
            let bird = bird_at(-3.5, y);
            let mut stream = ObstacleStream::new();
            stream.push(gap(6.0, 0.0, 0.5, 1.0));
            let hit = find_collision(&bird, &stream);
            prop_assert_eq!(hit == Some(CollisionKind::Wall), y.abs() > WALL_LIMIT);
        }
    }
}
