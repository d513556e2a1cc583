//! Scrolling gap obstacles
//!
//! Each obstacle is a pair of solid bars (top and bottom) separated by a safe
//! gap. It is stored as the gap's center and half-extents; the bars are
//! whatever lies between the gap and the court edge.

use std::collections::VecDeque;

use glam::Vec2;
use rand::Rng;

use crate::consts::*;

/// A gap obstacle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obstacle {
    /// Gap center (x is the obstacle's horizontal center)
    pub center: Vec2,
    /// `x`: bar half-width, `y`: gap half-height
    pub half_extent: Vec2,
}

impl Obstacle {
    pub fn new(center: Vec2, half_extent: Vec2) -> Self {
        Self {
            center,
            half_extent,
        }
    }

    /// Upper edge of the gap
    #[inline]
    pub fn gap_top(&self) -> f32 {
        self.center.y + self.half_extent.y
    }

    /// Lower edge of the gap
    #[inline]
    pub fn gap_bottom(&self) -> f32 {
        self.center.y - self.half_extent.y
    }

    /// Shrink the gap so it stays inside `[-court_half_y, court_half_y]`,
    /// recomputing center and half-height from the clamped band.
    pub fn clamp_to_court(mut self, court_half_y: f32) -> Self {
        let upper = self.gap_top().min(court_half_y);
        let lower = self.gap_bottom().max(-court_half_y);
        self.center.y = (lower + upper) / 2.0;
        self.half_extent.y = (upper - lower) / 2.0;
        self
    }

    /// Random obstacle at the spawn line, already clamped to the court
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let center_y = rng.random_range(-GAP_CENTER_RANGE..=GAP_CENTER_RANGE);
        let half_width = rng.random_range(OBSTACLE_HALF_WIDTH_MIN..=OBSTACLE_HALF_WIDTH_MAX);
        let half_gap = rng.random_range(GAP_HALF_HEIGHT_MIN..=GAP_HALF_HEIGHT_MAX);
        Self::new(
            Vec2::new(OBSTACLE_SPAWN_X, center_y),
            Vec2::new(half_width, half_gap),
        )
        .clamp_to_court(COURT_HALF_EXTENT.y)
    }
}

/// Obstacles ordered by ascending x; oldest (leftmost) at the front.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObstacleStream {
    obstacles: VecDeque<Obstacle>,
}

impl ObstacleStream {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    /// Front-to-back (left-to-right)
    pub fn iter(&self) -> impl Iterator<Item = &Obstacle> {
        self.obstacles.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Obstacle> {
        self.obstacles.get(index)
    }

    /// Most recently spawned (rightmost) obstacle
    pub fn newest(&self) -> Option<&Obstacle> {
        self.obstacles.back()
    }

    /// Append an obstacle at the right end.
    ///
    /// Callers must keep the stream sorted: `obstacle` may not lie left of the
    /// current newest one.
    pub fn push(&mut self, obstacle: Obstacle) {
        debug_assert!(
            self.newest()
                .is_none_or(|newest| newest.center.x <= obstacle.center.x),
            "obstacle stream must stay sorted by x"
        );
        self.obstacles.push_back(obstacle);
    }

    pub fn clear(&mut self) {
        self.obstacles.clear();
    }

    /// Move every obstacle left by `SCROLL_SPEED * dt`
    pub fn scroll(&mut self, dt: f32) {
        for obstacle in &mut self.obstacles {
            obstacle.center.x -= SCROLL_SPEED * dt;
        }
    }

    /// Drop obstacles that left the court. Returns how many were removed.
    pub fn retire(&mut self) -> usize {
        let mut retired = 0;
        while self
            .obstacles
            .front()
            .is_some_and(|o| o.center.x < OBSTACLE_RETIRE_X)
        {
            self.obstacles.pop_front();
            retired += 1;
        }
        retired
    }

    /// Decide whether a candidate may enter this frame.
    ///
    /// Always spawn into an empty stream or once the newest obstacle crossed
    /// the court center; flip a coin while it is still short of `MAYBE_SPAWN_X`.
    fn should_spawn<R: Rng + ?Sized>(&self, rng: &mut R) -> bool {
        match self.newest() {
            None => true,
            Some(newest) if newest.center.x < ALWAYS_SPAWN_X => true,
            Some(newest) if newest.center.x < MAYBE_SPAWN_X => rng.random_bool(SPAWN_CHANCE),
            Some(_) => false,
        }
    }

    /// Roll a candidate and append it if the spawn policy allows.
    /// Returns the spawned obstacle.
    pub fn maybe_spawn<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Obstacle> {
        let candidate = Obstacle::random(rng);
        if self.should_spawn(rng) {
            self.push(candidate);
            Some(candidate)
        } else {
            None
        }
    }
}
