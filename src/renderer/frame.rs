//! Per-frame vertex list built from a simulation snapshot

use glam::{Mat4, Vec2};

use super::shapes;
use super::vertex::{Vertex, colors};
use super::view::{CourtView, SCORE_RADIUS, WALL_RADIUS};
use crate::consts::COURT_HALF_EXTENT;
use crate::sim::SimulationState;

/// Everything the GPU side needs to draw one frame
#[derive(Debug, Clone)]
pub struct Frame {
    /// Triangle list in court coordinates
    pub vertices: Vec<Vertex>,
    /// Environment background tint
    pub clear_color: [f32; 4],
    /// Uniform for the vertex shader
    pub court_to_clip: Mat4,
}

/// Build the triangle list for `state`
pub fn build_frame(state: &SimulationState, view: &CourtView) -> Frame {
    let court = COURT_HALF_EXTENT;
    let fg = colors::FOREGROUND;
    let mut vertices =
        Vec::with_capacity(6 * (2 * state.obstacles.len() + 1 + 4 + state.score as usize));

    // Obstacle bars
    for obstacle in state.obstacles.iter() {
        for (center, half) in shapes::obstacle_bars(obstacle, court.y) {
            shapes::rectangle(&mut vertices, center, half, fg);
        }
    }

    shapes::bird(&mut vertices, state.bird.pos, state.bird.half_extent, fg);

    // Walls
    let side_half = Vec2::new(WALL_RADIUS, court.y + 2.0 * WALL_RADIUS);
    let floor_half = Vec2::new(court.x, WALL_RADIUS);
    shapes::rectangle(&mut vertices, Vec2::new(-court.x - WALL_RADIUS, 0.0), side_half, fg);
    shapes::rectangle(&mut vertices, Vec2::new(court.x + WALL_RADIUS, 0.0), side_half, fg);
    shapes::rectangle(&mut vertices, Vec2::new(0.0, -court.y - WALL_RADIUS), floor_half, fg);
    shapes::rectangle(&mut vertices, Vec2::new(0.0, court.y + WALL_RADIUS), floor_half, fg);

    // One pip per point along the top-left
    let pip_half = Vec2::splat(SCORE_RADIUS);
    let pip_y = court.y + 2.0 * WALL_RADIUS + 2.0 * SCORE_RADIUS;
    for i in 0..state.score {
        let x = -court.x + (2.0 + 3.0 * i as f32) * SCORE_RADIUS;
        shapes::rectangle(&mut vertices, Vec2::new(x, pip_y), pip_half, fg);
    }

    Frame {
        vertices,
        clear_color: colors::background(state.environment()),
        court_to_clip: view.court_to_clip(),
    }
}
