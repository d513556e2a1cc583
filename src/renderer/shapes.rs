//! Shape generation for 2D primitives

use glam::Vec2;

use super::vertex::Vertex;
use crate::sim::Obstacle;

/// Axis-aligned rectangle as two CCW triangles
pub fn rectangle(vertices: &mut Vec<Vertex>, center: Vec2, half: Vec2, color: [f32; 4]) {
    let (min, max) = (center - half, center + half);

    vertices.push(Vertex::new(min.x, min.y, color));
    vertices.push(Vertex::new(max.x, min.y, color));
    vertices.push(Vertex::new(max.x, max.y, color));

    vertices.push(Vertex::new(min.x, min.y, color));
    vertices.push(Vertex::new(max.x, max.y, color));
    vertices.push(Vertex::new(min.x, max.y, color));
}

/// Arrow pointing right: two triangles sharing the nose and the center
pub fn bird(vertices: &mut Vec<Vertex>, center: Vec2, half: Vec2, color: [f32; 4]) {
    let nose = Vec2::new(center.x + half.x, center.y);

    vertices.push(Vertex::new(center.x - half.x, center.y - half.y, color));
    vertices.push(Vertex::new(nose.x, nose.y, color));
    vertices.push(Vertex::new(center.x, center.y, color));

    vertices.push(Vertex::new(center.x - half.x, center.y + half.y, color));
    vertices.push(Vertex::new(nose.x, nose.y, color));
    vertices.push(Vertex::new(center.x, center.y, color));
}

/// Top and bottom bars of an obstacle as `(center, half)` rectangles,
/// filling the court above and below the gap
pub fn obstacle_bars(obstacle: &Obstacle, court_half_y: f32) -> [(Vec2, Vec2); 2] {
    let half_width = obstacle.half_extent.x;
    let x = obstacle.center.x;

    let upper_half = (court_half_y - obstacle.gap_top()) / 2.0;
    let lower_half = (obstacle.gap_bottom() + court_half_y) / 2.0;

    [
        (
            Vec2::new(x, court_half_y - upper_half),
            Vec2::new(half_width, upper_half),
        ),
        (
            Vec2::new(x, -court_half_y + lower_half),
            Vec2::new(half_width, lower_half),
        ),
    ]
}
