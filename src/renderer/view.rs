//! Court-to-clip mapping
//!
//! Fits the court, its walls and the score row into the drawable while
//! keeping units square, and maps pointer positions back into court space.

use glam::{Mat4, UVec2, Vec2, Vec4};

use crate::consts::COURT_HALF_EXTENT;

/// Half-thickness of the walls drawn around the court
pub const WALL_RADIUS: f32 = 0.05;
/// Space between the outside of the walls and the window edge
pub const PADDING: f32 = 0.14;
/// Half-size of one score pip
pub const SCORE_RADIUS: f32 = 0.1;

/// Scale/offset taking court space to clip space for one drawable size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CourtView {
    /// Drawable width / height
    pub aspect: f32,
    /// Clip units per court unit (vertical)
    pub scale: f32,
    /// Court-space point shown at the clip-space origin
    pub center: Vec2,
}

impl CourtView {
    /// Visible court-space area: court, walls, padding and score row
    pub fn scene_bounds() -> (Vec2, Vec2) {
        let court = COURT_HALF_EXTENT;
        let min = Vec2::new(
            -court.x - 2.0 * WALL_RADIUS - PADDING,
            -court.y - 2.0 * WALL_RADIUS - PADDING,
        );
        let max = Vec2::new(
            court.x + 2.0 * WALL_RADIUS + PADDING,
            court.y + 2.0 * WALL_RADIUS + 3.0 * SCORE_RADIUS + PADDING,
        );
        (min, max)
    }

    /// Fit the scene into a drawable of `size` pixels
    pub fn fit(size: UVec2) -> Self {
        let (min, max) = Self::scene_bounds();
        let aspect = size.x.max(1) as f32 / size.y.max(1) as f32;

        // x must fit in [-aspect, aspect], y in [-1, 1]
        let scale = ((2.0 * aspect) / (max.x - min.x)).min(2.0 / (max.y - min.y));

        Self {
            aspect,
            scale,
            center: 0.5 * (min + max),
        }
    }

    /// Matrix taking court coordinates to clip coordinates
    pub fn court_to_clip(&self) -> Mat4 {
        let sx = self.scale / self.aspect;
        Mat4::from_cols(
            Vec4::new(sx, 0.0, 0.0, 0.0),
            Vec4::new(0.0, self.scale, 0.0, 0.0),
            Vec4::new(0.0, 0.0, 1.0, 0.0),
            Vec4::new(-self.center.x * sx, -self.center.y * self.scale, 0.0, 1.0),
        )
    }

    /// Inverse mapping for pointer input
    pub fn clip_to_court(&self, clip: Vec2) -> Vec2 {
        Vec2::new(
            clip.x * self.aspect / self.scale + self.center.x,
            clip.y / self.scale + self.center.y,
        )
    }

    /// Pixel position (origin top-left) to court coordinates
    pub fn pixel_to_court(&self, pixel: Vec2, size: UVec2) -> Vec2 {
        let size = size.max(UVec2::ONE).as_vec2();
        let clip = Vec2::new(
            2.0 * pixel.x / size.x - 1.0,
            1.0 - 2.0 * pixel.y / size.y,
        );
        self.clip_to_court(clip)
    }
}
