//! Flappy Elements - a gravity-flipping flappy game
//!
//! Core modules:
//! - `sim`: Simulation core (environment cycle, bird physics, obstacle stream, collisions)
//! - `audio`: Cue model, event-to-cue routing and procedural tone synthesis
//! - `renderer`: CPU-side frame building for the WebGPU renderer
//! - `session`: One play session (state + audio + input)
//! - `settings`: User preferences

pub mod audio;
pub mod renderer;
pub mod session;
pub mod settings;
pub mod sim;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use session::Session;
pub use settings::{Settings, SettingsError};

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Length of one environment cycle (seconds)
    pub const ENVIRONMENT_CYCLE: f32 = 10.0;
    /// Start of the lookahead window in which the next environment is chosen
    pub const WARNING_WINDOW_START: f32 = 8.0;

    /// Court half-size; the origin sits at the court center
    pub const COURT_HALF_EXTENT: Vec2 = Vec2::new(7.0, 5.0);
    /// Vertical limit past which the bird hits the wall.
    /// Tighter than `COURT_HALF_EXTENT.y` on purpose; do not merge the two.
    pub const WALL_LIMIT: f32 = 4.8;

    /// Bird defaults
    pub const BIRD_HALF_EXTENT: Vec2 = Vec2::new(0.2, 0.2);
    pub const BIRD_SPAWN_POS: Vec2 = Vec2::new(-3.5, 0.0);
    pub const BIRD_SPAWN_VEL: Vec2 = Vec2::new(0.0, 1.0);

    /// Magnitude of the constant acceleration in Air, Water and Mud
    pub const ENVIRONMENT_ACCEL: f32 = 3.0;
    /// Vertical velocity change per flap
    pub const FLAP_IMPULSE: f32 = 0.5;

    /// Obstacles scroll left at this many units per second
    pub const SCROLL_SPEED: f32 = 1.0;
    /// New obstacles enter here
    pub const OBSTACLE_SPAWN_X: f32 = 7.0;
    /// Obstacles left of this are retired
    pub const OBSTACLE_RETIRE_X: f32 = -7.0;
    /// Newest obstacle left of this: always spawn
    pub const ALWAYS_SPAWN_X: f32 = 0.0;
    /// Newest obstacle left of this: spawn on a coin flip
    pub const MAYBE_SPAWN_X: f32 = 2.0;
    pub const SPAWN_CHANCE: f64 = 0.5;

    /// Gap center is drawn from [-GAP_CENTER_RANGE, GAP_CENTER_RANGE]
    pub const GAP_CENTER_RANGE: f32 = 5.0;
    /// Obstacle half-width is drawn from this range
    pub const OBSTACLE_HALF_WIDTH_MIN: f32 = 0.2;
    pub const OBSTACLE_HALF_WIDTH_MAX: f32 = 1.2;
    /// Gap half-height is drawn from this range (before clamping to the court)
    pub const GAP_HALF_HEIGHT_MIN: f32 = 0.5;
    pub const GAP_HALF_HEIGHT_MAX: f32 = 2.5;
}
