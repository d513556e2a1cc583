//! Simulation core
//!
//! All gameplay logic lives here. This module must stay free of I/O:
//! - One `advance(elapsed)` entry point per frame
//! - Seeded RNG owned by the state
//! - Side effects reported as events, never performed
//! - No rendering or platform dependencies

pub mod bird;
pub mod collision;
pub mod environment;
pub mod obstacle;
pub mod state;
pub mod tick;

pub use bird::{Bird, FlapDirection};
pub use collision::{CollisionKind, bird_hits_obstacle, bird_hits_wall, find_collision};
pub use environment::{Environment, EnvironmentClock};
pub use obstacle::{Obstacle, ObstacleStream};
pub use state::{GameEvent, SimulationState};
pub use tick::advance;
