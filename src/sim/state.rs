//! Simulation state and side-effect events
//!
//! `SimulationState` is the single mutable aggregate of a play session. It is
//! only mutated by `tick::advance` and by flap input.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::bird::{Bird, FlapDirection};
use super::collision::CollisionKind;
use super::environment::{Environment, EnvironmentClock};
use super::obstacle::ObstacleStream;

/// Side effects requested by the simulation, drained by collaborators
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// Successor environment chosen; play the warning cue
    Warning { next: Environment },
    /// The environment switched; swap the ambient loop
    EnvironmentChanged { from: Environment, to: Environment },
    /// A flap impulse was applied
    Flapped(FlapDirection),
    /// The bird crashed; state has already been reset
    Collided(CollisionKind),
}

/// Complete simulation state for one session
#[derive(Debug, Clone)]
pub struct SimulationState {
    /// Seed the RNG was built from
    pub seed: u64,
    pub bird: Bird,
    pub clock: EnvironmentClock,
    /// Environment switches survived since the last crash
    pub score: u32,
    pub obstacles: ObstacleStream,
    /// Pending side effects (oldest first)
    events: Vec<GameEvent>,
    pub(crate) rng: Pcg32,
}

impl SimulationState {
    /// Fresh session: Air, bird at spawn, no obstacles
    pub fn new(seed: u64) -> Self {
        Self::with_rng(seed, Pcg32::seed_from_u64(seed))
    }

    /// Fresh session driven by a caller-supplied generator
    pub fn with_rng(seed: u64, rng: Pcg32) -> Self {
        Self {
            seed,
            bird: Bird::default(),
            clock: EnvironmentClock::default(),
            score: 0,
            obstacles: ObstacleStream::new(),
            events: Vec::new(),
            rng,
        }
    }

    /// Active environment
    #[inline]
    pub fn environment(&self) -> Environment {
        self.clock.current
    }

    /// Pre-selected successor, if any
    #[inline]
    pub fn next_environment(&self) -> Option<Environment> {
        self.clock.next
    }

    /// Apply a flap impulse right away
    pub fn flap(&mut self, direction: FlapDirection) {
        self.bird.flap(direction);
        self.events.push(GameEvent::Flapped(direction));
    }

    /// Reset bird, obstacles and score together.
    /// The environment and its timer are left untouched.
    pub fn reset_after_collision(&mut self, kind: CollisionKind) {
        self.score = 0;
        self.bird.respawn();
        self.obstacles.clear();
        self.events.push(GameEvent::Collided(kind));
    }

    pub(crate) fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Pending events, without consuming them
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
