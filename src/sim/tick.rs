//! Per-frame simulation step
//!
//! Order matters: the environment clock runs first so the bird is integrated
//! under the environment that is active *after* any switch this frame, then
//! obstacles scroll/retire/spawn, then collisions are resolved.

use super::collision::find_collision;
use super::state::{GameEvent, SimulationState};

/// Advance the simulation by `elapsed` seconds (expected to be `>= 0`).
///
/// Side effects are appended to the state's event log; drain them with
/// [`SimulationState::drain_events`] after the call.
pub fn advance(state: &mut SimulationState, elapsed: f32) {
    // --- Environment scheduler ---
    let step = state.clock.advance(elapsed, &mut state.rng);
    if let Some(next) = step.warned {
        log::debug!("Next environment: {}", next);
        state.push_event(GameEvent::Warning { next });
    }
    if let Some((from, to)) = step.changed {
        state.score = state.score.saturating_add(1);
        log::info!("Environment {} -> {} (score {})", from, to, state.score);
        state.push_event(GameEvent::EnvironmentChanged { from, to });
    }

    // --- Bird ---
    let environment = state.clock.current;
    state.bird.integrate(elapsed, environment);

    // --- Obstacles ---
    state.obstacles.scroll(elapsed);
    let retired = state.obstacles.retire();
    if retired > 0 {
        log::debug!("Retired {} obstacle(s)", retired);
    }
    if let Some(spawned) = state.obstacles.maybe_spawn(&mut state.rng) {
        log::debug!(
            "Spawned obstacle: gap y={:.2} half={:.2}",
            spawned.center.y,
            spawned.half_extent.y
        );
    }

    // --- Collisions ---
    if let Some(kind) = find_collision(&state.bird, &state.obstacles) {
        log::info!("Collision ({:?}) at score {}, resetting", kind, state.score);
        state.reset_after_collision(kind);
    }
}
