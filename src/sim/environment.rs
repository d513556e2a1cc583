//! Environment cycle
//!
//! The active environment decides which force model drives the bird. Every
//! `ENVIRONMENT_CYCLE` seconds it is replaced by a successor that was picked
//! (and announced) during the last two seconds of the cycle.

use rand::Rng;

use crate::consts::{ENVIRONMENT_CYCLE, WARNING_WINDOW_START};

/// Physics/audio/visual mode of the court
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Environment {
    Mud,
    Ice,
    Water,
    #[default]
    Air,
}

impl Environment {
    pub const ALL: [Environment; 4] = [
        Environment::Mud,
        Environment::Ice,
        Environment::Water,
        Environment::Air,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Mud => "mud",
            Environment::Ice => "ice",
            Environment::Water => "water",
            Environment::Air => "air",
        }
    }

    /// Uniform draw over all four environments
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What happened to the clock during one `advance`
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ClockStep {
    /// Successor chosen this step (warning cue)
    pub warned: Option<Environment>,
    /// `(from, to)` when the environment switched this step
    pub changed: Option<(Environment, Environment)>,
}

/// Timer plus active/next environment
#[derive(Debug, Clone, PartialEq)]
pub struct EnvironmentClock {
    /// Active force model
    pub current: Environment,
    /// Pre-selected successor, `None` until the warning window
    pub next: Option<Environment>,
    /// Seconds since the last switch
    pub elapsed: f32,
}

impl Default for EnvironmentClock {
    fn default() -> Self {
        Self {
            current: Environment::Air,
            next: None,
            elapsed: 0.0,
        }
    }
}

impl EnvironmentClock {
    /// True while the successor may be drawn
    #[inline]
    pub fn in_warning_window(&self) -> bool {
        self.elapsed > WARNING_WINDOW_START && self.elapsed < ENVIRONMENT_CYCLE
    }

    /// Advance the cycle timer.
    ///
    /// At most one switch happens per call, even if `elapsed` spans several
    /// cycles. The overshoot past the cycle end is carried into the new cycle
    /// unless it would itself exceed a full cycle, in which case the timer
    /// restarts at zero.
    pub fn advance<R: Rng + ?Sized>(&mut self, elapsed: f32, rng: &mut R) -> ClockStep {
        let mut step = ClockStep::default();
        self.elapsed += elapsed;

        if self.in_warning_window() && self.next.is_none() {
            let next = Environment::random(rng);
            self.next = Some(next);
            step.warned = Some(next);
        }

        if self.elapsed > ENVIRONMENT_CYCLE {
            // The whole warning window was skipped in one call; pick silently.
            let to = match self.next.take() {
                Some(next) => next,
                None => Environment::random(rng),
            };
            let from = self.current;
            self.current = to;

            let overshoot = self.elapsed - ENVIRONMENT_CYCLE;
            self.elapsed = if overshoot < ENVIRONMENT_CYCLE {
                overshoot
            } else {
                0.0
            };
            step.changed = Some((from, to));
        }

        step
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_starts_in_air() {
        let clock = EnvironmentClock::default();
        assert_eq!(clock.current, Environment::Air);
        assert_eq!(clock.next, None);
        assert_eq!(clock.elapsed, 0.0);
    }

    #[test]
    fn test_no_selection_before_window() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut clock = EnvironmentClock::default();
        let step = clock.advance(7.9, &mut rng);
        assert_eq!(step, ClockStep::default());
        assert_eq!(clock.next, None);
    }

    #[test]
    fn test_selects_once_inside_window() {
        let mut rng = Pcg32::seed_from_u64(2);
        let mut clock = EnvironmentClock {
            elapsed: 8.0,
            ..Default::default()
        };

        // Exactly 8.0 is outside the open window
        let step = clock.advance(0.0, &mut rng);
        assert!(step.warned.is_none());

        let step = clock.advance(0.1, &mut rng);
        let chosen = step.warned.expect("successor chosen inside window");
        assert_eq!(clock.next, Some(chosen));

        // Further steps inside the window do not redraw
        for _ in 0..10 {
            let step = clock.advance(0.1, &mut rng);
            assert!(step.warned.is_none());
            assert!(step.changed.is_none());
            assert_eq!(clock.next, Some(chosen));
        }
    }

    #[test]
    fn test_switch_uses_preselected_successor() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut clock = EnvironmentClock {
            current: Environment::Air,
            next: Some(Environment::Mud),
            elapsed: 9.5,
        };
        let step = clock.advance(0.6, &mut rng);
        assert_eq!(step.changed, Some((Environment::Air, Environment::Mud)));
        assert_eq!(clock.current, Environment::Mud);
        assert_eq!(clock.next, None);
        assert!((clock.elapsed - 0.1).abs() < 1e-5);
    }

    #[test]
    fn test_exactly_ten_does_not_switch() {
        let mut rng = Pcg32::seed_from_u64(4);
        let mut clock = EnvironmentClock {
            next: Some(Environment::Ice),
            elapsed: 9.0,
            ..Default::default()
        };
        let step = clock.advance(1.0, &mut rng);
        assert!(step.changed.is_none());
        assert_eq!(clock.current, Environment::Air);
    }

    #[test]
    fn test_skipped_window_still_switches() {
        let mut rng = Pcg32::seed_from_u64(5);
        let mut clock = EnvironmentClock {
            elapsed: 7.5,
            ..Default::default()
        };
        let step = clock.advance(3.0, &mut rng);
        assert!(step.warned.is_none());
        let (from, to) = step.changed.expect("switch after skipping the window");
        assert_eq!(from, Environment::Air);
        assert_eq!(clock.current, to);
        assert_eq!(clock.next, None);
        assert!((clock.elapsed - 0.5).abs() < 1e-5);
    }

    #[test]
    fn test_huge_step_switches_once_and_restarts_timer() {
        let mut rng = Pcg32::seed_from_u64(6);
        let mut clock = EnvironmentClock::default();
        let step = clock.advance(35.0, &mut rng);
        assert!(step.changed.is_some());
        assert_eq!(clock.elapsed, 0.0);
    }

    #[test]
    fn test_random_covers_all_environments() {
        let mut rng = Pcg32::seed_from_u64(7);
        let mut seen = [false; 4];
        for _ in 0..200 {
            let env = Environment::random(&mut rng);
            let idx = Environment::ALL.iter().position(|e| *e == env).unwrap();
            seen[idx] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }
}
