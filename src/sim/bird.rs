//! The bird and its per-environment force models

use glam::Vec2;

use super::environment::Environment;
use crate::consts::*;

/// Which way a flap pushes the bird
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlapDirection {
    Up,
    Down,
}

impl FlapDirection {
    /// Map a pointer button (DOM `MouseEvent.button` numbering).
    /// Left flaps up, right flaps down, anything else is ignored.
    pub fn from_button(button: i16) -> Option<Self> {
        match button {
            0 => Some(FlapDirection::Up),
            2 => Some(FlapDirection::Down),
            _ => None,
        }
    }

    /// Signed velocity change
    #[inline]
    pub fn impulse(&self) -> f32 {
        match self {
            FlapDirection::Up => FLAP_IMPULSE,
            FlapDirection::Down => -FLAP_IMPULSE,
        }
    }
}

/// The player's bird
#[derive(Debug, Clone, PartialEq)]
pub struct Bird {
    pub pos: Vec2,
    /// Only `vel.y` is integrated; `vel.x` is fixed at spawn
    pub vel: Vec2,
    pub half_extent: Vec2,
}

impl Default for Bird {
    fn default() -> Self {
        Self {
            pos: BIRD_SPAWN_POS,
            vel: BIRD_SPAWN_VEL,
            half_extent: BIRD_HALF_EXTENT,
        }
    }
}

impl Bird {
    /// Back to the spawn pose
    pub fn respawn(&mut self) {
        self.pos = BIRD_SPAWN_POS;
        self.vel = BIRD_SPAWN_VEL;
    }

    /// Apply a flap impulse immediately
    pub fn flap(&mut self, direction: FlapDirection) {
        self.vel.y += direction.impulse();
    }

    /// Advance vertical position and velocity by `dt` under `environment`.
    ///
    /// Position uses the old velocity plus the constant-acceleration term, then
    /// velocity is updated, so the recurrence is exact for piecewise-constant
    /// acceleration.
    pub fn integrate(&mut self, dt: f32, environment: Environment) {
        let v = self.vel.y;
        let acc = match environment {
            Environment::Air => -ENVIRONMENT_ACCEL,
            Environment::Water => ENVIRONMENT_ACCEL,
            Environment::Ice => 0.0,
            // Mud always opposes motion; at rest it pushes up
            Environment::Mud => {
                if v > 0.0 {
                    -ENVIRONMENT_ACCEL
                } else {
                    ENVIRONMENT_ACCEL
                }
            }
        };

        self.pos.y += v * dt + 0.5 * acc * dt * dt;
        self.vel.y = v + acc * dt;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 0.016;

    #[test]
    fn test_button_mapping() {
        assert_eq!(FlapDirection::from_button(0), Some(FlapDirection::Up));
        assert_eq!(FlapDirection::from_button(2), Some(FlapDirection::Down));
        assert_eq!(FlapDirection::from_button(1), None);
        assert_eq!(FlapDirection::from_button(-1), None);
        assert_eq!(FlapDirection::from_button(4), None);
    }

    #[test]
    fn test_flap_impulses() {
        let mut bird = Bird::default();
        bird.flap(FlapDirection::Up);
        assert!((bird.vel.y - 1.5).abs() < 1e-6);
        bird.flap(FlapDirection::Down);
        bird.flap(FlapDirection::Down);
        assert!((bird.vel.y - 0.5).abs() < 1e-6);
        assert_eq!(bird.vel.x, 0.0);
    }

    #[test]
    fn test_air_follows_closed_form() {
        let mut bird = Bird::default();
        let (y0, v0) = (bird.pos.y, bird.vel.y);
        for n in 1..=500 {
            bird.integrate(DT, Environment::Air);
            let t = n as f32 * DT;
            let y = y0 + v0 * t - 0.75 * t * t;
            let v = v0 - 3.0 * t;
            assert!((bird.pos.y - y).abs() < 1e-3 * (1.0 + y.abs()), "step {n}: {} vs {y}", bird.pos.y);
            assert!((bird.vel.y - v).abs() < 1e-3 * (1.0 + v.abs()), "step {n}: {} vs {v}", bird.vel.y);
        }
    }

    #[test]
    fn test_water_pushes_up() {
        let mut bird = Bird {
            vel: Vec2::ZERO,
            ..Default::default()
        };
        bird.integrate(0.5, Environment::Water);
        assert!((bird.pos.y - 0.375).abs() < 1e-6);
        assert!((bird.vel.y - 1.5).abs() < 1e-6);
    }

    #[test]
    fn test_ice_has_no_gravity() {
        let mut bird = Bird::default();
        for _ in 0..100 {
            bird.integrate(DT, Environment::Ice);
        }
        assert!((bird.pos.y - 1.6).abs() < 1e-4);
        assert_eq!(bird.vel.y, 1.0);
    }

    #[test]
    fn test_mud_opposes_motion() {
        let mut up = Bird::default();
        up.integrate(0.1, Environment::Mud);
        assert!((up.vel.y - 0.7).abs() < 1e-6);
        assert!((up.pos.y - 0.085).abs() < 1e-6);

        let mut down = Bird {
            vel: Vec2::new(0.0, -1.0),
            ..Default::default()
        };
        down.integrate(0.1, Environment::Mud);
        assert!((down.vel.y + 0.7).abs() < 1e-6);
        assert!((down.pos.y + 0.085).abs() < 1e-6);

        // At rest mud pushes upward
        let mut rest = Bird {
            vel: Vec2::ZERO,
            ..Default::default()
        };
        rest.integrate(0.1, Environment::Mud);
        assert!(rest.vel.y > 0.0);
    }

    #[test]
    fn test_horizontal_never_moves() {
        let mut bird = Bird::default();
        for env in Environment::ALL {
            bird.integrate(0.25, env);
        }
        assert_eq!(bird.pos.x, BIRD_SPAWN_POS.x);
        assert_eq!(bird.vel.x, 0.0);
    }

    #[test]
    fn test_respawn() {
        let mut bird = Bird {
            pos: Vec2::new(-3.5, 4.0),
            vel: Vec2::new(0.0, -2.0),
            ..Default::default()
        };
        bird.respawn();
        assert_eq!(bird, Bird::default());
    }
}
