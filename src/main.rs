//! Flappy Elements entry point
//!
//! Native builds run a headless session with a simple autopilot and print a
//! summary. The browser build starts from `flappy_elements::web`.

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use std::path::PathBuf;

    use flappy_elements::audio::LogAudio;
    use flappy_elements::sim::{FlapDirection, GameEvent, SimulationState};
    use flappy_elements::{Session, Settings};

    /// Fixed frame step (seconds)
    const FRAME_DT: f32 = 1.0 / 60.0;
    const DEFAULT_SECONDS: f32 = 60.0;
    /// Minimum time between autopilot flaps
    const FLAP_COOLDOWN: f32 = 0.15;
    /// Dead zone around the target height
    const TOLERANCE: f32 = 0.3;

    #[derive(Debug, Default)]
    struct Summary {
        frames: u64,
        transitions: u32,
        collisions: u32,
        flaps: u32,
        best_score: u32,
    }

    /// Height of the next gap ahead of the bird, or the court center
    fn target_height(state: &SimulationState) -> f32 {
        let bird_left = state.bird.pos.x - state.bird.half_extent.x;
        state
            .obstacles
            .iter()
            .find(|o| o.center.x + o.half_extent.x >= bird_left)
            .map_or(0.0, |o| o.center.y)
    }

    fn autopilot(state: &SimulationState) -> Option<FlapDirection> {
        let target = target_height(state);
        let (y, v) = (state.bird.pos.y, state.bird.vel.y);
        if y < target - TOLERANCE && v < 0.5 {
            Some(FlapDirection::Up)
        } else if y > target + TOLERANCE && v > -0.5 {
            Some(FlapDirection::Down)
        } else {
            None
        }
    }

    pub fn run() {
        env_logger::init();

        let mut args = std::env::args().skip(1);
        let settings_path = args.next().map(PathBuf::from);
        let seconds = match args.next().map(|s| s.parse::<f32>()) {
            Some(Ok(s)) if s > 0.0 => s,
            Some(_) => {
                log::warn!("Invalid duration, using {} s", DEFAULT_SECONDS);
                DEFAULT_SECONDS
            }
            None => DEFAULT_SECONDS,
        };

        let settings = Settings::load_or_default(settings_path.as_deref());
        let mut session = Session::new(&settings, LogAudio::default());
        log::info!("Flappy Elements (native) running {} s headless", seconds);

        let mut summary = Summary::default();
        let mut cooldown = 0.0;
        let total_frames = (seconds / FRAME_DT).ceil() as u64;

        for _ in 0..total_frames {
            cooldown -= FRAME_DT;
            if cooldown <= 0.0 {
                if let Some(direction) = autopilot(session.state()) {
                    session.flap(direction);
                    summary.flaps += 1;
                    cooldown = FLAP_COOLDOWN;
                }
            }

            for event in session.update(FRAME_DT) {
                match event {
                    GameEvent::EnvironmentChanged { .. } => summary.transitions += 1,
                    GameEvent::Collided(_) => summary.collisions += 1,
                    _ => {}
                }
            }
            summary.best_score = summary.best_score.max(session.state().score);
            summary.frames += 1;
        }

        let state = session.state();
        println!("Seed:          {}", state.seed);
        println!("Frames:        {}", summary.frames);
        println!("Flaps:         {}", summary.flaps);
        println!("Transitions:   {}", summary.transitions);
        println!("Collisions:    {}", summary.collisions);
        println!("Best score:    {}", summary.best_score);
        println!("Final score:   {}", state.score);
        println!("Environment:   {}", state.environment());
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    headless::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is flappy_elements::web::start, this is just to satisfy the compiler
}
