//! Audio cues and routing
//!
//! The simulation only emits events. `AudioDirector` turns them into calls on
//! an `AudioBackend`: one ambient loop per environment plus a handful of
//! one-shots. Backends:
//! - `LogAudio`: logs every cue (native headless runs)
//! - `web::WebAudio`: Web Audio API, everything synthesized (wasm32)

pub mod synth;
#[cfg(target_arch = "wasm32")]
pub mod web;

use crate::settings::Settings;
use crate::sim::{Environment, FlapDirection, GameEvent};

/// Something the audio layer can play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cue {
    /// Looping background track for an environment
    Ambient(Environment),
    /// Next environment has been chosen
    Warning,
    FlapUp,
    FlapDown,
    Death,
}

impl Cue {
    pub fn flap(direction: FlapDirection) -> Self {
        match direction {
            FlapDirection::Up => Cue::FlapUp,
            FlapDirection::Down => Cue::FlapDown,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Cue::Ambient(Environment::Mud) => "ambient-a",
            Cue::Ambient(Environment::Ice) => "ambient-b",
            Cue::Ambient(Environment::Water) => "ambient-c",
            Cue::Ambient(Environment::Air) => "ambient-d",
            Cue::Warning => "warning",
            Cue::FlapUp => "flap-up",
            Cue::FlapDown => "flap-down",
            Cue::Death => "death",
        }
    }
}

/// Identifies a playing cue so it can be stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CueHandle(pub u32);

/// Sink for cues
pub trait AudioBackend {
    /// Start `cue` at `gain` (0.0 - 1.0)
    fn play(&mut self, cue: Cue, gain: f32) -> CueHandle;
    /// Stop a playing cue, fading out over `fade` seconds (0 = immediately)
    fn stop(&mut self, handle: CueHandle, fade: f32);
    /// Change the gain of a playing loop
    fn set_gain(&mut self, handle: CueHandle, gain: f32);
}

/// Logs cues instead of playing them
#[derive(Debug, Default)]
pub struct LogAudio {
    next_handle: u32,
}

impl AudioBackend for LogAudio {
    fn play(&mut self, cue: Cue, gain: f32) -> CueHandle {
        self.next_handle += 1;
        log::debug!("play {} (#{}) gain={:.2}", cue.name(), self.next_handle, gain);
        CueHandle(self.next_handle)
    }

    fn stop(&mut self, handle: CueHandle, fade: f32) {
        log::debug!("stop #{} fade={:.2}s", handle.0, fade);
    }

    fn set_gain(&mut self, handle: CueHandle, gain: f32) {
        log::debug!("gain #{} -> {:.2}", handle.0, gain);
    }
}

/// Routes simulation events to an audio backend
pub struct AudioDirector<B: AudioBackend> {
    backend: B,
    /// Currently playing ambient loop
    ambient: Option<CueHandle>,
    master_volume: f32,
    sfx_volume: f32,
    music_volume: f32,
    muted: bool,
}

impl<B: AudioBackend> AudioDirector<B> {
    pub fn new(backend: B, settings: &Settings) -> Self {
        let mut director = Self {
            backend,
            ambient: None,
            master_volume: 0.0,
            sfx_volume: 0.0,
            music_volume: 0.0,
            muted: false,
        };
        director.apply_settings(settings);
        director
    }

    /// Pick up new volumes. The playing ambient loop follows right away.
    pub fn apply_settings(&mut self, settings: &Settings) {
        let old_music = self.music_gain();
        self.master_volume = settings.master_volume.clamp(0.0, 1.0);
        self.sfx_volume = settings.sfx_volume.clamp(0.0, 1.0);
        self.music_volume = settings.music_volume.clamp(0.0, 1.0);
        self.muted = settings.muted;

        let music = self.music_gain();
        if let Some(handle) = self.ambient {
            if music != old_music {
                self.backend.set_gain(handle, music);
            }
        }
    }

    fn sfx_gain(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    fn music_gain(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.music_volume
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn ambient(&self) -> Option<CueHandle> {
        self.ambient
    }

    /// Start the loop for `environment` if nothing is playing
    pub fn ensure_ambient(&mut self, environment: Environment) {
        if self.ambient.is_none() {
            let gain = self.music_gain();
            self.ambient = Some(self.backend.play(Cue::Ambient(environment), gain));
        }
    }

    fn stop_ambient(&mut self) {
        if let Some(handle) = self.ambient.take() {
            self.backend.stop(handle, 0.0);
        }
    }

    fn play_sfx(&mut self, cue: Cue) {
        let gain = self.sfx_gain();
        if gain <= 0.0 {
            return;
        }
        self.backend.play(cue, gain);
    }

    /// React to one simulation event
    pub fn handle_event(&mut self, event: &GameEvent) {
        match *event {
            GameEvent::Warning { .. } => self.play_sfx(Cue::Warning),
            GameEvent::EnvironmentChanged { to, .. } => {
                self.stop_ambient();
                self.ensure_ambient(to);
            }
            GameEvent::Flapped(direction) => self.play_sfx(Cue::flap(direction)),
            // Ambient restarts on the next frame
            GameEvent::Collided(_) => {
                self.stop_ambient();
                self.play_sfx(Cue::Death);
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::sim::CollisionKind;

    #[derive(Debug, Clone, PartialEq)]
    pub(crate) enum Call {
        Play(Cue, f32, CueHandle),
        Stop(CueHandle),
        Gain(CueHandle, f32),
    }

    /// Records every backend call
    #[derive(Debug, Default)]
    pub(crate) struct RecordingAudio {
        pub(crate) calls: Vec<Call>,
        next_handle: u32,
    }

    impl RecordingAudio {
        pub(crate) fn played(&self) -> Vec<Cue> {
            self.calls
                .iter()
                .filter_map(|c| match c {
                    Call::Play(cue, _, _) => Some(*cue),
                    Call::Stop(_) | Call::Gain(..) => None,
                })
                .collect()
        }
    }

    impl AudioBackend for RecordingAudio {
        fn play(&mut self, cue: Cue, gain: f32) -> CueHandle {
            self.next_handle += 1;
            let handle = CueHandle(self.next_handle);
            self.calls.push(Call::Play(cue, gain, handle));
            handle
        }

        fn stop(&mut self, handle: CueHandle, _fade: f32) {
            self.calls.push(Call::Stop(handle));
        }

        fn set_gain(&mut self, handle: CueHandle, gain: f32) {
            self.calls.push(Call::Gain(handle, gain));
        }
    }

    fn director() -> AudioDirector<RecordingAudio> {
        AudioDirector::new(RecordingAudio::default(), &Settings::default())
    }

    #[test]
    fn test_each_environment_has_its_own_track() {
        let names: std::collections::HashSet<_> = Environment::ALL
            .iter()
            .map(|e| Cue::Ambient(*e).name())
            .collect();
        assert_eq!(names.len(), 4);
        assert_eq!(Cue::Ambient(Environment::Mud).name(), "ambient-a");
        assert_eq!(Cue::Ambient(Environment::Air).name(), "ambient-d");
    }

    #[test]
    fn test_ambient_started_once() {
        let mut director = director();
        director.ensure_ambient(Environment::Air);
        director.ensure_ambient(Environment::Air);
        assert_eq!(director.backend().played(), vec![Cue::Ambient(Environment::Air)]);
    }

    #[test]
    fn test_environment_change_swaps_loop() {
        let mut director = director();
        director.ensure_ambient(Environment::Air);
        let first = director.ambient().unwrap();
        director.handle_event(&GameEvent::EnvironmentChanged {
            from: Environment::Air,
            to: Environment::Ice,
        });
        let calls = &director.backend().calls;
        assert_eq!(calls[1], Call::Stop(first));
        assert!(matches!(calls[2], Call::Play(Cue::Ambient(Environment::Ice), _, _)));
        assert_ne!(director.ambient(), Some(first));
    }

    #[test]
    fn test_collision_stops_loop_and_plays_death() {
        let mut director = director();
        director.ensure_ambient(Environment::Water);
        director.handle_event(&GameEvent::Collided(CollisionKind::Wall));
        assert_eq!(director.ambient(), None);
        assert_eq!(
            director.backend().played(),
            vec![Cue::Ambient(Environment::Water), Cue::Death]
        );
    }

    #[test]
    fn test_gains_follow_settings() {
        let settings = Settings {
            master_volume: 0.5,
            sfx_volume: 0.5,
            music_volume: 1.0,
            ..Default::default()
        };
        let mut director = AudioDirector::new(RecordingAudio::default(), &settings);
        director.ensure_ambient(Environment::Air);
        director.handle_event(&GameEvent::Flapped(FlapDirection::Up));
        let calls = &director.backend().calls;
        assert!(matches!(calls[0], Call::Play(_, g, _) if (g - 0.5).abs() < 1e-6));
        assert!(matches!(calls[1], Call::Play(Cue::FlapUp, g, _) if (g - 0.25).abs() < 1e-6));
    }

    #[test]
    fn test_mute_silences_playing_loop() {
        let mut director = director();
        director.ensure_ambient(Environment::Air);
        let handle = director.ambient().unwrap();

        let muted = Settings {
            muted: true,
            ..Default::default()
        };
        director.apply_settings(&muted);
        assert_eq!(director.backend().calls.last(), Some(&Call::Gain(handle, 0.0)));
        assert_eq!(director.ambient(), Some(handle));

        director.apply_settings(&Settings::default());
        let expected = 0.8 * 0.7;
        assert!(matches!(
            director.backend().calls.last(),
            Some(Call::Gain(h, g)) if *h == handle && (g - expected).abs() < 1e-6
        ));
    }

    #[test]
    fn test_unchanged_music_gain_leaves_loop_alone() {
        let mut director = director();
        director.ensure_ambient(Environment::Ice);
        let sfx_only = Settings {
            sfx_volume: 0.2,
            ..Default::default()
        };
        director.apply_settings(&sfx_only);
        assert_eq!(director.backend().calls.len(), 1);
    }

    #[test]
    fn test_settings_without_loop_touch_nothing() {
        let mut director = director();
        director.apply_settings(&Settings {
            music_volume: 0.1,
            ..Default::default()
        });
        assert!(director.backend().calls.is_empty());
    }

    #[test]
    fn test_muted_skips_one_shots() {
        let settings = Settings {
            muted: true,
            ..Default::default()
        };
        let mut director = AudioDirector::new(RecordingAudio::default(), &settings);
        director.handle_event(&GameEvent::Warning {
            next: Environment::Mud,
        });
        director.handle_event(&GameEvent::Flapped(FlapDirection::Down));
        assert!(director.backend().calls.is_empty());
    }
}
