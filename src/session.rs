//! One play session: simulation state, audio routing and input
//!
//! The platform layer owns a `Session` and calls [`Session::update`] once per
//! rendered frame with the wall-clock time since the previous frame.

use glam::UVec2;

use crate::audio::{AudioBackend, AudioDirector};
use crate::renderer::{CourtView, Frame, build_frame};
use crate::settings::Settings;
use crate::sim::{self, FlapDirection, GameEvent, SimulationState};

pub struct Session<B: AudioBackend> {
    state: SimulationState,
    audio: AudioDirector<B>,
}

impl<B: AudioBackend> Session<B> {
    /// Start a session; the seed comes from settings or OS entropy
    pub fn new(settings: &Settings, backend: B) -> Self {
        let seed = settings.seed.unwrap_or_else(rand::random);
        log::info!("Starting session with seed {}", seed);
        Self {
            state: SimulationState::new(seed),
            audio: AudioDirector::new(backend, settings),
        }
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn audio(&self) -> &AudioDirector<B> {
        &self.audio
    }

    pub fn apply_settings(&mut self, settings: &Settings) {
        self.audio.apply_settings(settings);
    }

    /// Apply a flap impulse; the cue plays immediately
    pub fn flap(&mut self, direction: FlapDirection) {
        self.state.flap(direction);
        self.dispatch_events();
    }

    /// Map a raw pointer button to a flap. Returns whether it was used.
    pub fn handle_button(&mut self, button: i16) -> bool {
        match FlapDirection::from_button(button) {
            Some(direction) => {
                self.flap(direction);
                true
            }
            None => false,
        }
    }

    /// Run one frame of `elapsed` seconds and route its side effects.
    /// Returns the events that were handled, oldest first.
    pub fn update(&mut self, elapsed: f32) -> Vec<GameEvent> {
        self.audio.ensure_ambient(self.state.environment());
        sim::advance(&mut self.state, elapsed.max(0.0));
        self.dispatch_events()
    }

    /// Vertex data for the current state at the given drawable size
    pub fn frame(&self, size: UVec2) -> Frame {
        build_frame(&self.state, &CourtView::fit(size))
    }

    fn dispatch_events(&mut self) -> Vec<GameEvent> {
        let events = self.state.drain_events();
        for event in &events {
            self.audio.handle_event(event);
        }
        events
    }
}
