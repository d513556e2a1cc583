//! JavaScript surface for the browser build
//!
//! The page owns the canvas, the WebGPU pipeline and the animation frame
//! loop; it drives a [`WebGame`] and uploads the vertex data it returns.

use glam::{UVec2, Vec2};
use wasm_bindgen::prelude::*;

use crate::audio::web::WebAudio;
use crate::renderer::CourtView;
use crate::session::Session;
use crate::settings::Settings;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"Logger already initialised".into());
    }
    log::info!("Flappy Elements starting...");
}

/// A play session exposed to JavaScript
#[wasm_bindgen]
pub struct WebGame {
    session: Session<WebAudio>,
    settings: Settings,
}

#[wasm_bindgen]
impl WebGame {
    #[wasm_bindgen(constructor)]
    pub fn new() -> WebGame {
        let settings = Settings::load();
        let session = Session::new(&settings, WebAudio::new());
        WebGame { session, settings }
    }

    /// Run one frame; `elapsed` is in seconds
    pub fn advance(&mut self, elapsed: f32) {
        self.session.update(elapsed);
    }

    /// `MouseEvent.button` handler. Returns whether the button flapped.
    pub fn pointer_down(&mut self, button: i16) -> bool {
        // Browsers only allow audio after a user gesture
        self.session.audio().backend().resume();
        self.session.handle_button(button)
    }

    pub fn score(&self) -> u32 {
        self.session.state().score
    }

    pub fn environment(&self) -> String {
        self.session.state().environment().to_string()
    }

    /// Interleaved `[x, y, r, g, b, a]` vertices for a drawable of `width` x `height`
    pub fn vertices(&self, width: u32, height: u32) -> js_sys::Float32Array {
        let frame = self.session.frame(UVec2::new(width, height));
        let floats: &[f32] = bytemuck::cast_slice(&frame.vertices);
        js_sys::Float32Array::from(floats)
    }

    /// Column-major court-to-clip matrix
    pub fn court_to_clip(&self, width: u32, height: u32) -> Vec<f32> {
        CourtView::fit(UVec2::new(width, height))
            .court_to_clip()
            .to_cols_array()
            .to_vec()
    }

    pub fn clear_color(&self) -> Vec<f32> {
        crate::renderer::vertex::colors::background(self.session.state().environment()).to_vec()
    }

    /// Pixel position (origin top-left) to `[x, y]` in court units
    pub fn pixel_to_court(&self, x: f32, y: f32, width: u32, height: u32) -> Vec<f32> {
        let size = UVec2::new(width, height);
        let court = CourtView::fit(size).pixel_to_court(Vec2::new(x, y), size);
        vec![court.x, court.y]
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.settings.muted = muted;
        self.session.apply_settings(&self.settings);
        self.settings.save();
    }

    pub fn muted(&self) -> bool {
        self.settings.muted
    }
}

impl Default for WebGame {
    fn default() -> Self {
        Self::new()
    }
}
