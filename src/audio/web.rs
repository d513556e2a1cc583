//! Audio backend using the Web Audio API
//!
//! Procedurally generated cues - no external files needed! Ambient loops are
//! detuned oscillator drones, flap tones are rendered by `synth` into buffers.

use std::collections::HashMap;

use web_sys::{
    AudioBuffer, AudioContext, AudioScheduledSourceNode, GainNode, OscillatorNode, OscillatorType,
};

use super::synth::{self, SAMPLE_RATE};
use super::{AudioBackend, Cue, CueHandle};
use crate::sim::{Environment, FlapDirection};

/// Ambient drones sit well under the one-shots
const AMBIENT_LEVEL: f32 = 0.08;
/// Ramp used when a loop's volume changes (seconds)
const GAIN_RAMP: f64 = 0.05;

/// One sounding node and its gain stage
struct Voice {
    source: AudioScheduledSourceNode,
    gain: GainNode,
}

/// Web Audio backend
pub struct WebAudio {
    ctx: Option<AudioContext>,
    /// Looping cues that can still be stopped
    loops: HashMap<CueHandle, Vec<Voice>>,
    flap_up: Option<AudioBuffer>,
    flap_down: Option<AudioBuffer>,
    next_handle: u32,
}

impl Default for WebAudio {
    fn default() -> Self {
        Self::new()
    }
}

impl WebAudio {
    pub fn new() -> Self {
        // Try to create audio context (may fail if not in secure context)
        let ctx = AudioContext::new().ok();
        if ctx.is_none() {
            log::warn!("Failed to create AudioContext - audio disabled");
        }
        Self {
            ctx,
            loops: HashMap::new(),
            flap_up: None,
            flap_down: None,
            next_handle: 0,
        }
    }

    /// Resume audio context (required after user gesture)
    pub fn resume(&self) {
        if let Some(ctx) = &self.ctx {
            let _ = ctx.resume();
        }
    }

    /// Create an oscillator with gain envelope
    fn create_osc(
        ctx: &AudioContext,
        freq: f32,
        osc_type: OscillatorType,
    ) -> Option<(OscillatorNode, GainNode)> {
        let osc = ctx.create_oscillator().ok()?;
        let gain = ctx.create_gain().ok()?;

        osc.set_type(osc_type);
        osc.frequency().set_value(freq);
        osc.connect_with_audio_node(&gain).ok()?;
        gain.connect_with_audio_node(&ctx.destination()).ok()?;

        Some((osc, gain))
    }

    /// Ambient drone - runs until stopped
    fn start_ambient(ctx: &AudioContext, environment: Environment, vol: f32) -> Vec<Voice> {
        let (partials, osc_type): (&[f32], OscillatorType) = match environment {
            // Low, gritty
            Environment::Mud => (&[55.0, 82.5], OscillatorType::Sawtooth),
            // Glassy shimmer
            Environment::Ice => (&[880.0, 1318.5], OscillatorType::Triangle),
            // Soft and rolling
            Environment::Water => (&[220.0, 277.2], OscillatorType::Sine),
            Environment::Air => (&[330.0, 495.0], OscillatorType::Sine),
        };

        let mut voices = Vec::with_capacity(partials.len());
        for freq in partials {
            let Some((osc, gain)) = Self::create_osc(ctx, *freq, osc_type) else {
                continue;
            };
            let t = ctx.current_time();
            gain.gain().set_value_at_time(0.0, t).ok();
            gain.gain()
                .linear_ramp_to_value_at_time(vol * AMBIENT_LEVEL, t + 0.5)
                .ok();
            osc.start().ok();
            voices.push(Voice {
                source: osc.into(),
                gain,
            });
        }
        voices
    }

    /// Warning - two short high beeps
    fn play_warning(ctx: &AudioContext, vol: f32) {
        for i in 0..2 {
            let delay = i as f64 * 0.15;
            if let Some((osc, gain)) = Self::create_osc(ctx, 880.0, OscillatorType::Square) {
                let t = ctx.current_time() + delay;
                gain.gain().set_value_at_time(vol * 0.2, t).ok();
                gain.gain()
                    .exponential_ramp_to_value_at_time(0.01, t + 0.1)
                    .ok();
                osc.start_with_when(t).ok();
                osc.stop_with_when(t + 0.12).ok();
            }
        }
    }

    /// Death - ominous descend
    fn play_death(ctx: &AudioContext, vol: f32) {
        let Some((osc, gain)) = Self::create_osc(ctx, 300.0, OscillatorType::Sine) else {
            return;
        };
        let t = ctx.current_time();

        gain.gain().set_value_at_time(vol * 0.4, t).ok();
        gain.gain()
            .exponential_ramp_to_value_at_time(0.01, t + 0.8)
            .ok();
        osc.frequency().set_value_at_time(300.0, t).ok();
        osc.frequency()
            .exponential_ramp_to_value_at_time(20.0, t + 0.8)
            .ok();

        osc.start().ok();
        osc.stop_with_when(t + 1.0).ok();
    }

    /// Render (once) the buffer holding a flap tone
    fn flap_buffer(&mut self, direction: FlapDirection) -> Option<AudioBuffer> {
        let ctx = self.ctx.as_ref()?;
        let slot = match direction {
            FlapDirection::Up => &mut self.flap_up,
            FlapDirection::Down => &mut self.flap_down,
        };
        if slot.is_none() {
            let samples = synth::flap_tone(direction);
            let buffer = ctx
                .create_buffer(1, samples.len() as u32, SAMPLE_RATE as f32)
                .ok()?;
            buffer.copy_to_channel(&samples, 0).ok()?;
            *slot = Some(buffer);
        }
        slot.clone()
    }

    fn play_flap(&mut self, direction: FlapDirection, vol: f32) {
        let Some(buffer) = self.flap_buffer(direction) else {
            return;
        };
        let Some(ctx) = &self.ctx else { return };
        let (Ok(source), Ok(gain)) = (ctx.create_buffer_source(), ctx.create_gain()) else {
            return;
        };
        source.set_buffer(Some(&buffer));
        gain.gain().set_value(vol);
        if source.connect_with_audio_node(&gain).is_err()
            || gain.connect_with_audio_node(&ctx.destination()).is_err()
        {
            return;
        }
        source.start().ok();
    }
}

impl AudioBackend for WebAudio {
    fn play(&mut self, cue: Cue, gain: f32) -> CueHandle {
        self.next_handle += 1;
        let handle = CueHandle(self.next_handle);

        let Some(ctx) = self.ctx.clone() else {
            return handle;
        };

        // Resume context if suspended (browsers require user gesture)
        if ctx.state() == web_sys::AudioContextState::Suspended {
            let _ = ctx.resume();
        }

        match cue {
            Cue::Ambient(environment) => {
                let voices = Self::start_ambient(&ctx, environment, gain);
                self.loops.insert(handle, voices);
            }
            Cue::Warning => Self::play_warning(&ctx, gain),
            Cue::FlapUp => self.play_flap(FlapDirection::Up, gain),
            Cue::FlapDown => self.play_flap(FlapDirection::Down, gain),
            Cue::Death => Self::play_death(&ctx, gain),
        }
        handle
    }

    fn stop(&mut self, handle: CueHandle, fade: f32) {
        let Some(voices) = self.loops.remove(&handle) else {
            return;
        };
        let Some(ctx) = &self.ctx else { return };
        let t = ctx.current_time();

        for voice in voices {
            if fade > 0.0 {
                let end = t + fade as f64;
                voice.gain.gain().cancel_scheduled_values(t).ok();
                voice
                    .gain
                    .gain()
                    .set_value_at_time(voice.gain.gain().value(), t)
                    .ok();
                voice.gain.gain().linear_ramp_to_value_at_time(0.0, end).ok();
                voice.source.stop_with_when(end).ok();
            } else {
                voice.source.stop().ok();
            }
        }
    }

    fn set_gain(&mut self, handle: CueHandle, gain: f32) {
        let Some(voices) = self.loops.get(&handle) else {
            return;
        };
        let Some(ctx) = &self.ctx else { return };
        let t = ctx.current_time();

        for voice in voices {
            let param = voice.gain.gain();
            param.cancel_scheduled_values(t).ok();
            param.set_value_at_time(param.value(), t).ok();
            param
                .linear_ramp_to_value_at_time(gain * AMBIENT_LEVEL, t + GAIN_RAMP)
                .ok();
        }
    }
}
