//! Procedural flap tones
//!
//! A 0.2 s phase-modulated sine (220 Hz carrier, 200 Hz modulator) with a
//! quadratic fade to silence. The carrier phase is negated for a downward
//! flap. Pure functions of time so the tone can be checked without a device.

use crate::sim::FlapDirection;

/// Output sample rate (Hz)
pub const SAMPLE_RATE: u32 = 48_000;
/// Tone length (seconds)
pub const FLAP_TONE_SECONDS: f32 = 0.2;

const CARRIER_HZ: f32 = 220.0;
const MODULATOR_HZ: f32 = 200.0;
const PEAK_GAIN: f32 = 0.3;
// Truncated pi keeps samples identical to the reference tone
#[allow(clippy::approx_constant)]
const PI: f32 = 3.1415926;

/// Amplitude of the flap tone `t` seconds after it starts
pub fn flap_tone_sample(t: f32, direction: FlapDirection) -> f32 {
    let carrier = match direction {
        FlapDirection::Up => PI * 2.0 * CARRIER_HZ * t,
        FlapDirection::Down => -PI * 2.0 * CARRIER_HZ * t,
    };
    let modulator = (PI * 2.0 * MODULATOR_HZ * t).sin();
    let falloff = (1.0 - t / FLAP_TONE_SECONDS).max(0.0).powf(2.0);
    (carrier + modulator).sin() * PEAK_GAIN * falloff
}

/// Number of samples in one flap tone
pub fn flap_tone_len() -> usize {
    (SAMPLE_RATE as f32 * FLAP_TONE_SECONDS) as usize
}

/// Whole flap tone at `SAMPLE_RATE`
pub fn flap_tone(direction: FlapDirection) -> Vec<f32> {
    (0..flap_tone_len())
        .map(|i| flap_tone_sample(i as f32 / SAMPLE_RATE as f32, direction))
        .collect()
}
