use serde::{Deserialize, Serialize};

use crate::{
    foundation::core::{DVec3, Rgb},
    narrative::phase::Phase,
};

/// Near-white the bodies are tinted toward (`#f5f6ff`).
pub const MOON_BASE: Rgb = Rgb::new(245.0 / 255.0, 246.0 / 255.0, 1.0);
pub const MOON_TINT_MIX: f64 = 0.35;
pub const LIGHT_TINT_MIX: f64 = 0.25;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
/// Every scene value a renderer reads each frame.
pub struct SceneParams {
    /// Clear colour; the fog colour follows it.
    pub background: Rgb,
    pub left_offset: DVec3,
    pub right_offset: DVec3,
    /// Body surface and emissive colour.
    pub moon_tint: Rgb,
    /// Point light colour.
    pub light_tint: Rgb,
    pub ambient_color: Rgb,
    pub light_intensity: f64,
    pub ambient_intensity: f64,
    pub glow_intensity: f64,
    pub halo_opacity: f64,
    pub star_drift_speed: f64,
    pub bloom_intensity: f64,
}

impl SceneParams {
    pub fn from_phase(phase: &Phase) -> Self {
        Self {
            background: phase.background,
            left_offset: phase.left_offset,
            right_offset: phase.right_offset,
            moon_tint: phase.accent.mix(MOON_BASE, MOON_TINT_MIX),
            light_tint: phase.accent.mix(Rgb::WHITE, LIGHT_TINT_MIX),
            ambient_color: phase.accent,
            light_intensity: phase.light_intensity,
            ambient_intensity: phase.ambient_intensity,
            glow_intensity: phase.glow_intensity,
            halo_opacity: phase.halo_opacity,
            star_drift_speed: phase.star_drift_speed,
            bloom_intensity: phase.bloom_intensity,
        }
    }

    pub fn fog_color(&self) -> Rgb {
        self.background
    }

    /// Largest absolute difference across every scalar, channel and component.
    pub fn max_delta(&self, other: &Self) -> f64 {
        let vec = |a: DVec3, b: DVec3| (a - b).abs().max_element();
        [
            self.background.max_channel_delta(other.background),
            vec(self.left_offset, other.left_offset),
            vec(self.right_offset, other.right_offset),
            self.moon_tint.max_channel_delta(other.moon_tint),
            self.light_tint.max_channel_delta(other.light_tint),
            self.ambient_color.max_channel_delta(other.ambient_color),
            (self.light_intensity - other.light_intensity).abs(),
            (self.ambient_intensity - other.ambient_intensity).abs(),
            (self.glow_intensity - other.glow_intensity).abs(),
            (self.halo_opacity - other.halo_opacity).abs(),
            (self.star_drift_speed - other.star_drift_speed).abs(),
            (self.bloom_intensity - other.bloom_intensity).abs(),
        ]
        .into_iter()
        .fold(0.0, f64::max)
    }

    /// Same as [`SceneParams::max_delta`] but ignoring the smoothed fields.
    pub fn max_tweened_delta(&self, other: &Self) -> f64 {
        let mut a = self.clone();
        a.star_drift_speed = other.star_drift_speed;
        a.bloom_intensity = other.bloom_intensity;
        a.max_delta(other)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
/// Observable transition state: active phase, live values, and the values being approached.
pub struct TransitionState {
    pub current_index: usize,
    pub current: SceneParams,
    pub target: SceneParams,
}

impl TransitionState {
    pub fn at_rest(index: usize, phase: &Phase) -> Self {
        let params = SceneParams::from_phase(phase);
        Self {
            current_index: index,
            current: params.clone(),
            target: params,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transition/params.rs"]
mod tests;
