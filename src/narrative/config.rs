use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{
    animation::ease::Ease,
    audio::asset::INITIAL_VOLUME,
    audio::synth::AmbientSpec,
    foundation::error::{LunaError, LunaResult},
    foundation::math::{ensure_finite_non_negative, ensure_positive},
};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
/// Timing and curves for phase transitions and the ambient volume.
pub struct TransitionConfig {
    /// Tween length for positions, tints, intensities and halo opacity.
    pub scene_secs: f64,
    /// Tween length for the background (and fog) colour.
    pub background_secs: f64,
    pub scene_ease: Ease,
    /// Exponential smoothing rate for star drift speed (1/s).
    pub star_rate: f64,
    /// Exponential smoothing rate for bloom intensity (1/s).
    pub bloom_rate: f64,
    pub fade_in_secs: f64,
    pub fade_out_secs: f64,
    /// Volume re-tween length when the phase changes while playing.
    pub retarget_secs: f64,
    pub volume_ease: Ease,
    pub volume_base: f64,
    pub volume_step: f64,
    pub volume_cap: f64,
    pub initial_volume: f64,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            scene_secs: 2.6,
            background_secs: 2.8,
            scene_ease: Ease::InOutCubic,
            star_rate: 2.0,
            bloom_rate: 1.8,
            fade_in_secs: 2.1,
            fade_out_secs: 1.6,
            retarget_secs: 2.2,
            volume_ease: Ease::InOutSine,
            volume_base: 0.24,
            volume_step: 0.12,
            volume_cap: 0.75,
            initial_volume: INITIAL_VOLUME,
        }
    }
}

impl TransitionConfig {
    /// Playback volume for a phase index: `min(cap, base + index * step)`.
    pub fn volume_for_index(&self, index: usize) -> f64 {
        (self.volume_base + index as f64 * self.volume_step).min(self.volume_cap)
    }

    /// Longest time any discrete tween can take to settle.
    pub fn settle_secs(&self) -> f64 {
        self.scene_secs.max(self.background_secs)
    }

    pub fn validate(&self) -> LunaResult<()> {
        for (name, value) in [
            ("scene_secs", self.scene_secs),
            ("background_secs", self.background_secs),
            ("fade_in_secs", self.fade_in_secs),
            ("fade_out_secs", self.fade_out_secs),
            ("retarget_secs", self.retarget_secs),
            ("volume_base", self.volume_base),
            ("volume_step", self.volume_step),
        ] {
            ensure_finite_non_negative(name, value)?;
        }
        ensure_positive("star_rate", self.star_rate)?;
        ensure_positive("bloom_rate", self.bloom_rate)?;
        for (name, value) in [
            ("volume_cap", self.volume_cap),
            ("initial_volume", self.initial_volume),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(LunaError::validation(format!(
                    "{name} must be within [0, 1] (got {value})"
                )));
            }
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
/// Input translation policy.
pub struct NavigationConfig {
    /// Wheel lock after an accepted wheel step.
    pub cooldown_secs: f64,
    /// Wheel deltas with a smaller magnitude are ignored.
    pub wheel_threshold: f64,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            cooldown_secs: 1.3,
            wheel_threshold: 20.0,
        }
    }
}

impl NavigationConfig {
    pub fn validate(&self) -> LunaResult<()> {
        ensure_finite_non_negative("cooldown_secs", self.cooldown_secs)?;
        ensure_finite_non_negative("wheel_threshold", self.wheel_threshold)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
/// Everything tunable about a session besides the phases themselves.
pub struct ExperienceConfig {
    pub ambient: AmbientSpec,
    pub transition: TransitionConfig,
    pub navigation: NavigationConfig,
}

impl ExperienceConfig {
    pub fn validate(&self) -> LunaResult<()> {
        self.ambient.validate()?;
        self.transition.validate()?;
        self.navigation.validate()
    }

    pub fn from_json_str(json: &str) -> LunaResult<Self> {
        let cfg: Self = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_path(path: &Path) -> LunaResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            LunaError::validation(format!("failed to read config '{}': {e}", path.display()))
        })?;
        Self::from_json_str(&text)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/narrative/config.rs"]
mod tests;
