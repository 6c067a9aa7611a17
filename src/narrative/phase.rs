use serde::{Deserialize, Serialize};

use crate::{
    foundation::core::{DVec3, Rgb},
    foundation::error::{LunaError, LunaResult},
    foundation::math::{ensure_finite_non_negative, ensure_finite_vec3},
};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
/// One step of the narrative: display text plus the scene values it settles into.
pub struct Phase {
    /// Stable unique key.
    pub id: String,
    pub title: String,
    pub tagline: String,
    /// Verse lines separated by `\n`.
    pub poem: String,
    /// Resting position of the left body.
    pub left_offset: DVec3,
    /// Resting position of the right body (mirrors the left in the reference set).
    pub right_offset: DVec3,
    pub background: Rgb,
    pub accent: Rgb,
    pub light_intensity: f64,
    pub ambient_intensity: f64,
    pub glow_intensity: f64,
    pub halo_opacity: f64,
    pub star_drift_speed: f64, // rad/s
    pub bloom_intensity: f64,
}

impl Phase {
    pub fn poem_lines(&self) -> impl Iterator<Item = &str> {
        self.poem.lines()
    }

    pub fn validate(&self) -> LunaResult<()> {
        if self.id.trim().is_empty() {
            return Err(LunaError::validation("phase id must be non-empty"));
        }
        let ctx = |field: &str| format!("phase '{}' {field}", self.id);

        ensure_finite_vec3(&ctx("left_offset"), self.left_offset)?;
        ensure_finite_vec3(&ctx("right_offset"), self.right_offset)?;
        for (name, colour) in [("background", self.background), ("accent", self.accent)] {
            if !colour.is_finite() {
                return Err(LunaError::validation(format!("{} must be finite", ctx(name))));
            }
        }
        for (name, value) in [
            ("light_intensity", self.light_intensity),
            ("ambient_intensity", self.ambient_intensity),
            ("glow_intensity", self.glow_intensity),
            ("halo_opacity", self.halo_opacity),
            ("star_drift_speed", self.star_drift_speed),
            ("bloom_intensity", self.bloom_intensity),
        ] {
            ensure_finite_non_negative(&ctx(name), value)?;
        }
        Ok(())
    }
}
